//! Check command implementation
//!
//! Setup-style configuration review: reports values that still look
//! like placeholders. Warnings only, never a hard failure.

use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct CheckArgs {}

impl CheckArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        println!("=== Configuration Check ===");

        let issues = config.placeholder_issues();
        if issues.is_empty() {
            println!("✓ Config appears to be set up");
            if config.telegram.is_none() {
                println!("  (no [telegram] section: alerts will only be logged)");
            }
            println!("✓ Ready to run! Use: bingx-monitor run");
        } else {
            for issue in &issues {
                println!("⚠ {}", issue);
            }
            println!("⚠ Please fill in config.toml before running");
        }

        Ok(())
    }
}
