use bingx_monitor::cli::{Cli, Commands};
use bingx_monitor::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = bingx_monitor::telemetry::init_telemetry(&config.telemetry)?;

    let result = match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting crossover monitor");
            args.execute(config).await
        }
        Commands::Check(args) => args.execute(&config),
        Commands::Quote(args) => args.execute(&config).await,
        Commands::Config => {
            println!("Current configuration:");
            println!("  Pairs: {}", config.monitor.symbols.join(", "));
            println!("  Poll interval: {}s", config.monitor.poll_interval_secs);
            println!("  Exchange: {}", config.exchange.base_url);
            println!(
                "  Signal: SMA-{}, stop {}%, take {}%",
                config.signal.sma_period,
                config.signal.stop_loss_pct * rust_decimal_macros::dec!(100),
                config.signal.take_profit_pct * rust_decimal_macros::dec!(100),
            );
            println!(
                "  Telegram: {}",
                if config.telegram.is_some() {
                    "configured"
                } else {
                    "disabled"
                }
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Monitor terminated with error");
        std::process::exit(1);
    }

    Ok(())
}
