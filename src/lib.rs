//! bingx-monitor: SMA crossover alert bot for BingX spot pairs
//!
//! This library provides the core components for:
//! - Polling ticker prices from the BingX spot REST API
//! - Rolling per-pair price history
//! - SMA crossover detection with per-pair signal state
//! - Telegram alert delivery with stop-loss/take-profit levels
//! - Full observability stack

pub mod cli;
pub mod config;
pub mod exchange;
pub mod history;
pub mod monitor;
pub mod notify;
pub mod signal;
pub mod telemetry;
