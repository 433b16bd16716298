//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::Ipv4Addr;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum Counter {
    /// Completed poll cycles
    PollCycles,
    /// Price fetches that failed or returned an unusable payload
    FetchFailures,
    /// Crossover alerts dispatched
    AlertsSent,
    /// Notification deliveries that failed
    DeliveryFailures,
}

impl Counter {
    fn name(self) -> &'static str {
        match self {
            Counter::PollCycles => "bingx_monitor_poll_cycles_total",
            Counter::FetchFailures => "bingx_monitor_fetch_failures_total",
            Counter::AlertsSent => "bingx_monitor_alerts_sent_total",
            Counter::DeliveryFailures => "bingx_monitor_delivery_failures_total",
        }
    }
}

/// Increment a counter by one
pub fn increment(counter: Counter) {
    metrics::counter!(counter.name()).increment(1);
}

/// Start the Prometheus scrape endpoint on the given port
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener((Ipv4Addr::UNSPECIFIED, port))
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(port, "Metrics exporter listening");
    Ok(())
}
