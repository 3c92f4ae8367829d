//! Metrics collection and exposition.
//!
//! # Metrics
//! - `portfolio_requests_total` (counter): requests by route, method, status
//! - `portfolio_request_duration_seconds` (histogram): latency by route
//! - `portfolio_contacts_created_total` (counter): stored contact messages
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(route: &str, method: &str, status: u16, start: Instant) {
    counter!(
        "portfolio_requests_total",
        "route" => route.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("portfolio_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_contact_created() {
    counter!("portfolio_contacts_created_total").increment(1);
}
