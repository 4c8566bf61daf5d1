//! Prometheus request metrics.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Metric name prefix.
pub(crate) const NAMESPACE: &str = "island_guide";

/// Build request metrics served at `/metrics`.
///
/// Probe traffic is excluded so scrape intervals do not skew request counts.
pub(crate) fn make_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(NAMESPACE)
        .endpoint("/metrics")
        .exclude("/health/ready")
        .exclude("/health/live")
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}
