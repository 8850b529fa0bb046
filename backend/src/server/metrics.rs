//! Prometheus middleware exposing `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Build the request metrics middleware.
///
/// # Errors
/// Returns an error when the collectors cannot be registered.
pub(crate) fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("secure_nest")
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("prometheus metrics setup failed: {err}")))
}
