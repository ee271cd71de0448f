//! Prometheus metrics.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::IntCounter;

use crate::{Result, ServerError};

/// Counters exposed on `/metrics`.
#[derive(Debug, Clone)]
pub struct ServerMetrics {
    /// GitHub API calls.
    pub github_api_calls: IntCounter,
    /// Label events forwarded to peers.
    pub replicated_events: IntCounter,
    /// Label events recognized as echoes of our own writes.
    pub suppressed_echoes: IntCounter,
}

impl ServerMetrics {
    /// Create the counters.
    pub fn new() -> Result<Self> {
        Ok(Self {
            github_api_calls: IntCounter::new("github_api_calls", "GitHub API calls")?,
            replicated_events: IntCounter::new("replicated_events", "Replicated label events")?,
            suppressed_echoes: IntCounter::new("suppressed_echoes", "Suppressed echo events")?,
        })
    }
}

pub(crate) fn build_metrics_handler(metrics: &ServerMetrics) -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError { source: e.into() })?;

    setup_process_metrics(&prometheus)?;

    prometheus
        .registry
        .register(Box::new(metrics.github_api_calls.clone()))?;
    prometheus
        .registry
        .register(Box::new(metrics.replicated_events.clone()))?;
    prometheus
        .registry
        .register(Box::new(metrics.suppressed_echoes.clone()))?;

    Ok(prometheus)
}

#[cfg(target_os = "linux")]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    Ok(())
}
