//! Prometheus exposition for request counters and latency.

use axum::{routing::get, Router};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::analyze::Label;

pub const ANALYZE_REQUESTS: &str = "sentiment_analyze_requests_total";
pub const ANALYZE_REJECTED: &str = "sentiment_analyze_rejected_total";
pub const ANALYZE_DURATION: &str = "sentiment_analyze_duration_seconds";

#[derive(Clone)]
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Fails if one is already installed.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;
        Ok(Self { handle })
    }

    /// Router exposing `/metrics` in the Prometheus text format.
    pub fn router<S>(&self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// Without an installed recorder these are no-ops.
pub fn record_analysis(label: Label, seconds: f64) {
    counter!(ANALYZE_REQUESTS, "label" => label.as_str()).increment(1);
    histogram!(ANALYZE_DURATION).record(seconds);
}

pub fn record_rejected(reason: &'static str) {
    counter!(ANALYZE_REJECTED, "reason" => reason).increment(1);
}
