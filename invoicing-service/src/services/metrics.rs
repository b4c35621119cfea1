//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// This must be called once at startup before any metrics are recorded.
/// Panics if called more than once.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

pub fn record_invoice_created() {
    counter!("invoicing_invoices_created_total").increment(1);
}

pub fn record_invoice_updated(recomputed: bool) {
    let recomputed = if recomputed { "true" } else { "false" };
    counter!("invoicing_invoices_updated_total", "recomputed" => recomputed).increment(1);
}

pub fn record_invoice_deleted() {
    counter!("invoicing_invoices_deleted_total").increment(1);
}

pub fn record_update_conflict() {
    counter!("invoicing_update_conflicts_total").increment(1);
}
