use std::path::PathBuf;

use macropanel::PanelConnector;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

/// Return a connector for demos.
///
/// Only the deterministic mock ships; live providers plug in through
/// `PanelConnector` the same way.
#[must_use]
pub fn get_connector() -> Arc<dyn PanelConnector> {
    Arc::new(macropanel_mock::MockConnector::new())
}

/// Directory the demos write CSV files into (`MACROPANEL_OUT_DIR`, default `data`).
#[must_use]
pub fn output_dir() -> PathBuf {
    std::env::var_os("MACROPANEL_OUT_DIR").map_or_else(|| PathBuf::from("data"), PathBuf::from)
}

/// Install a human-friendly tracing subscriber with env-based filtering.
///
/// Suggested: `RUST_LOG=info,macropanel=debug,macropanel_core=debug`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
