//! Global `tracing` subscriber setup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], falling back to `default_filter` when `RUST_LOG` is unset or invalid.
pub fn init_with_default(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let span_events = span_events_for(&env_filter.to_string());

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Per-image and per-batch spans only report their close (with timing) when
/// some directive enables debug or trace.
fn span_events_for(directives: &str) -> FmtSpan {
    let verbose = directives
        .split(',')
        .map(str::trim)
        .any(|directive| directive.ends_with("debug") || directive.ends_with("trace"));

    if verbose { FmtSpan::CLOSE } else { FmtSpan::NONE }
}
