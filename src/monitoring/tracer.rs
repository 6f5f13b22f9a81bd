/*!
 * Structured Tracing
 * Subscriber setup and simulation spans using the tracing crate
 */

use crate::scheduler::Algorithm;
use tracing::{info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
///
/// `json` selects JSON output (see `SimConfig::trace_json`). Calling this
/// more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json, "structured tracing initialized");
    }
}

/// Unique id correlating every event of one simulation run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span wrapping one simulation run
pub fn simulation_span(algorithm: Algorithm, processes: usize) -> Span {
    span!(
        Level::DEBUG,
        "simulation",
        run_id = %generate_run_id(),
        algorithm = algorithm.as_str(),
        processes = processes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(generate_run_id(), generate_run_id());
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
