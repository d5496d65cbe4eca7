//! Tracing setup shared by applications built on the framework.

/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity, e.g.
///
/// - `RUST_LOG=info` — lifecycle milestones
/// - `RUST_LOG=debug` — every component start/stop event
/// - `RUST_LOG=lifecycle_framework=debug` — debug for this crate only
///
/// Installing a subscriber is optional everywhere in this crate: orchestration
/// emits its events regardless, and with no subscriber they are simply
/// discarded.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
