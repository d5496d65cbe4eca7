//! The sample system's managed components.
//!
//! Each component owns its runtime state behind interior mutability and
//! implements the framework's capability traits:
//!
//! - [`Database`] and [`Cache`] — start and stop.
//! - [`MetricsFlusher`] — stop only (counters need no startup, but must be
//!   flushed before the process exits).
//! - [`HttpServer`] — start and stop; depends on all of the above through
//!   [`AppState`].
//! - [`AppState`] — no capabilities at all. It is registered as a plain
//!   dependency hop so the server's transitive dependencies are visible to
//!   the orchestrator without the server naming them one by one.

pub mod cache;
pub mod database;
pub mod metrics;
pub mod server;

pub use cache::Cache;
pub use database::Database;
pub use metrics::MetricsFlusher;
pub use server::HttpServer;

use std::sync::Arc;

/// Shared handles the request path needs. Carried by [`HttpServer`] and
/// registered in the graph as a capability-free node.
pub struct AppState {
    pub database: Arc<Database>,
    pub cache: Arc<Cache>,
    pub metrics: Arc<MetricsFlusher>,
}
