//! Wires the sample components into a [`ComponentGraph`].
//!
//! Note what is *not* here: no start order. The graph edges carry all of it.
//! The server depends on [`AppState`], which depends on the database, cache,
//! and metrics; the orchestrator works out that those three come up before
//! the listener and go down after it.

use std::sync::Arc;

use lifecycle_framework::{ComponentGraph, Lifecycle};
use tokio_util::sync::CancellationToken;

use crate::components::{AppState, Cache, Database, HttpServer, MetricsFlusher};
use crate::config::Settings;

/// The built system: the graph plus handles to the live components.
pub struct System {
    pub graph: ComponentGraph,
    pub shutdown: CancellationToken,
    pub database: Arc<Database>,
    pub cache: Arc<Cache>,
    pub metrics: Arc<MetricsFlusher>,
    pub server: Arc<HttpServer>,
}

impl System {
    /// Creates all components and registers them with their dependencies.
    /// Nothing is started yet; that is the caller's call to
    /// [`ComponentGraph::start`].
    pub fn build(settings: Settings) -> Self {
        let database = Arc::new(Database::new(settings.database));
        let cache = Arc::new(Cache::new(settings.cache));
        let metrics = Arc::new(MetricsFlusher::new());
        let state = Arc::new(AppState {
            database: database.clone(),
            cache: cache.clone(),
            metrics: metrics.clone(),
        });
        let server = Arc::new(HttpServer::new(settings.server, state));

        let mut graph = ComponentGraph::new();
        let database_id = graph.add_component("database", Lifecycle::shared(database.clone()));
        let cache_id = graph.add_component("cache", Lifecycle::shared(cache.clone()));
        let metrics_id = graph.add_component("metrics", Lifecycle::shared_stopper(metrics.clone()));
        let state_id = graph.add_component("state", Lifecycle::Neither);
        let server_id = graph.add_component("server", Lifecycle::shared(server.clone()));

        // AppState is a capability-free hop: the server names it once, and
        // through it transitively depends on everything it holds.
        graph.add_dependency(state_id, "database", database_id);
        graph.add_dependency(state_id, "cache", cache_id);
        graph.add_dependency(state_id, "metrics", metrics_id);
        graph.add_dependency(server_id, "state", state_id);

        Self {
            graph,
            shutdown: CancellationToken::new(),
            database,
            cache,
            metrics,
            server,
        }
    }
}
