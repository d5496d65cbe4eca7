//! # Lifecycle Framework
//!
//! This crate starts and stops a fixed set of interdependent components in
//! dependency order, without any component declaring its position explicitly.
//! A component is always started after everything it depends on, and stopped
//! before those same dependencies are torn down.
//!
//! ## How Ordering Is Derived
//!
//! Components and their named dependency edges are registered into a
//! [`ComponentGraph`]. From the graph alone, the framework:
//!
//! 1. **Filters** — only components exposing a start or stop capability
//!    (their [`Lifecycle`] record) participate in ordering; everything else
//!    is a pass-through dependency hop.
//! 2. **Analyzes** — for each participating component it enumerates the
//!    dependency cycles through it and computes its transitive reachability.
//!    A cycle is fatal only when it is a direct self-reference or ties
//!    together two or more participating components; cycles routed purely
//!    through pass-through hops are harmless.
//! 3. **Levels** — participating components are bucketed by how many
//!    participating components they transitively reach. Fewest dependencies
//!    start first; stop runs the exact reverse.
//!
//! Both [`ComponentGraph::start`] and [`ComponentGraph::stop`] recompute the
//! levels on every call and refuse to touch any component when the graph has
//! a fatal cycle.
//!
//! ## Failure Policy
//!
//! Start is **fail-fast**: the first failing component aborts startup and is
//! reported as [`StartError::Component`]; components already started stay
//! running. Stop is **best-effort**: every stoppable component gets exactly
//! one attempt, failures are logged and absorbed. This asymmetry is a design
//! decision, not an accident — see the [`orchestrator`] policy notes.
//!
//! ## Quick Start
//!
//! ```
//! use lifecycle_framework::{ComponentGraph, Lifecycle, Startable, Stoppable, BoxError};
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//!
//! struct Database;
//!
//! #[async_trait]
//! impl Startable for Database {
//!     async fn start(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
//!         // open pools, run migrations, ...
//!         Ok(())
//!     }
//! }
//!
//! #[async_trait]
//! impl Stoppable for Database {
//!     async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//! }
//!
//! struct Api;
//!
//! #[async_trait]
//! impl Startable for Api {
//!     async fn start(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut graph = ComponentGraph::new();
//!     let database = graph.add_component("database", Lifecycle::starter_stopper(Database));
//!     let api = graph.add_component("api", Lifecycle::starter(Api));
//!     graph.add_dependency(api, "database", database);
//!
//!     let shutdown = CancellationToken::new();
//!     // database starts before api ...
//!     graph.start(&shutdown).await.unwrap();
//!     // ... and would stop after it.
//!     graph.stop(&shutdown).await.unwrap();
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! Orchestration is sequential: one component at a time, each hook awaited
//! to completion on the caller's task. Components sharing a level have no
//! ordering relationship, but the framework still does not start them
//! concurrently — cross-level ordering is the only guarantee offered, and
//! keeping the walk sequential keeps partial-failure states trivial to
//! reason about. The caller's `CancellationToken` is threaded into every
//! hook; honoring it is each component's own job.
//!
//! ## Testing
//!
//! The [`mock`] module provides a recording [`MockComponent`](mock::MockComponent)
//! with failure injection so orchestration order is directly observable in
//! tests.

pub mod analyze;
pub mod component;
pub mod error;
pub mod graph;
pub mod level;
pub mod mock;
pub mod orchestrator;
pub mod tracing;

// Re-export core types for convenience
pub use component::{Lifecycle, Startable, Stoppable};
pub use error::{BoxError, CycleError, CycleStep, StartError};
pub use graph::{ComponentGraph, ComponentId};
pub use level::Levels;
