//! # Orchestrator
//!
//! Drives the actual start and stop calls over the computed levels. Both
//! entry points recompute the levels from the graph first and fail before
//! touching any component if a fatal cycle exists.
//!
//! The two directions deliberately handle per-component failure differently:
//!
//! - **Start is fail-fast.** A failed start aborts the sequence immediately;
//!   components started earlier are left running, and bringing the system
//!   back down is the caller's decision (usually by calling
//!   [`stop`](ComponentGraph::stop)). Continuing to start components on top
//!   of a failed dependency would compound the damage.
//! - **Stop is best-effort.** Every stoppable component gets exactly one stop
//!   attempt; failures are logged at error level and swallowed. Shutdown has
//!   to make progress even when individual components misbehave.
//!
//! Execution is sequential throughout: one component at a time, each hook
//! awaited to completion. Components within a bucket have no ordering
//! relationship, but the orchestrator still does not run them concurrently —
//! ordering across buckets is the only guarantee this crate provides.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::{CycleError, StartError};
use crate::graph::ComponentGraph;
use crate::level::Levels;

impl ComponentGraph {
    /// Starts every startable component, dependencies first.
    ///
    /// Buckets are walked from fewest dependencies to most; within a bucket,
    /// registration order. The caller's `shutdown` token is handed to every
    /// hook — the framework itself never polls it.
    ///
    /// On the first failure the error is returned immediately, wrapped with
    /// the failing component's name; nothing is rolled back.
    pub async fn start(&self, shutdown: &CancellationToken) -> Result<(), StartError> {
        let levels = Levels::build(self)?;

        for bucket in levels.buckets().iter().rev() {
            for &id in bucket {
                if let Some(starter) = self.lifecycle(id).as_starter() {
                    debug!(component = %self.name(id), "starting");
                    starter
                        .start(shutdown.clone())
                        .await
                        .map_err(|source| StartError::Component {
                            component: self.name(id).to_string(),
                            source,
                        })?;
                }
            }
        }
        Ok(())
    }

    /// Stops every stoppable component, dependents first — the exact reverse
    /// of the start order.
    ///
    /// Individual stop failures are logged and absorbed; the only error this
    /// method returns is a fatal dependency cycle, detected before any
    /// component is touched.
    pub async fn stop(&self, shutdown: &CancellationToken) -> Result<(), CycleError> {
        let levels = Levels::build(self)?;

        for bucket in levels.buckets() {
            for &id in bucket {
                if let Some(stopper) = self.lifecycle(id).as_stopper() {
                    debug!(component = %self.name(id), "stopping");
                    if let Err(err) = stopper.stop(shutdown.clone()).await {
                        error!(component = %self.name(id), error = %err, "error stopping component");
                    }
                }
            }
        }
        Ok(())
    }
}
