//! # Component Capabilities
//!
//! The [`Startable`] and [`Stoppable`] traits define the contract a managed
//! value must implement to participate in ordered startup and shutdown. A
//! value may implement neither, either, or both.
//!
//! # Architecture Note
//! Rather than probing a value for its capabilities every time the graph is
//! walked, the capabilities are captured **once**, at registration, in a
//! [`Lifecycle`] record. The orchestrator then only ever matches on the
//! record. This keeps the hot path free of dynamic checks and makes a node's
//! eligibility an explicit, inspectable fact.
//!
//! # Async & Cancellation
//! Both traits are `#[async_trait]` so hooks can perform real I/O. Every hook
//! receives a [`CancellationToken`]; the framework threads the caller's token
//! through unchanged and never polls it itself — reacting to cancellation is
//! entirely the component's responsibility.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::BoxError;

/// Startup capability. Values implementing this trait are started by
/// [`ComponentGraph::start`](crate::ComponentGraph::start), after everything
/// they depend on.
#[async_trait]
pub trait Startable: Send + Sync {
    /// Bring the component up. A returned error aborts the whole startup
    /// sequence.
    async fn start(&self, shutdown: CancellationToken) -> Result<(), BoxError>;
}

/// Shutdown capability. Values implementing this trait are stopped by
/// [`ComponentGraph::stop`](crate::ComponentGraph::stop), before anything
/// they depend on.
#[async_trait]
pub trait Stoppable: Send + Sync {
    /// Tear the component down. Errors are logged and absorbed; shutdown
    /// always proceeds to the remaining components.
    async fn stop(&self, shutdown: CancellationToken) -> Result<(), BoxError>;
}

/// A node's capability record, fixed at registration.
///
/// Only `Starter`, `Stopper`, and `StarterStopper` nodes participate in
/// ordering. `Neither` nodes still exist in the graph and are traversed as
/// dependency hops, but no ordering constraint is derived from them.
#[derive(Clone)]
pub enum Lifecycle {
    /// No capability; the node is a pass-through dependency.
    Neither,
    /// Startup only.
    Starter(Arc<dyn Startable>),
    /// Shutdown only.
    Stopper(Arc<dyn Stoppable>),
    /// Both capabilities, backed by the same underlying value.
    StarterStopper {
        starter: Arc<dyn Startable>,
        stopper: Arc<dyn Stoppable>,
    },
}

impl Lifecycle {
    /// Record a start-only component.
    pub fn starter<S>(component: S) -> Self
    where
        S: Startable + 'static,
    {
        Self::Starter(Arc::new(component))
    }

    /// Record a stop-only component.
    pub fn stopper<S>(component: S) -> Self
    where
        S: Stoppable + 'static,
    {
        Self::Stopper(Arc::new(component))
    }

    /// Record a component exposing both capabilities.
    pub fn starter_stopper<S>(component: S) -> Self
    where
        S: Startable + Stoppable + 'static,
    {
        Self::shared(Arc::new(component))
    }

    /// Like [`Lifecycle::starter_stopper`], but for a value the caller keeps
    /// a handle to (the usual case: the application still needs to talk to
    /// the component after startup).
    pub fn shared<S>(component: Arc<S>) -> Self
    where
        S: Startable + Stoppable + 'static,
    {
        Self::StarterStopper {
            starter: component.clone(),
            stopper: component,
        }
    }

    /// Start-only variant of [`Lifecycle::shared`].
    pub fn shared_starter<S>(component: Arc<S>) -> Self
    where
        S: Startable + 'static,
    {
        Self::Starter(component)
    }

    /// Stop-only variant of [`Lifecycle::shared`].
    pub fn shared_stopper<S>(component: Arc<S>) -> Self
    where
        S: Stoppable + 'static,
    {
        Self::Stopper(component)
    }

    /// True iff the node exposes at least one capability and therefore
    /// participates in ordering.
    pub fn is_eligible(&self) -> bool {
        !matches!(self, Self::Neither)
    }

    /// The start hook, if present.
    pub fn as_starter(&self) -> Option<&dyn Startable> {
        match self {
            Self::Starter(s) => Some(s.as_ref()),
            Self::StarterStopper { starter, .. } => Some(starter.as_ref()),
            _ => None,
        }
    }

    /// The stop hook, if present.
    pub fn as_stopper(&self) -> Option<&dyn Stoppable> {
        match self {
            Self::Stopper(s) => Some(s.as_ref()),
            Self::StarterStopper { stopper, .. } => Some(stopper.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Neither => "Neither",
            Self::Starter(_) => "Starter",
            Self::Stopper(_) => "Stopper",
            Self::StarterStopper { .. } => "StarterStopper",
        };
        f.write_str(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    #[async_trait]
    impl Startable for Noop {
        async fn start(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[async_trait]
    impl Stoppable for Noop {
        async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn eligibility_follows_variant() {
        assert!(!Lifecycle::Neither.is_eligible());
        assert!(Lifecycle::starter(Noop).is_eligible());
        assert!(Lifecycle::stopper(Noop).is_eligible());
        assert!(Lifecycle::starter_stopper(Noop).is_eligible());
    }

    #[test]
    fn hooks_match_variant() {
        let starter = Lifecycle::starter(Noop);
        assert!(starter.as_starter().is_some());
        assert!(starter.as_stopper().is_none());

        let stopper = Lifecycle::stopper(Noop);
        assert!(stopper.as_starter().is_none());
        assert!(stopper.as_stopper().is_some());

        let both = Lifecycle::starter_stopper(Noop);
        assert!(both.as_starter().is_some());
        assert!(both.as_stopper().is_some());

        assert!(Lifecycle::Neither.as_starter().is_none());
        assert!(Lifecycle::Neither.as_stopper().is_none());
    }
}
