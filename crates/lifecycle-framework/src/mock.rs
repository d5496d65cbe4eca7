//! # Mock Components & Testing Guide
//!
//! Orchestration is all about *order*, and order is awkward to observe from
//! the outside. This module provides a recording component so tests can
//! assert on the exact sequence of start and stop calls without writing a
//! bespoke double every time.
//!
//! - [`EventLog`] is a cheaply-cloneable, thread-safe recorder shared by any
//!   number of components.
//! - [`MockComponent`] appends to the log on every hook call and can be told
//!   to fail its start or its stop, for exercising the fail-fast and
//!   best-effort policies.
//!
//! # Example
//!
//! ```
//! use lifecycle_framework::mock::{EventLog, LifecycleEvent, MockComponent};
//! use lifecycle_framework::{ComponentGraph, Lifecycle};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//!     let log = EventLog::new();
//!     let mut graph = ComponentGraph::new();
//!     let db = graph.add_component(
//!         "db",
//!         Lifecycle::starter_stopper(MockComponent::new("db", &log)),
//!     );
//!     let api = graph.add_component(
//!         "api",
//!         Lifecycle::starter_stopper(MockComponent::new("api", &log)),
//!     );
//!     graph.add_dependency(api, "db", db);
//!
//!     let shutdown = CancellationToken::new();
//!     graph.start(&shutdown).await.unwrap();
//!     graph.stop(&shutdown).await.unwrap();
//!
//!     assert_eq!(
//!         log.events(),
//!         vec![
//!             LifecycleEvent::Started("db".into()),
//!             LifecycleEvent::Started("api".into()),
//!             LifecycleEvent::Stopped("api".into()),
//!             LifecycleEvent::Stopped("db".into()),
//!         ],
//!     );
//! }
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::component::{Startable, Stoppable};
use crate::error::BoxError;

/// One observed hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A component's start hook ran (recorded even when it then fails).
    Started(String),
    /// A component's stop hook ran (recorded even when it then fails).
    Stopped(String),
}

/// Shared recorder of hook invocations, in call order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<LifecycleEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: LifecycleEvent) {
        self.events.lock().expect("event log poisoned").push(event);
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().expect("event log poisoned").clone()
    }

    /// Names from `Started` events, in order.
    pub fn started(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                LifecycleEvent::Started(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// Names from `Stopped` events, in order.
    pub fn stopped(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                LifecycleEvent::Stopped(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().expect("event log poisoned").is_empty()
    }
}

/// Error injected by a failing [`MockComponent`].
#[derive(Debug, thiserror::Error)]
#[error("injected failure in {0}")]
pub struct InjectedFailure(pub String);

/// A component that records its hook calls into an [`EventLog`].
///
/// Register it under whichever [`Lifecycle`](crate::Lifecycle) variant the
/// test needs; a `MockComponent` registered as a starter only will never see
/// its stop hook.
#[derive(Debug, Clone)]
pub struct MockComponent {
    name: String,
    log: EventLog,
    fail_start: bool,
    fail_stop: bool,
}

impl MockComponent {
    /// A component whose hooks always succeed.
    pub fn new(name: impl Into<String>, log: &EventLog) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
            fail_start: false,
            fail_stop: false,
        }
    }

    /// Make the start hook return an [`InjectedFailure`].
    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    /// Make the stop hook return an [`InjectedFailure`].
    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }
}

#[async_trait]
impl Startable for MockComponent {
    async fn start(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        self.log.record(LifecycleEvent::Started(self.name.clone()));
        if self.fail_start {
            return Err(Box::new(InjectedFailure(self.name.clone())));
        }
        Ok(())
    }
}

#[async_trait]
impl Stoppable for MockComponent {
    async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        self.log.record(LifecycleEvent::Stopped(self.name.clone()));
        if self.fail_stop {
            return Err(Box::new(InjectedFailure(self.name.clone())));
        }
        Ok(())
    }
}
