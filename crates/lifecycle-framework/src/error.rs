//! # Framework Errors
//!
//! This module defines the common error types used throughout the lifecycle
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across graph analysis and orchestration.

use std::fmt;

/// Opaque error type returned by component start/stop hooks.
///
/// Components report failures in whatever error type they like; the framework
/// carries the value through without inspecting it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One step of a cycle path: the named edge and the component it leaves from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStep {
    /// Name of the dependency field that was followed.
    pub field: String,
    /// Display name of the component the edge originates at.
    pub component: String,
}

/// A fatal dependency cycle, carrying the full offending path.
///
/// Returned by both [`start`](crate::ComponentGraph::start) and
/// [`stop`](crate::ComponentGraph::stop) before any component is touched.
///
/// # Message Format
///
/// The rendered message is a compatibility contract. A multi-step cycle lists
/// one line per step and repeats the first step to close the loop:
///
/// ```text
/// circular reference detected from
/// field database in api
/// field api in database
/// field database in api
/// ```
///
/// A direct self-reference is special-cased onto a single line:
///
/// ```text
/// circular reference detected from field registry in registry to itself
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    steps: Vec<CycleStep>,
}

impl CycleError {
    pub(crate) fn new(steps: Vec<CycleStep>) -> Self {
        Self { steps }
    }

    /// The offending path, in traversal order.
    pub fn path(&self) -> &[CycleStep] {
        &self.steps
    }

    /// True if the cycle is a direct edge from a component to itself.
    pub fn is_self_loop(&self) -> bool {
        self.steps.len() == 1
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.steps.as_slice() {
            return write!(
                f,
                "circular reference detected from field {} in {} to itself",
                only.field, only.component
            );
        }
        write!(f, "circular reference detected from")?;
        for step in &self.steps {
            write!(f, "\nfield {} in {}", step.field, step.component)?;
        }
        // Repeat the first step to close the loop visually.
        if let Some(first) = self.steps.first() {
            write!(f, "\nfield {} in {}", first.field, first.component)?;
        }
        Ok(())
    }
}

impl std::error::Error for CycleError {}

/// Errors returned by [`ComponentGraph::start`](crate::ComponentGraph::start).
///
/// Stop has no counterpart for [`StartError::Component`]: stop failures are
/// logged and absorbed, so `stop` returns a bare [`CycleError`]. The asymmetry
/// is deliberate.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    /// The graph contains a fatal dependency cycle; nothing was started.
    #[error(transparent)]
    Cycle(#[from] CycleError),
    /// A component's start hook failed. Components started earlier in the
    /// same call are left running.
    #[error("error starting {component}: {source}")]
    Component {
        /// Display name of the component that failed.
        component: String,
        /// The component's own error, untouched.
        source: BoxError,
    },
}
