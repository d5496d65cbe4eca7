//! # Component Graph
//!
//! A read-only view over registered components and their named dependency
//! edges. The graph is populated by whatever wires the application together
//! (by hand, or by an injection layer); this crate never resolves or creates
//! components itself — it only orders them.
//!
//! Nodes and edges are stored in registration order, and every traversal in
//! this crate follows that order, so analysis results are deterministic for a
//! given construction sequence.

use crate::component::Lifecycle;

/// Opaque handle to a registered component.
///
/// Handles are only meaningful for the graph that issued them; using a handle
/// with a different graph is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) usize);

pub(crate) struct Edge {
    /// Name of the dependency field, embedded in cycle reports.
    pub(crate) field: String,
    pub(crate) target: ComponentId,
}

pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) edges: Vec<Edge>,
}

/// The set of managed components and their declared dependencies.
///
/// # Example
///
/// ```
/// use lifecycle_framework::{ComponentGraph, Lifecycle};
///
/// let mut graph = ComponentGraph::new();
/// let database = graph.add_component("database", Lifecycle::Neither);
/// let api = graph.add_component("api", Lifecycle::Neither);
/// graph.add_dependency(api, "database", database);
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.name(api), "api");
/// ```
#[derive(Default)]
pub struct ComponentGraph {
    nodes: Vec<Node>,
}

impl ComponentGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under a display name.
    ///
    /// The name is the component's identity in log events and cycle reports;
    /// the framework embeds it verbatim and never derives names itself. The
    /// capability record is fixed here and never re-examined.
    pub fn add_component(&mut self, name: impl Into<String>, lifecycle: Lifecycle) -> ComponentId {
        let id = ComponentId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            lifecycle,
            edges: Vec::new(),
        });
        id
    }

    /// Declares that `component` depends on `target` through the field named
    /// `field`.
    ///
    /// Dependencies are directional: `component` starts after, and stops
    /// before, `target`. The field name only matters for cycle reporting.
    pub fn add_dependency(
        &mut self,
        component: ComponentId,
        field: impl Into<String>,
        target: ComponentId,
    ) {
        self.nodes[component.0].edges.push(Edge {
            field: field.into(),
            target,
        });
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All component handles, in registration order.
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> {
        (0..self.nodes.len()).map(ComponentId)
    }

    /// The display name supplied at registration.
    pub fn name(&self, id: ComponentId) -> &str {
        &self.nodes[id.0].name
    }

    /// The capability record supplied at registration.
    pub fn lifecycle(&self, id: ComponentId) -> &Lifecycle {
        &self.nodes[id.0].lifecycle
    }

    /// The declared dependencies of `id` as (field, target) pairs, in
    /// declaration order.
    pub fn dependencies(&self, id: ComponentId) -> impl Iterator<Item = (&str, ComponentId)> {
        self.nodes[id.0]
            .edges
            .iter()
            .map(|e| (e.field.as_str(), e.target))
    }

    pub(crate) fn edges(&self, id: ComponentId) -> &[Edge] {
        &self.nodes[id.0].edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_preserves_order_and_names() {
        let mut graph = ComponentGraph::new();
        let a = graph.add_component("alpha", Lifecycle::Neither);
        let b = graph.add_component("beta", Lifecycle::Neither);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.name(a), "alpha");
        assert_eq!(graph.name(b), "beta");
        assert_eq!(graph.component_ids().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn dependencies_keep_declaration_order() {
        let mut graph = ComponentGraph::new();
        let a = graph.add_component("a", Lifecycle::Neither);
        let b = graph.add_component("b", Lifecycle::Neither);
        let c = graph.add_component("c", Lifecycle::Neither);
        graph.add_dependency(a, "second", c);
        graph.add_dependency(a, "first", b);

        let deps: Vec<_> = graph.dependencies(a).collect();
        assert_eq!(deps, vec![("second", c), ("first", b)]);
        assert_eq!(graph.dependencies(b).count(), 0);
    }

    #[test]
    fn empty_graph() {
        let graph = ComponentGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.component_ids().count(), 0);
    }
}
