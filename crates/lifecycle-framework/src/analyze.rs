//! # Cycle & Reachability Analysis
//!
//! For every eligible component this module answers two questions:
//!
//! 1. Does any dependency path lead from the component back to itself, and if
//!    so, is that cycle fatal? A cycle is fatal when it is a direct
//!    self-reference, or when it passes through **more than one** eligible
//!    component — two ordering-relevant components that each transitively
//!    depend on the other admit no start order. A cycle whose only eligible
//!    member is the component itself is benign: the pass-through nodes impose
//!    no sequencing constraint.
//! 2. Which components are transitively reachable from it? The count of
//!    *eligible* reachable components becomes the node's level key.
//!
//! The two questions are answered by two separately-scoped traversals. Cycle
//! enumeration is a depth-first walk that marks a node visited when it is
//! entered as an intermediate hop (never the origin itself); the visited set
//! is reset for each analyzed component. A consequence of that marking is
//! that a cycle reachable only through an already-visited hop is not
//! re-discovered — an accepted approximation, pinned by a test below.
//! Reachability is a second, plain depth-first walk; it shares no state with
//! cycle enumeration, so converging paths cannot hide reachable nodes.

use std::collections::HashSet;

use crate::error::{CycleError, CycleStep};
use crate::graph::{ComponentGraph, ComponentId};

/// One step of a candidate cycle: the edge followed and the node it leaves.
#[derive(Clone)]
struct PathStep {
    field: String,
    source: ComponentId,
}

/// Per-component analysis result: the number of eligible components
/// transitively reachable from it.
///
/// Entries appear in registration order and cover eligible components only.
/// Returns the first fatal cycle encountered; no component is analyzed past
/// that point.
pub(crate) fn eligible_dependency_counts(
    graph: &ComponentGraph,
) -> Result<Vec<(ComponentId, usize)>, CycleError> {
    let mut counts = Vec::new();
    for origin in graph.component_ids() {
        if !graph.lifecycle(origin).is_eligible() {
            continue;
        }

        let mut seen = HashSet::new();
        for path in all_paths(graph, origin, origin, &mut seen) {
            // Direct self-reference: always fatal.
            if path.len() == 1 {
                return Err(to_cycle_error(graph, &path));
            }
            // A cycle only matters if it ties together two or more
            // ordering-relevant components.
            let eligible = path
                .iter()
                .filter(|step| graph.lifecycle(step.source).is_eligible())
                .count();
            if eligible > 1 {
                return Err(to_cycle_error(graph, &path));
            }
        }

        let eligible_deps = reachable_from(graph, origin)
            .into_iter()
            .filter(|&id| graph.lifecycle(id).is_eligible())
            .count();
        counts.push((origin, eligible_deps));
    }
    Ok(counts)
}

/// Enumerates every path from `from` to `to`, following edges depth-first in
/// declaration order.
///
/// `seen` carries the intermediate-hop marks for one origin's enumeration;
/// the caller supplies a fresh set per origin. The target itself is never
/// marked, so paths may end at it, but no path re-enters a marked hop.
fn all_paths(
    graph: &ComponentGraph,
    from: ComponentId,
    to: ComponentId,
    seen: &mut HashSet<ComponentId>,
) -> Vec<Vec<PathStep>> {
    if from != to && !seen.insert(from) {
        return Vec::new();
    }

    let mut paths = Vec::new();
    for edge in graph.edges(from) {
        let first = PathStep {
            field: edge.field.clone(),
            source: from,
        };
        if edge.target == to {
            paths.push(vec![first]);
        } else {
            for rest in all_paths(graph, edge.target, to, seen) {
                let mut path = Vec::with_capacity(rest.len() + 1);
                path.push(first.clone());
                path.extend(rest);
                paths.push(path);
            }
        }
    }
    paths
}

/// Every component reachable from `origin` by at least one edge path.
///
/// The origin is not a member of its own reachability set, and the walk does
/// not pass through it: anything beyond the origin is already covered by the
/// origin's own edges, where the walk begins.
fn reachable_from(graph: &ComponentGraph, origin: ComponentId) -> HashSet<ComponentId> {
    let mut reached = HashSet::new();
    let mut stack: Vec<ComponentId> = graph
        .edges(origin)
        .iter()
        .map(|edge| edge.target)
        .collect();

    while let Some(id) = stack.pop() {
        if id == origin || !reached.insert(id) {
            continue;
        }
        stack.extend(graph.edges(id).iter().map(|edge| edge.target));
    }
    reached
}

fn to_cycle_error(graph: &ComponentGraph, path: &[PathStep]) -> CycleError {
    CycleError::new(
        path.iter()
            .map(|step| CycleStep {
                field: step.field.clone(),
                component: graph.name(step.source).to_string(),
            })
            .collect(),
    )
}
