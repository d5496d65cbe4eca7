//! Fatal-cycle scenarios: both start and stop must refuse the graph before
//! invoking any component, and the rendered message follows the cycle-path
//! contract exactly.

use std::collections::HashMap;

use lifecycle_framework::mock::{EventLog, MockComponent};
use lifecycle_framework::{ComponentGraph, ComponentId, Lifecycle};
use tokio_util::sync::CancellationToken;

struct Rig {
    graph: ComponentGraph,
    log: EventLog,
}

fn rig(nodes: &[(&str, &[&str])], eligible: &[&str]) -> Rig {
    let log = EventLog::new();
    let mut graph = ComponentGraph::new();
    let mut ids: HashMap<&str, ComponentId> = HashMap::new();

    for (name, _) in nodes {
        let lifecycle = if eligible.contains(name) {
            Lifecycle::starter_stopper(MockComponent::new(*name, &log))
        } else {
            Lifecycle::Neither
        };
        ids.insert(*name, graph.add_component(*name, lifecycle));
    }
    for (name, deps) in nodes {
        for dep in deps.iter() {
            graph.add_dependency(ids[name], *dep, ids[dep]);
        }
    }
    Rig { graph, log }
}

/// Both entry points must fail with the same message, and no component hook
/// may have run.
async fn assert_rejected(rig: &Rig, message: &str) {
    let shutdown = CancellationToken::new();

    let start_err = rig.graph.start(&shutdown).await.unwrap_err();
    assert_eq!(start_err.to_string(), message);

    let stop_err = rig.graph.stop(&shutdown).await.unwrap_err();
    assert_eq!(stop_err.to_string(), message);

    assert!(rig.log.is_empty(), "no hook may run on a cyclic graph");
}

// (A) <-> (B)
#[tokio::test]
async fn codependent_pair() {
    let rig = rig(&[("A", &["B"]), ("B", &["A"])], &["A", "B"]);
    assert_rejected(
        &rig,
        "circular reference detected from\n\
         field B in A\n\
         field A in B\n\
         field B in A",
    )
    .await;
}

// (A) -> (B) -> C -> (A): the hop does not save a cycle that ties two
// eligible components together.
#[tokio::test]
async fn triangle_with_two_eligible() {
    let rig = rig(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])], &["A", "B"]);
    assert_rejected(
        &rig,
        "circular reference detected from\n\
         field B in A\n\
         field C in B\n\
         field A in C\n\
         field B in A",
    )
    .await;
}

// (A) -> (B) -> C -> D -> (A)
#[tokio::test]
async fn square_with_two_eligible() {
    let rig = rig(
        &[("A", &["B"]), ("B", &["C"]), ("C", &["D"]), ("D", &["A"])],
        &["A", "B"],
    );
    assert_rejected(
        &rig,
        "circular reference detected from\n\
         field B in A\n\
         field C in B\n\
         field D in C\n\
         field A in D\n\
         field B in A",
    )
    .await;
}

// (A) depending on itself is fatal no matter how many eligible components
// the graph has.
#[tokio::test]
async fn self_dependency() {
    let rig = rig(&[("A", &["A"])], &["A"]);
    assert_rejected(
        &rig,
        "circular reference detected from field A in A to itself",
    )
    .await;
}

// The error carries the structured path, not just the rendered text.
#[tokio::test]
async fn cycle_error_exposes_path() {
    let rig = rig(&[("A", &["B"]), ("B", &["A"])], &["A", "B"]);
    let err = rig.graph.stop(&CancellationToken::new()).await.unwrap_err();

    let steps: Vec<(&str, &str)> = err
        .path()
        .iter()
        .map(|s| (s.field.as_str(), s.component.as_str()))
        .collect();
    assert_eq!(steps, vec![("B", "A"), ("A", "B")]);
    assert!(!err.is_self_loop());
}
