//! # Level Builder
//!
//! Groups eligible components into ordered buckets by their count of
//! eligible transitive dependencies. Components in the same bucket share a
//! count and carry no ordering constraint relative to each other; buckets are
//! ordered by descending count, so the first bucket holds the components
//! with the most dependencies and the last bucket the components with none.
//!
//! Levels are recomputed from the graph on every start and stop call; they
//! hold no state of their own, so recomputation on an unchanged graph always
//! yields the same bucket membership.

use std::collections::BTreeMap;

use crate::analyze;
use crate::error::CycleError;
use crate::graph::{ComponentGraph, ComponentId};

/// Eligible components bucketed by dependency count, most-dependent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    buckets: Vec<Vec<ComponentId>>,
}

impl Levels {
    /// Analyzes the graph and builds the buckets.
    ///
    /// Fails only when the graph contains a fatal cycle; an empty graph (or
    /// one with no eligible components) yields an empty sequence.
    pub fn build(graph: &ComponentGraph) -> Result<Self, CycleError> {
        let counts = analyze::eligible_dependency_counts(graph)?;

        let mut by_count: BTreeMap<usize, Vec<ComponentId>> = BTreeMap::new();
        for (id, count) in counts {
            by_count.entry(count).or_default().push(id);
        }

        Ok(Self {
            buckets: by_count.into_values().rev().collect(),
        })
    }

    /// The buckets, ordered by descending dependency count.
    pub fn buckets(&self) -> &[Vec<ComponentId>] {
        &self.buckets
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when the graph had no eligible components.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl ComponentGraph {
    /// Computes the start/stop levels for this graph.
    ///
    /// Exposed for diagnostics and tests; [`start`](ComponentGraph::start)
    /// and [`stop`](ComponentGraph::stop) call it internally on every
    /// invocation.
    pub fn levels(&self) -> Result<Levels, CycleError> {
        Levels::build(self)
    }
}
