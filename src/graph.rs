// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Edge accumulation and bookkeeping for the network simulation

use crate::types::{Edge, Network};
use petgraph::algo::connected_components;
use petgraph::graph::DiGraph;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

// =============================================================================
// EdgeStore
// =============================================================================

/// Cumulative edge set for one simulation run
///
/// Keyed by the ordered `(source, target)` pair, so at most one record exists
/// per directed pair. Whether repeated formation events accumulate weight is
/// fixed at construction. Callers must filter self-pairs before upserting.
#[derive(Debug, Clone)]
pub struct EdgeStore {
    edges: BTreeMap<(usize, usize), u64>,
    weighted: bool,
}

impl EdgeStore {
    /// Create an empty store
    #[must_use]
    pub fn new(weighted: bool) -> Self {
        Self {
            edges: BTreeMap::new(),
            weighted,
        }
    }

    /// Record a link formation event for the ordered pair
    ///
    /// Creates the edge (weight 1 if weighting is enabled, else 0) and
    /// returns `true`, or increments the existing edge's weight (weighting
    /// enabled only) and returns `false`.
    pub fn upsert(&mut self, source: usize, target: usize) -> bool {
        debug_assert_ne!(source, target, "self-loops must be filtered by the caller");
        match self.edges.entry((source, target)) {
            Entry::Occupied(mut entry) => {
                if self.weighted {
                    *entry.get_mut() += 1;
                }
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(u64::from(self.weighted));
                true
            }
        }
    }

    /// Number of distinct edges stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edges are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Look up the weight of an edge, if present
    #[must_use]
    pub fn weight_of(&self, source: usize, target: usize) -> Option<u64> {
        self.edges.get(&(source, target)).copied()
    }

    /// Materialize the edge list, ordered by `(source, target)`
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
            .into_iter()
            .map(|((source, target), weight)| Edge {
                source,
                target,
                weight,
            })
            .collect()
    }
}

// =============================================================================
// DegreeTracker
// =============================================================================

/// Per-node degree counters for preferential attachment
///
/// Counts edge events incident to each node (as source or target). Degree
/// bookkeeping is independent of edge-weight bookkeeping - a repeated
/// formation still bumps both endpoints.
#[derive(Debug, Clone)]
pub struct DegreeTracker {
    degrees: Vec<usize>,
}

impl DegreeTracker {
    /// Create a tracker with all degrees at zero
    #[must_use]
    pub fn new(num_agents: usize) -> Self {
        Self {
            degrees: vec![0; num_agents],
        }
    }

    /// Record an edge between two nodes, bumping both endpoints
    pub fn record(&mut self, source: usize, target: usize) {
        self.degrees[source] += 1;
        self.degrees[target] += 1;
    }

    /// Degree of a single node
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.degrees[node]
    }

    /// Sum of degrees over nodes `[0, limit)`
    #[must_use]
    pub fn total_up_to(&self, limit: usize) -> usize {
        self.degrees[..limit].iter().sum()
    }
}

// =============================================================================
// GroupAssigner
// =============================================================================

/// Deterministic round-robin group assignment for homophily linking
///
/// Node `i` belongs to group `i % num_groups`, assigned once at construction
/// and immutable thereafter.
#[derive(Debug, Clone)]
pub struct GroupAssigner {
    groups: Vec<usize>,
}

impl GroupAssigner {
    /// Assign every node in `[0, num_agents)` to one of `num_groups` groups
    ///
    /// # Panics
    ///
    /// Panics if `num_groups` is 0; config validation raises it to 1 first.
    #[must_use]
    pub fn new(num_agents: usize, num_groups: usize) -> Self {
        assert!(num_groups >= 1, "num_groups must be at least 1");
        Self {
            groups: (0..num_agents).map(|i| i % num_groups).collect(),
        }
    }

    /// Group id of a node
    #[must_use]
    pub fn group_of(&self, node: usize) -> usize {
        self.groups[node]
    }

    /// Materialize the node -> group mapping for serialization
    #[must_use]
    pub fn into_map(self) -> BTreeMap<usize, usize> {
        self.groups.into_iter().enumerate().collect()
    }
}

// =============================================================================
// NetworkStats
// =============================================================================

/// Summary statistics over a finished network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkStats {
    /// Node count
    pub nodes: usize,
    /// Edge count
    pub edges: usize,
    /// Edge count over the maximum possible `n * (n - 1)`
    pub density: f64,
    /// Weakly connected component count
    pub components: usize,
}

impl NetworkStats {
    /// Compute statistics via a petgraph backing graph
    #[must_use]
    pub fn compute(network: &Network) -> Self {
        let mut graph: DiGraph<usize, u64> = DiGraph::new();
        let indices: Vec<_> = (0..network.num_agents).map(|i| graph.add_node(i)).collect();
        for edge in &network.edges {
            graph.add_edge(indices[edge.source], indices[edge.target], edge.weight);
        }

        let nodes = network.num_agents;
        let edges = network.edges.len();
        let possible = nodes.saturating_mul(nodes.saturating_sub(1));
        #[allow(clippy::cast_precision_loss)]
        let density = if possible == 0 {
            0.0
        } else {
            edges as f64 / possible as f64
        };

        Self {
            nodes,
            edges,
            density,
            components: connected_components(&graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_creates_then_accumulates_when_weighted() {
        let mut store = EdgeStore::new(true);

        assert!(store.upsert(0, 1));
        assert_eq!(store.weight_of(0, 1), Some(1));

        assert!(!store.upsert(0, 1));
        assert_eq!(store.weight_of(0, 1), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_upsert_unweighted_stays_at_sentinel() {
        let mut store = EdgeStore::new(false);

        assert!(store.upsert(0, 1));
        assert!(!store.upsert(0, 1));
        assert!(!store.upsert(0, 1));

        assert_eq!(store.weight_of(0, 1), Some(0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_opposite_directions_are_distinct_edges() {
        let mut store = EdgeStore::new(false);

        assert!(store.upsert(0, 1));
        assert!(store.upsert(1, 0));

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_into_edges_is_ordered() {
        let mut store = EdgeStore::new(false);
        store.upsert(2, 0);
        store.upsert(0, 2);
        store.upsert(1, 2);

        let edges: Vec<_> = store
            .into_edges()
            .into_iter()
            .map(|e| (e.source, e.target))
            .collect();

        assert_eq!(edges, vec![(0, 2), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_degree_tracker_counts_both_endpoints() {
        let mut degrees = DegreeTracker::new(4);
        degrees.record(2, 0);
        degrees.record(2, 1);

        assert_eq!(degrees.degree(0), 1);
        assert_eq!(degrees.degree(1), 1);
        assert_eq!(degrees.degree(2), 2);
        assert_eq!(degrees.degree(3), 0);
        assert_eq!(degrees.total_up_to(2), 2);
        assert_eq!(degrees.total_up_to(4), 4);
    }

    #[test]
    fn test_group_assigner_round_robin() {
        let groups = GroupAssigner::new(5, 2);

        assert_eq!(groups.group_of(0), 0);
        assert_eq!(groups.group_of(1), 1);
        assert_eq!(groups.group_of(2), 0);
        assert_eq!(groups.group_of(3), 1);
        assert_eq!(groups.group_of(4), 0);
    }

    #[test]
    fn test_group_assigner_single_group() {
        let groups = GroupAssigner::new(3, 1);

        for node in 0..3 {
            assert_eq!(groups.group_of(node), 0);
        }
    }

    #[test]
    fn test_stats_on_empty_network() {
        let network = Network {
            num_agents: 5,
            edges: vec![],
            groups: None,
        };

        let stats = NetworkStats::compute(&network);

        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.edges, 0);
        assert!(stats.density.abs() < f64::EPSILON);
        assert_eq!(stats.components, 5);
    }

    #[test]
    fn test_stats_components_and_density() {
        let mut store = EdgeStore::new(false);
        store.upsert(0, 1);
        store.upsert(1, 2);
        let network = Network {
            num_agents: 4,
            edges: store.into_edges(),
            groups: None,
        };

        let stats = NetworkStats::compute(&network);

        // 0-1-2 weakly connected, 3 isolated
        assert_eq!(stats.components, 2);
        assert!((stats.density - 2.0 / 12.0).abs() < 1e-12);
    }
}
