// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Preferential attachment (Barabási–Albert style) linking

use crate::graph::{DegreeTracker, EdgeStore};
use crate::types::Network;
use rand::{Rng, RngCore};
use std::collections::BTreeSet;
use tracing::info;

/// Degree-weighted attachment of new nodes
///
/// The first `edges_per_step + 1` nodes form a simplified seed with no edges
/// and zero recorded degree. Every later node joins by linking to
/// `edges_per_step` distinct existing nodes, sampled proportionally to their
/// current degree.
#[derive(Debug, Clone)]
pub struct PreferentialAttachmentStrategy {
    /// Number of agents
    pub num_agents: usize,
    /// Edges each new node forms (m)
    pub edges_per_step: usize,
    /// Accumulate weights on repeated formation
    pub edge_weights: bool,
}

impl PreferentialAttachmentStrategy {
    /// Run the simulation and return the finished network
    ///
    /// If `num_agents <= edges_per_step + 1` there are no nodes beyond the
    /// seed and the edge set is empty.
    pub fn run(&self, rng: &mut dyn RngCore) -> Network {
        let mut store = EdgeStore::new(self.edge_weights);
        let mut degrees = DegreeTracker::new(self.num_agents);
        let seed_nodes = self.edges_per_step + 1;

        for new_node in seed_nodes..self.num_agents {
            let targets = self.choose_targets(new_node, &degrees, rng);
            for &target in &targets {
                store.upsert(new_node, target);
                // Degree bookkeeping is independent of edge weighting.
                degrees.record(new_node, target);
            }
            info!("Added node {} with {} edge(s)", new_node, targets.len());
        }

        Network {
            num_agents: self.num_agents,
            edges: store.into_edges(),
            groups: None,
        }
    }

    /// Sample `edges_per_step` distinct targets among nodes `[0, new_node)`
    ///
    /// Draws `r` uniformly from `[0, total_degree)` and walks the cumulative
    /// degree sum, selecting the first node where the sum reaches `r`. Before
    /// any degree has accumulated the denominator falls back to `new_node`
    /// and every existing node counts as weight 1, making the draw uniform
    /// over existing nodes. Duplicate draws do not count; the loop redraws
    /// until the set holds `edges_per_step` nodes.
    fn choose_targets(
        &self,
        new_node: usize,
        degrees: &DegreeTracker,
        rng: &mut dyn RngCore,
    ) -> BTreeSet<usize> {
        let total = degrees.total_up_to(new_node);
        let (total, unseeded) = if total == 0 {
            (new_node, true)
        } else {
            (total, false)
        };

        let mut targets = BTreeSet::new();
        while targets.len() < self.edges_per_step {
            let r = rng.gen_range(0..total);
            let mut cum = 0;
            for node in 0..new_node {
                cum += if unseeded { 1 } else { degrees.degree(node) };
                if cum >= r {
                    targets.insert(node);
                    break;
                }
            }
        }
        targets
    }
}
