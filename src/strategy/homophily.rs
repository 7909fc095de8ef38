// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Homophily (group-biased) linking

use crate::graph::{EdgeStore, GroupAssigner};
use crate::types::Network;
use rand::{Rng, RngCore};
use tracing::info;

/// Group-biased linking over discrete time steps
///
/// Agents are split round-robin into `homophily_groups` groups before the
/// first step. Each step, every agent draws a uniform candidate target and
/// links with probability `p_in` (same group) or `p_out` (different group).
#[derive(Debug, Clone)]
pub struct HomophilyStrategy {
    /// Number of agents
    pub num_agents: usize,
    /// Number of simulation rounds
    pub time_steps: usize,
    /// Number of groups (at least 1)
    pub homophily_groups: usize,
    /// Same-group link probability
    pub p_in: f64,
    /// Cross-group link probability
    pub p_out: f64,
    /// Accumulate weights on repeated formation
    pub edge_weights: bool,
}

impl HomophilyStrategy {
    /// Run the simulation and return the finished network
    ///
    /// The returned network carries the group mapping for serialization.
    pub fn run(&self, rng: &mut dyn RngCore) -> Network {
        let groups = GroupAssigner::new(self.num_agents, self.homophily_groups);
        let mut store = EdgeStore::new(self.edge_weights);

        for step in 1..=self.time_steps {
            let mut created = 0;
            for i in 0..self.num_agents {
                let j = rng.gen_range(0..self.num_agents);
                if j == i {
                    continue;
                }
                let prob = if groups.group_of(i) == groups.group_of(j) {
                    self.p_in
                } else {
                    self.p_out
                };
                if rng.gen::<f64>() < prob && store.upsert(i, j) {
                    created += 1;
                }
            }
            info!("Step {}: added {} homophily-based edges", step, created);
        }

        Network {
            num_agents: self.num_agents,
            edges: store.into_edges(),
            groups: Some(groups.into_map()),
        }
    }
}
