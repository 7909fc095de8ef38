// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Random (Erdős–Rényi style) linking

use crate::graph::EdgeStore;
use crate::types::Network;
use rand::{Rng, RngCore};
use tracing::info;

/// Uniform random linking over discrete time steps
///
/// Each step offers every agent one chance to link: with probability `p` the
/// agent draws a uniform target; a self-draw is dropped without resampling.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    /// Number of agents
    pub num_agents: usize,
    /// Number of simulation rounds
    pub time_steps: usize,
    /// Per-agent link probability
    pub p: f64,
    /// Accumulate weights on repeated formation
    pub edge_weights: bool,
}

impl RandomStrategy {
    /// Run the simulation and return the finished network
    pub fn run(&self, rng: &mut dyn RngCore) -> Network {
        let mut store = EdgeStore::new(self.edge_weights);

        for step in 1..=self.time_steps {
            let mut created = 0;
            for i in 0..self.num_agents {
                if rng.gen::<f64>() < self.p {
                    let j = rng.gen_range(0..self.num_agents);
                    if j == i {
                        continue;
                    }
                    if store.upsert(i, j) {
                        created += 1;
                    }
                }
            }
            info!("Step {}: added {} random edges", step, created);
        }

        Network {
            num_agents: self.num_agents,
            edges: store.into_edges(),
            groups: None,
        }
    }
}
