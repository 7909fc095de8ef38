// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph builder - strategy selection and the simulation entry point

use crate::config::SimConfig;
use crate::strategy::{
    HomophilyStrategy, LinkingStrategy, PreferentialAttachmentStrategy, RandomStrategy,
    StrategyKind,
};
use crate::types::Network;
use rand::RngCore;
use tracing::{info, warn};

/// Builds a network from a validated configuration
///
/// The only externally callable entry point of the simulation core: selects
/// one linking strategy by name, runs it to completion, and returns the
/// finished [`Network`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    config: SimConfig,
}

impl GraphBuilder {
    /// Create a builder for the given configuration
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Run the configured simulation to completion
    pub fn build(&self, rng: &mut dyn RngCore) -> Network {
        let strategy = self.select_strategy();
        info!(
            "Running {} simulation: {} agents, {} time steps, edge weights: {}",
            strategy.kind().name(),
            self.config.num_agents,
            self.config.time_steps,
            self.config.edge_weights
        );

        let network = strategy.run(rng);

        info!(
            "Simulation complete. Network has {} nodes and {} edges.",
            network.node_count(),
            network.edge_count()
        );
        network
    }

    /// Resolve the strategy named in the configuration
    ///
    /// An unrecognized name is a defined fallback, not an error: it logs a
    /// warning and behaves as the random strategy.
    fn select_strategy(&self) -> LinkingStrategy {
        let kind = StrategyKind::from_name(&self.config.linking_strategy).unwrap_or_else(|| {
            warn!(
                "Unknown linking strategy '{}'. Using random strategy as default.",
                self.config.linking_strategy
            );
            StrategyKind::Random
        });

        match kind {
            StrategyKind::Random => LinkingStrategy::Random(RandomStrategy {
                num_agents: self.config.num_agents,
                time_steps: self.config.time_steps,
                p: self.config.p,
                edge_weights: self.config.edge_weights,
            }),
            StrategyKind::PreferentialAttachment => {
                LinkingStrategy::PreferentialAttachment(PreferentialAttachmentStrategy {
                    num_agents: self.config.num_agents,
                    edges_per_step: self.config.edges_per_step,
                    edge_weights: self.config.edge_weights,
                })
            }
            StrategyKind::Homophily => LinkingStrategy::Homophily(HomophilyStrategy {
                num_agents: self.config.num_agents,
                time_steps: self.config.time_steps,
                homophily_groups: self.config.homophily_groups,
                p_in: self.config.p_in,
                p_out: self.config.p_out,
                edge_weights: self.config.edge_weights,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unknown_strategy_falls_back_to_random() {
        let config = SimConfig {
            linking_strategy: "small_world".to_string(),
            ..SimConfig::default()
        };

        let builder = GraphBuilder::new(config);

        assert_eq!(builder.select_strategy().kind(), StrategyKind::Random);
    }

    #[test]
    fn test_strategy_selection_by_name() {
        for (name, kind) in [
            ("random", StrategyKind::Random),
            ("preferential_attachment", StrategyKind::PreferentialAttachment),
            ("homophily", StrategyKind::Homophily),
        ] {
            let config = SimConfig {
                linking_strategy: name.to_string(),
                ..SimConfig::default()
            };
            assert_eq!(GraphBuilder::new(config).select_strategy().kind(), kind);
        }
    }

    #[test]
    fn test_build_returns_completed_network() {
        let config = SimConfig {
            num_agents: 10,
            time_steps: 5,
            p: 0.5,
            seed: Some(42),
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let network = GraphBuilder::new(config).build(&mut rng);

        assert_eq!(network.num_agents, 10);
        assert!(network.edges.iter().all(|e| e.source != e.target));
        assert!(network.edge_count() <= 10 * 9);
    }

    #[test]
    fn test_homophily_build_carries_groups() {
        let config = SimConfig {
            num_agents: 6,
            linking_strategy: "homophily".to_string(),
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let network = GraphBuilder::new(config).build(&mut rng);

        assert_eq!(network.groups.map(|g| g.len()), Some(6));
    }

    #[test]
    fn test_same_seed_same_network() {
        let config = SimConfig {
            num_agents: 15,
            time_steps: 4,
            p: 0.3,
            ..SimConfig::default()
        };
        let builder = GraphBuilder::new(config);

        let a = builder.build(&mut StdRng::seed_from_u64(99));
        let b = builder.build(&mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }
}
