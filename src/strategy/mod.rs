// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Linking strategies - the generation rules that grow the network

pub mod homophily;
pub mod preferential;
pub mod random;

use crate::types::Network;
use rand::RngCore;

pub use homophily::HomophilyStrategy;
pub use preferential::PreferentialAttachmentStrategy;
pub use random::RandomStrategy;

/// Names of the supported linking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Erdős–Rényi style uniform random linking
    Random,
    /// Barabási–Albert style degree-weighted attachment
    PreferentialAttachment,
    /// Group-biased linking (same-group links favoured)
    Homophily,
}

impl StrategyKind {
    /// Parse a strategy name from configuration
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "preferential_attachment" | "preferential" => Some(Self::PreferentialAttachment),
            "homophily" => Some(Self::Homophily),
            _ => None,
        }
    }

    /// Canonical name for this strategy
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::PreferentialAttachment => "preferential_attachment",
            Self::Homophily => "homophily",
        }
    }
}

/// A configured linking strategy, ready to run
///
/// The closed set of generation rules; the builder selects exactly one per
/// run. Each rule exclusively owns its edge store and bookkeeping for the
/// duration of the run and produces the finished [`Network`].
#[derive(Debug, Clone)]
pub enum LinkingStrategy {
    /// Uniform random linking
    Random(RandomStrategy),
    /// Degree-weighted attachment of new nodes
    PreferentialAttachment(PreferentialAttachmentStrategy),
    /// Group-biased linking
    Homophily(HomophilyStrategy),
}

impl LinkingStrategy {
    /// Run the strategy to completion
    pub fn run(&self, rng: &mut dyn RngCore) -> Network {
        match self {
            Self::Random(s) => s.run(rng),
            Self::PreferentialAttachment(s) => s.run(rng),
            Self::Homophily(s) => s.run(rng),
        }
    }

    /// Which rule this strategy applies
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::Random,
            Self::PreferentialAttachment(_) => StrategyKind::PreferentialAttachment,
            Self::Homophily(_) => StrategyKind::Homophily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_round_trip() {
        for kind in [
            StrategyKind::Random,
            StrategyKind::PreferentialAttachment,
            StrategyKind::Homophily,
        ] {
            assert_eq!(StrategyKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_preferential_alias() {
        assert_eq!(
            StrategyKind::from_name("preferential"),
            Some(StrategyKind::PreferentialAttachment)
        );
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(StrategyKind::from_name(""), None);
        assert_eq!(StrategyKind::from_name("small_world"), None);
    }
}
