// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Simulation configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Simulation parameters, loaded from a JSON file
///
/// Every field is optional in the file; missing fields take the documented
/// defaults. Call [`SimConfig::validated`] before handing the config to the
/// builder - it clamps out-of-range probabilities and raises degenerate
/// counts to their minimums.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of agents (nodes) in the network
    pub num_agents: usize,
    /// Linking strategy name: "random", "preferential_attachment", "homophily"
    pub linking_strategy: String,
    /// Number of simulation rounds (random and homophily strategies)
    pub time_steps: usize,
    /// Per-agent link probability for the random strategy
    pub p: f64,
    /// Edges each new node forms under preferential attachment
    pub edges_per_step: usize,
    /// Number of groups for the homophily strategy
    pub homophily_groups: usize,
    /// Same-group link probability for the homophily strategy
    pub p_in: f64,
    /// Cross-group link probability for the homophily strategy
    pub p_out: f64,
    /// Accumulate edge weights on repeated link formation
    pub edge_weights: bool,
    /// RNG seed; absent means entropy seeding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_agents: 100,
            linking_strategy: "random".to_string(),
            time_steps: 10,
            p: 0.05,
            edges_per_step: 1,
            homophily_groups: 2,
            p_in: 0.1,
            p_out: 0.01,
            edge_weights: false,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Normalize parameter ranges defensively
    ///
    /// Probabilities outside `[0, 1]` are clamped (a probability draw is
    /// undefined outside that range); `homophily_groups` and
    /// `edges_per_step` below 1 are raised to 1. Each adjustment logs a
    /// warning.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.p = clamp_probability("p", self.p);
        self.p_in = clamp_probability("p_in", self.p_in);
        self.p_out = clamp_probability("p_out", self.p_out);

        if self.homophily_groups < 1 {
            warn!("homophily_groups must be at least 1, raising to 1");
            self.homophily_groups = 1;
        }
        if self.edges_per_step < 1 {
            warn!("edges_per_step must be at least 1, raising to 1");
            self.edges_per_step = 1;
        }

        self
    }
}

/// Clamp a probability to `[0, 1]`, warning on adjustment
fn clamp_probability(name: &str, value: f64) -> f64 {
    if value.is_nan() {
        warn!("{} is NaN, treating as 0.0", name);
        return 0.0;
    }
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        let clamped = value.clamp(0.0, 1.0);
        warn!("{} = {} is outside [0, 1], clamping to {}", name, value, clamped);
        clamped
    }
}

/// Configuration loading errors - fatal, raised before any generation begins
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {path}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`SimConfig`]
    #[error("failed to parse config file {path}")]
    Parse {
        /// Path that failed to parse
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Load a configuration from a JSON file
pub fn load(path: &Path) -> Result<SimConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = SimConfig::default();

        assert_eq!(config.num_agents, 100);
        assert_eq!(config.linking_strategy, "random");
        assert_eq!(config.time_steps, 10);
        assert!((config.p - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.edges_per_step, 1);
        assert_eq!(config.homophily_groups, 2);
        assert!((config.p_in - 0.1).abs() < f64::EPSILON);
        assert!((config.p_out - 0.01).abs() < f64::EPSILON);
        assert!(!config.edge_weights);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config: SimConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.num_agents, 100);
        assert_eq!(config.time_steps, 10);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{"num_agents": 5, "linking_strategy": "homophily"}"#)
                .unwrap();

        assert_eq!(config.num_agents, 5);
        assert_eq!(config.linking_strategy, "homophily");
        assert_eq!(config.homophily_groups, 2);
    }

    #[test]
    fn test_validated_clamps_probabilities() {
        let config = SimConfig {
            p: 1.5,
            p_in: -0.3,
            p_out: f64::NAN,
            ..SimConfig::default()
        }
        .validated();

        assert!((config.p - 1.0).abs() < f64::EPSILON);
        assert!(config.p_in.abs() < f64::EPSILON);
        assert!(config.p_out.abs() < f64::EPSILON);
    }

    #[test]
    fn test_validated_raises_degenerate_counts() {
        let config = SimConfig {
            homophily_groups: 0,
            edges_per_step: 0,
            ..SimConfig::default()
        }
        .validated();

        assert_eq!(config.homophily_groups, 1);
        assert_eq!(config.edges_per_step, 1);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
