// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Agentnet library - synthetic agent network generation
//!
//! This crate simulates agents forming directed links over discrete time
//! steps under one of three linking strategies (random, preferential
//! attachment, homophily) and serializes the resulting network for
//! visualization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod commands;
pub mod config;
pub mod graph;
pub mod strategy;

/// Core data types for the generated network
pub mod types {
    use anyhow::{Context, Result};
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;
    use std::fmt::Write as _;
    use std::fs;
    use std::path::Path;

    // =========================================================================
    // Edge
    // =========================================================================

    /// A directed link between two distinct agents
    ///
    /// At most one edge exists per ordered `(source, target)` pair; repeated
    /// formation events accumulate into `weight` when edge weighting is
    /// enabled, otherwise the weight stays at the sentinel 0.
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    )]
    pub struct Edge {
        /// Source agent index
        pub source: usize,
        /// Target agent index
        pub target: usize,
        /// Accumulated weight (0 when weighting is disabled)
        pub weight: u64,
    }

    // =========================================================================
    // Network
    // =========================================================================

    /// The generated network: agent count, edge list, and optional groups
    ///
    /// Agents are implicit - every index in `[0, num_agents)` is a node,
    /// whether or not any edge touches it. The network is built once per
    /// simulation run and never mutated afterwards.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Network {
        /// Total number of agents (nodes)
        pub num_agents: usize,
        /// All edges, ordered by `(source, target)`
        #[serde(default)]
        pub edges: Vec<Edge>,
        /// Group membership (agent index -> group id), present only for
        /// homophily-generated networks
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub groups: Option<BTreeMap<usize, usize>>,
    }

    impl Network {
        /// Get the node count
        #[must_use]
        pub fn node_count(&self) -> usize {
            self.num_agents
        }

        /// Get the edge count
        #[must_use]
        pub fn edge_count(&self) -> usize {
            self.edges.len()
        }

        /// Check if the network has no edges
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.edges.is_empty()
        }

        /// Load a network from a JSON file
        pub fn load(path: &Path) -> Result<Self> {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }

        /// Save the network to a JSON file
        pub fn save(&self, path: &Path) -> Result<()> {
            let json = self.to_json()?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(())
        }

        /// Export to JSON
        pub fn to_json(&self) -> Result<String> {
            serde_json::to_string_pretty(self).context("Failed to serialize network to JSON")
        }

        /// Export to DOT format for Graphviz
        ///
        /// Every agent is declared so isolated nodes are drawn too. An edge
        /// weight above 0 becomes the edge label; groups become dashed
        /// subgraph clusters.
        #[must_use]
        pub fn to_dot(&self) -> String {
            let mut dot = String::from("digraph network {\n");
            dot.push_str("  rankdir=LR;\n\n");

            for i in 0..self.num_agents {
                let _ = writeln!(dot, "  {i};");
            }

            dot.push('\n');

            for edge in &self.edges {
                if edge.weight > 0 {
                    let _ = writeln!(
                        dot,
                        "  {} -> {} [label=\"{}\"];",
                        edge.source, edge.target, edge.weight
                    );
                } else {
                    let _ = writeln!(dot, "  {} -> {};", edge.source, edge.target);
                }
            }

            if let Some(ref groups) = self.groups {
                let mut by_group: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
                for (&node, &group) in groups {
                    by_group.entry(group).or_default().push(node);
                }
                for (group, members) in &by_group {
                    let _ = writeln!(dot, "\n  subgraph cluster_{group} {{");
                    let _ = writeln!(dot, "    label=\"group {group}\";");
                    dot.push_str("    style=dashed;\n");
                    for member in members {
                        let _ = writeln!(dot, "    {member};");
                    }
                    dot.push_str("  }\n");
                }
            }

            dot.push_str("}\n");
            dot
        }
    }

}

/// Prelude for common imports
pub mod prelude {
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
