// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Render command - draws a generated network via Graphviz

use crate::types::Network;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

/// Run the render command
///
/// Writes the DOT form next to the output image and invokes the Graphviz
/// `dot` tool to produce a PNG. Requires `dot` on the PATH.
pub fn run(input: PathBuf, output: PathBuf, keep_dot: bool) -> Result<()> {
    let network = Network::load(&input)
        .with_context(|| format!("Failed to load network from {}", input.display()))?;

    let dot_path = output.with_extension("dot");
    fs::write(&dot_path, network.to_dot())
        .with_context(|| format!("Failed to write {}", dot_path.display()))?;
    info!("DOT file '{}' created", dot_path.display());

    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(&dot_path)
        .arg("-o")
        .arg(&output)
        .status()
        .context("Failed to run Graphviz 'dot'. Is Graphviz installed and on the PATH?")?;
    if !status.success() {
        anyhow::bail!("Graphviz 'dot' exited with {}", status);
    }

    if !keep_dot {
        let _ = fs::remove_file(&dot_path);
    }

    println!("Network visualization created: {}", output.display());
    Ok(())
}
