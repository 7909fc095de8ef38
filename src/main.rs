// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Agentnet CLI - synthetic agent network generation

use agentnet::commands;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agentnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation and write the network file
    Generate {
        /// Configuration file (JSON); defaults apply when omitted
        #[arg(short, long, env = "AGENTNET_CONFIG")]
        config: Option<std::path::PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "network.json")]
        output: std::path::PathBuf,

        /// RNG seed (overrides the config file seed)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export a generated network to various formats
    Export {
        /// Network file to export
        #[arg(short, long, default_value = "network.json")]
        input: std::path::PathBuf,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Render a generated network to an image via Graphviz
    Render {
        /// Network file to render
        #[arg(short, long, default_value = "network.json")]
        input: std::path::PathBuf,

        /// Output image file
        #[arg(short, long, default_value = "network.png")]
        output: std::path::PathBuf,

        /// Keep the intermediate DOT file
        #[arg(long)]
        keep_dot: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Generate { config, output, seed } => {
            commands::generate::run(config, output, seed)
        }
        Commands::Export { input, format, output } => {
            commands::export::run(input, &format, output)
        }
        Commands::Render { input, output, keep_dot } => {
            commands::render::run(input, output, keep_dot)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
