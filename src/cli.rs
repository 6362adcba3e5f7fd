//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_OUTPUT_PATH;

/// Top-level CLI parser for `daily`.
#[derive(Debug, Parser)]
#[command(name = "daily", version, about = "Build and CI utilities for the daily sites dashboard")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a synthetic view state for local development.
    Generate(GenerateArgs),
    /// Record the deployed branch and time in `<OUTPUT_DIR>/branch.json`.
    BranchMetadata {
        /// Name of the deployed branch.
        branch: String,
        /// Directory to write `branch.json` into; created if missing.
        output_dir: PathBuf,
    },
    /// Print a per-project summary of a view state document.
    Summary {
        /// View state file to read.
        #[arg(default_value = DEFAULT_OUTPUT_PATH)]
        path: PathBuf,
    },
}

/// Options for `daily generate`.
#[derive(Debug, Default, clap::Args)]
pub struct GenerateArgs {
    /// YAML file with generator settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Where to write the view state.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, env = "DAILY_SEED")]
    pub seed: Option<u64>,
    /// Number of projects.
    #[arg(long)]
    pub projects: Option<usize>,
    /// Branch generation attempts per project.
    #[arg(long)]
    pub branches: Option<usize>,
}
