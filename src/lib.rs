//! Build and CI utilities for the daily sites dashboard.
//!
//! The `daily` binary generates synthetic view state fixtures for the
//! dashboard client, records branch deployment metadata from CI, and
//! summarizes view state documents.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod metadata;
pub mod ports;
pub mod view_state;

use clap::Parser;

pub use error::{DailyError, Result};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`DailyError::Usage`] when argument parsing fails, otherwise the
/// error of the executed command.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    logging::init(cli.verbose);
    commands::dispatch(&cli.command)
}
