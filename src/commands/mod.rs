//! Command dispatch and handlers.

pub mod branch_metadata;
pub mod generate;
pub mod summary;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::error::Result;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns the handler's error.
pub fn dispatch(command: &Command) -> Result<()> {
    let mut ctx = ServiceContext::live(None);
    dispatch_with_context(command, &mut ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns the handler's error.
pub fn dispatch_with_context(command: &Command, ctx: &mut ServiceContext) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run_with_context(ctx, args).map(|_| ()),
        Command::BranchMetadata { branch, output_dir } => {
            branch_metadata::run_with_context(ctx, branch, output_dir).map(|_| ())
        }
        Command::Summary { path } => summary::run_with_context(ctx, path),
    }
}
