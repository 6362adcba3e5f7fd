//! `daily summary` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::context::ServiceContext;
use crate::error::{DailyError, Result};
use crate::view_state::{BranchCategory, ViewState};

/// Load a view state and print its per-project summary to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a view state.
pub fn run_with_context(ctx: &ServiceContext, path: &Path) -> Result<()> {
    let state = load(ctx, path)?;
    print!("{}", render(&state));
    Ok(())
}

/// Read and parse a view state document.
///
/// # Errors
///
/// Returns [`DailyError::Io`] on read failure and [`DailyError::Json`] when
/// the document does not match the client schema.
pub fn load(ctx: &ServiceContext, path: &Path) -> Result<ViewState> {
    let contents = ctx.fs.read_to_string(path).map_err(|e| DailyError::io(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Render the summary table.
#[must_use]
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id: {}", state.id);
    let _ = writeln!(out, "host repository: {}", state.host_repository);
    if state.projects.is_empty() {
        out.push_str("No projects.\n");
        return out;
    }

    let _ = write!(out, "{:<16} {:<16}", "PROJECT", "REPOSITORY");
    for category in BranchCategory::ALL {
        let _ = write!(out, " {:>8}", category.as_str().to_uppercase());
    }
    out.push('\n');

    for project in &state.projects {
        let _ = write!(out, "{:<16} {:<16}", project.name, project.repository);
        for category in BranchCategory::ALL {
            let _ = write!(out, " {:>8}", project.branches.bucket(category).len());
        }
        out.push('\n');
    }
    out
}
