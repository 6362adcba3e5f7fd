//! `daily branch-metadata` command.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::context::ServiceContext;
use crate::error::{DailyError, Result};
use crate::metadata::{BranchMetadata, BRANCH_METADATA_FILE};

/// Write `branch.json` for `branch` into `output_dir`.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized or written.
pub fn run_with_context(
    ctx: &ServiceContext,
    branch: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let metadata = BranchMetadata::stamped(branch, ctx.clock.as_ref());
    let json = serde_json::to_string_pretty(&metadata)?;
    let path = output_dir.join(BRANCH_METADATA_FILE);
    ctx.fs.write(&path, &json).map_err(|e| DailyError::io(&path, e))?;
    info!(branch, path = %path.display(), date = %metadata.date, "wrote branch metadata");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use crate::adapters::scripted::{FixedClock, ScriptedRandom};

    #[test]
    fn writes_branch_json_into_new_directory() {
        let dir = std::env::temp_dir().join("daily_branch_metadata_test");
        let _ = std::fs::remove_dir_all(&dir);
        let ctx = ServiceContext::new(
            Box::new(FixedClock("2024-06-15T12:00:00Z".parse().unwrap())),
            Box::new(LiveFileSystem),
            Box::new(ScriptedRandom::always(0.0)),
        );

        let out = dir.join("feature-x");
        let path = run_with_context(&ctx, "feature/x", &out).unwrap();
        assert_eq!(path, out.join("branch.json"));

        let written: BranchMetadata =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.name, "feature/x");
        assert!(written.date.contains("2024"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
