//! `daily generate` command.

use tracing::info;

use crate::cli::GenerateArgs;
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::error::{DailyError, Result};
use crate::fixture::generate_view_state;
use crate::view_state::ViewState;

/// Generate a view state and write it to the configured output path.
///
/// # Errors
///
/// Returns an error if the config is unreadable or invalid, if generation
/// exhausts its retry bound, or if the output cannot be written.
pub fn run_with_context(ctx: &mut ServiceContext, args: &GenerateArgs) -> Result<ViewState> {
    let config = resolve_config(ctx, args)?;
    if let Some(seed) = config.seed {
        ctx.reseed(seed);
    }
    if let Some(seed) = ctx.seed() {
        info!(seed, "seeded random source");
    }

    let now = ctx.clock.now();
    let state = generate_view_state(&config, now, ctx.rng.as_mut())?;

    let json = state.to_pretty_json()?;
    ctx.fs.write(&config.output, &json).map_err(|e| DailyError::io(&config.output, e))?;

    info!(
        path = %config.output.display(),
        projects = state.projects.len(),
        "wrote view state"
    );
    Ok(state)
}

/// Layers the optional config file and the command-line overrides over the
/// defaults, then validates the result.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the merged
/// config is invalid.
pub fn resolve_config(ctx: &ServiceContext, args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(ctx.fs.as_ref(), path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(projects) = args.projects {
        config.projects = projects;
    }
    if let Some(branches) = args.branches {
        config.branch_attempts = branches;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::scripted::{FixedClock, ScriptedRandom};
    use crate::ports::FileSystem;

    /// In-memory filesystem shared with the test through an `Arc`.
    #[derive(Clone, Default)]
    struct MemFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
    }

    impl FileSystem for MemFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }

    struct ReadOnlyFs;

    impl FileSystem for ReadOnlyFs {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn write(&self, _path: &Path, _contents: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn ctx_with(fs: Box<dyn FileSystem>) -> ServiceContext {
        ServiceContext::new(
            Box::new(FixedClock("2024-03-01T12:00:00Z".parse().unwrap())),
            fs,
            Box::new(ScriptedRandom::always(0.0)),
        )
    }

    #[test]
    fn writes_pretty_json_to_output() {
        let fs = MemFs::default();
        let mut ctx = ctx_with(Box::new(fs.clone()));
        let args = GenerateArgs {
            output: Some(PathBuf::from("out/view_state.json")),
            projects: Some(1),
            branches: Some(2),
            ..GenerateArgs::default()
        };

        let state = run_with_context(&mut ctx, &args).unwrap();

        let files = fs.files.lock().unwrap();
        let written = files.get(Path::new("out/view_state.json")).unwrap();
        assert!(written.starts_with("{\n    \"id\": "));
        let parsed: ViewState = serde_json::from_str(written).unwrap();
        assert_eq!(parsed, state);
        assert_eq!(parsed.projects[0].branches.main.len(), 2);
    }

    #[test]
    fn write_failure_is_an_io_error() {
        let mut ctx = ctx_with(Box::new(ReadOnlyFs));
        let args = GenerateArgs { projects: Some(1), branches: Some(1), ..GenerateArgs::default() };
        let err = run_with_context(&mut ctx, &args).unwrap_err();
        assert!(matches!(err, DailyError::Io { .. }));
        assert!(err.to_string().contains("view_state.json"));
    }

    #[test]
    fn flags_override_config_file() {
        let fs = MemFs::default();
        fs.write(Path::new("daily.yaml"), "projects: 3\nbranch_attempts: 4\nseed: 1\n").unwrap();
        let ctx = ctx_with(Box::new(fs));
        let args = GenerateArgs {
            config: Some(PathBuf::from("daily.yaml")),
            seed: Some(2),
            branches: Some(9),
            ..GenerateArgs::default()
        };

        let config = resolve_config(&ctx, &args).unwrap();
        assert_eq!(config.projects, 3);
        assert_eq!(config.branch_attempts, 9);
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let fs = MemFs::default();
        fs.write(Path::new("daily.yaml"), "max_attempts: 0\n").unwrap();
        let mut ctx = ctx_with(Box::new(fs));
        let args =
            GenerateArgs { config: Some(PathBuf::from("daily.yaml")), ..GenerateArgs::default() };
        assert!(matches!(run_with_context(&mut ctx, &args), Err(DailyError::Config(_))));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let args = GenerateArgs { seed: Some(17), projects: Some(2), ..GenerateArgs::default() };
        let a = run_with_context(&mut ctx_with(Box::new(MemFs::default())), &args).unwrap();
        let b = run_with_context(&mut ctx_with(Box::new(MemFs::default())), &args).unwrap();
        assert_eq!(a, b);
    }
}
