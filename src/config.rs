//! Generator configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an
//! optional YAML file, then command-line flags and environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DailyError, Result};
use crate::ports::FileSystem;

/// Where the generated view state is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "src/daily-client/test/view_state.json";

/// Largest accepted `projects` value.
pub const MAX_PROJECTS: usize = 1_000;

/// Largest accepted `branch_attempts` value.
pub const MAX_BRANCH_ATTEMPTS: usize = 100_000;

/// Tunables for one fixture generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Well-known main branch names, handed out in order, each at most once.
    pub main_branches: Vec<String>,
    /// Number of projects to generate.
    pub projects: usize,
    /// Branch generation attempts per project.
    pub branch_attempts: usize,
    /// Upper bound on retries for each uniqueness-constrained value.
    pub max_attempts: u32,
    /// Output file for the generated document.
    pub output: PathBuf,
    /// Seed for the random source; time-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            main_branches: vec!["main".into(), "master".into(), "develop".into()],
            projects: 5,
            branch_attempts: 500,
            max_attempts: 10_000,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Reads a YAML config file through the filesystem port.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::Io`] if the file cannot be read and
    /// [`DailyError::ConfigParse`] if it is not valid config YAML.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let contents = fs.read_to_string(path).map_err(|e| DailyError::io(path, e))?;
        Self::from_yaml(&contents)
            .map_err(|source| DailyError::ConfigParse { path: path.to_path_buf(), source })
    }

    /// Parses a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the document does not match the schema.
    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Checks the values a run depends on.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(DailyError::Config("max_attempts must be at least 1".into()));
        }
        if let Some(pos) = self.main_branches.iter().position(|b| b.trim().is_empty()) {
            return Err(DailyError::Config(format!("main_branches[{pos}] is empty")));
        }
        if self.projects > MAX_PROJECTS {
            return Err(DailyError::Config(format!(
                "projects must be at most {MAX_PROJECTS}, got {}",
                self.projects
            )));
        }
        if self.branch_attempts > MAX_BRANCH_ATTEMPTS {
            return Err(DailyError::Config(format!(
                "branch_attempts must be at most {MAX_BRANCH_ATTEMPTS}, got {}",
                self.branch_attempts
            )));
        }
        Ok(())
    }
}
