//! Synthetic view state generation.
//!
//! Builds a plausible tree of projects and branches for the daily client to
//! render during development. All randomness comes from an injected
//! [`RandomSource`], and every uniqueness constraint is enforced against a
//! [`Registry`] owned by the run.

pub mod date;
mod names;
pub mod registry;
pub mod strings;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::{DailyError, Result};
use crate::ports::RandomSource;
use crate::view_state::{Branch, BranchCategory, Branches, Project, ViewState};

pub use registry::Registry;
pub use strings::{random_string, ALPHABET, EXTENDED};

/// Length of generated project, repository and host names.
const NAME_LEN: usize = 10;

/// Generates a complete [`ViewState`].
///
/// # Errors
///
/// Returns [`DailyError::GenerationExhausted`] if a unique value cannot be
/// found within `config.max_attempts` draws.
pub fn generate_view_state<R>(
    config: &GeneratorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<ViewState>
where
    R: RandomSource + ?Sized,
{
    FixtureGenerator::new(config, now, rng).generate()
}

/// One generation run: configuration, time bound, random source and the
/// registry of values handed out so far.
pub struct FixtureGenerator<'a, R: RandomSource + ?Sized> {
    config: &'a GeneratorConfig,
    now: DateTime<Utc>,
    rng: &'a mut R,
    registry: Registry,
    main_exhausted: bool,
}

impl<'a, R: RandomSource + ?Sized> FixtureGenerator<'a, R> {
    /// Starts a run with an empty registry.
    pub fn new(config: &'a GeneratorConfig, now: DateTime<Utc>, rng: &'a mut R) -> Self {
        Self { config, now, rng, registry: Registry::new(), main_exhausted: false }
    }

    /// Values handed out so far.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the full generation and consumes the generator.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::GenerationExhausted`] when a retry bound is hit.
    pub fn generate(mut self) -> Result<ViewState> {
        let id = self.now.timestamp_millis();
        let host_repository = random_string(&mut *self.rng, NAME_LEN, ALPHABET);

        let mut projects = Vec::with_capacity(self.config.projects);
        for index in 0..self.config.projects {
            let project = self.project()?;
            debug!(
                index,
                name = %project.name,
                main = project.branches.main.len(),
                user = project.branches.user.len(),
                release = project.branches.release.len(),
                feature = project.branches.feature.len(),
                other = project.branches.other.len(),
                "generated project"
            );
            projects.push(project);
        }

        Ok(ViewState { id, host_repository, projects })
    }

    /// Generates one project with `branch_attempts` branches spread over
    /// uniformly chosen categories.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::GenerationExhausted`] when a retry bound is hit.
    pub fn project(&mut self) -> Result<Project> {
        let mut branches = Branches::default();
        for _ in 0..self.config.branch_attempts {
            let category = BranchCategory::ALL[self.rng.index(BranchCategory::ALL.len())];
            let branch = self.branch(category)?;
            trace!(%category, name = %branch.name, "generated branch");
            branches.bucket_mut(category).push(branch);
        }

        let name = random_string(&mut *self.rng, NAME_LEN, ALPHABET);
        let repository = random_string(&mut *self.rng, NAME_LEN, ALPHABET);
        Ok(Project { name, repository, branches })
    }

    /// Generates a named, slugged and dated branch of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::GenerationExhausted`] when a retry bound is hit.
    pub fn branch(&mut self, category: BranchCategory) -> Result<Branch> {
        let name = self.branch_name(category)?;
        let date = date::random_date(&mut *self.rng, self.now);
        Ok(Branch::new(name, date))
    }

    /// Mints a new `BASE-1` project identifier with a base of 2 to 4
    /// uppercase letters that has not been used before.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::GenerationExhausted`] if every draw collides.
    pub fn new_project_identifier(&mut self) -> Result<String> {
        let len = self.rng.between(2, 4) as usize;
        for _ in 0..self.config.max_attempts {
            let base = random_string(&mut *self.rng, len, ALPHABET).to_ascii_uppercase();
            if self.registry.register_project_base(&base) {
                return Ok(format!("{base}-1"));
            }
        }
        Err(self.exhausted("project identifier"))
    }

    /// Returns `BASE-<n>` with the next counter value for `base`.
    pub fn increment_project_identifier(&mut self, base: &str) -> String {
        let counter = self.registry.increment_project_base(base);
        format!("{base}-{counter}")
    }

    /// Mints a 4-letter lowercase user name not used before.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::GenerationExhausted`] if every draw collides.
    pub fn new_user(&mut self) -> Result<String> {
        for _ in 0..self.config.max_attempts {
            let user = random_string(&mut *self.rng, 4, ALPHABET).to_ascii_lowercase();
            if self.registry.register_user(&user) {
                return Ok(user);
            }
        }
        Err(self.exhausted("user"))
    }

    /// Mints a `MAJOR.MINOR.PATCH` version not used before.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::GenerationExhausted`] if every draw collides.
    pub fn new_version(&mut self) -> Result<String> {
        for _ in 0..self.config.max_attempts {
            let major = self.rng.between(0, 99);
            let minor = self.rng.between(0, 99);
            let patch = self.rng.between(0, 999);
            let version = format!("{major}.{minor}.{patch}");
            if self.registry.register_version(&version) {
                return Ok(version);
            }
        }
        Err(self.exhausted("version"))
    }

    fn exhausted(&self, what: &'static str) -> DailyError {
        DailyError::GenerationExhausted { what, attempts: self.config.max_attempts }
    }
}
