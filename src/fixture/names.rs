//! Branch name grammar per category.

use tracing::info;

use super::{random_string, FixtureGenerator, EXTENDED};
use crate::error::Result;
use crate::ports::RandomSource;
use crate::view_state::BranchCategory;

impl<R: RandomSource + ?Sized> FixtureGenerator<'_, R> {
    /// Generates a branch name following the naming scheme of `category`.
    ///
    /// - `main`: the next unused configured main branch, then generic names
    /// - `feature`: `feature/[PROJ-n-]<suffix>`
    /// - `user`: `user/<user>/[PROJ-n-]<suffix>`
    /// - `release`: `release/<major>.<minor>.<patch>`
    /// - `other`: a mixed-case random name
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DailyError::GenerationExhausted`] when a
    /// unique identifier, user or version cannot be found.
    pub fn branch_name(&mut self, category: BranchCategory) -> Result<String> {
        match category {
            BranchCategory::Main => {
                if let Some(name) = self.registry.claim_main_branch(&self.config.main_branches) {
                    return Ok(name);
                }
                if !self.main_exhausted {
                    info!("all main branch names used; falling back to generic names");
                    self.main_exhausted = true;
                }
                Ok(self.generic_name())
            }
            BranchCategory::Feature => {
                let prefix = self.optional_project_prefix()?;
                let suffix = self.suffix();
                Ok(format!("feature/{prefix}{suffix}"))
            }
            BranchCategory::User => {
                let prefix = self.optional_project_prefix()?;
                let user = self.any_user()?;
                let suffix = self.suffix();
                Ok(format!("user/{user}/{prefix}{suffix}"))
            }
            BranchCategory::Release => Ok(format!("release/{}", self.new_version()?)),
            BranchCategory::Other => Ok(self.generic_name()),
        }
    }

    /// A `PROJ-n-` prefix half of the time, otherwise empty.
    ///
    /// The identifier is drawn either way, so the registry counters advance
    /// even when the prefix is dropped.
    fn optional_project_prefix(&mut self) -> Result<String> {
        let identifier = match self.registry.project_base_count() {
            0 => self.new_project_identifier()?,
            count => {
                let pick = self.rng.index(count);
                match self.registry.project_base(pick).map(str::to_string) {
                    Some(base) => self.increment_project_identifier(&base),
                    None => self.new_project_identifier()?,
                }
            }
        };
        Ok(if self.rng.coin() { format!("{identifier}-") } else { String::new() })
    }

    /// A freshly minted user half of the time, otherwise an existing one.
    fn any_user(&mut self) -> Result<String> {
        let mint = self.rng.coin();
        let count = self.registry.users().len();
        if mint || count == 0 {
            return self.new_user();
        }
        let pick = self.rng.index(count);
        Ok(self.registry.users()[pick].clone())
    }

    /// Lowercase tail of 10 to 20 branch-safe characters.
    fn suffix(&mut self) -> String {
        let len = self.rng.between(10, 20) as usize;
        random_string(&mut *self.rng, len, EXTENDED).to_ascii_lowercase()
    }

    /// Mixed-case name of 5 to 15 branch-safe characters.
    fn generic_name(&mut self) -> String {
        let len = self.rng.between(5, 15) as usize;
        random_string(&mut *self.rng, len, EXTENDED)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use crate::adapters::live::LiveRandom;
    use crate::adapters::scripted::ScriptedRandom;
    use crate::config::GeneratorConfig;
    use crate::fixture::FixtureGenerator;
    use crate::view_state::BranchCategory;

    fn now() -> DateTime<Utc> {
        "2024-03-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn main_falls_back_after_the_list_is_used_up() {
        let config = GeneratorConfig { main_branches: vec!["trunk".into()], ..Default::default() };
        let mut rng = ScriptedRandom::always(0.0);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        assert_eq!(generator.branch_name(BranchCategory::Main).unwrap(), "trunk");
        assert_eq!(generator.branch_name(BranchCategory::Main).unwrap(), "00000");
    }

    #[test]
    fn release_names_carry_a_version() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRandom::always(0.0);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        assert_eq!(generator.branch_name(BranchCategory::Release).unwrap(), "release/0.0.0");
    }

    #[test]
    fn feature_without_prefix_on_low_draws() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRandom::always(0.0);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        // identifier "AA-1" is minted but the prefix coin lands low
        assert_eq!(generator.branch_name(BranchCategory::Feature).unwrap(), "feature/0000000000");
        assert_eq!(generator.registry().project_counter("AA"), Some(1));
    }

    #[test]
    fn feature_with_prefix_on_high_draws() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRandom::always(0.99);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        let name = generator.branch_name(BranchCategory::Feature).unwrap();
        // 4-letter base of 'Z', prefix kept, 20-char suffix of '/'
        assert_eq!(name, format!("feature/ZZZZ-1-{}", "/".repeat(20)));
    }

    #[test]
    fn later_prefixes_increment_existing_identifiers() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRandom::always(0.99);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        generator.branch_name(BranchCategory::Feature).unwrap();
        let name = generator.branch_name(BranchCategory::Feature).unwrap();
        assert!(name.starts_with("feature/ZZZZ-2-"), "{name}");
    }

    #[test]
    fn user_names_have_user_segment() {
        let config = GeneratorConfig::default();
        let mut rng = LiveRandom::seeded(21);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        for _ in 0..50 {
            let name = generator.branch_name(BranchCategory::User).unwrap();
            let rest = name.strip_prefix("user/").unwrap();
            let (user, tail) = rest.split_once('/').unwrap();
            assert_eq!(user.len(), 4);
            assert!(user.chars().all(|c| c.is_ascii_lowercase()));
            assert!(!tail.is_empty());
            assert_eq!(tail, tail.to_lowercase());
        }
        assert!(!generator.registry().users().is_empty());
    }

    #[test]
    fn other_names_stay_in_length_range() {
        let config = GeneratorConfig::default();
        let mut rng = LiveRandom::seeded(8);
        let mut generator = FixtureGenerator::new(&config, now(), &mut rng);
        for _ in 0..100 {
            let name = generator.branch_name(BranchCategory::Other).unwrap();
            assert!((5..=15).contains(&name.len()), "{name}");
        }
    }
}
