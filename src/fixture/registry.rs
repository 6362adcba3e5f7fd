//! Values already handed out during one generation run.

use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Run-scoped uniqueness bookkeeping.
///
/// Owned by a single [`super::FixtureGenerator`] and dropped with it, so
/// separate runs never see each other's values.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    project_identifiers: BTreeMap<String, u32>,
    main_branches: BTreeSet<String>,
    users: Vec<String>,
    user_set: HashSet<String>,
    versions: HashSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new project identifier base at counter 1.
    ///
    /// Returns `false` (and changes nothing) if the base is already known.
    pub fn register_project_base(&mut self, base: &str) -> bool {
        if self.project_identifiers.contains_key(base) {
            return false;
        }
        self.project_identifiers.insert(base.to_string(), 1);
        true
    }

    /// Bumps the counter for `base`, starting it at 1 if unknown, and
    /// returns the new value.
    pub fn increment_project_base(&mut self, base: &str) -> u32 {
        let counter = self.project_identifiers.entry(base.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Current counter for `base`.
    #[must_use]
    pub fn project_counter(&self, base: &str) -> Option<u32> {
        self.project_identifiers.get(base).copied()
    }

    /// Number of registered project identifier bases.
    #[must_use]
    pub fn project_base_count(&self) -> usize {
        self.project_identifiers.len()
    }

    /// The `index`-th registered base in sorted order.
    #[must_use]
    pub fn project_base(&self, index: usize) -> Option<&str> {
        self.project_identifiers.keys().nth(index).map(String::as_str)
    }

    /// Claims the first name in `candidates` not handed out yet.
    pub fn claim_main_branch(&mut self, candidates: &[String]) -> Option<String> {
        let name = candidates.iter().find(|c| !self.main_branches.contains(*c))?;
        self.main_branches.insert(name.clone());
        Some(name.clone())
    }

    /// Records a user; returns `false` if it already exists.
    pub fn register_user(&mut self, user: &str) -> bool {
        if !self.user_set.insert(user.to_string()) {
            return false;
        }
        self.users.push(user.to_string());
        true
    }

    /// Users in the order they were minted.
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Records a version; returns `false` if it already exists.
    pub fn register_version(&mut self, version: &str) -> bool {
        self.versions.insert(version.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_base_registers_once() {
        let mut registry = Registry::new();
        assert!(registry.register_project_base("ABC"));
        assert!(!registry.register_project_base("ABC"));
        assert_eq!(registry.project_counter("ABC"), Some(1));
        assert_eq!(registry.project_base_count(), 1);
    }

    #[test]
    fn increment_counts_from_existing_or_one() {
        let mut registry = Registry::new();
        registry.register_project_base("ABC");
        assert_eq!(registry.increment_project_base("ABC"), 2);
        assert_eq!(registry.increment_project_base("ABC"), 3);
        assert_eq!(registry.increment_project_base("XY"), 1);
        assert_eq!(registry.project_base(0), Some("ABC"));
        assert_eq!(registry.project_base(1), Some("XY"));
        assert_eq!(registry.project_base(2), None);
    }

    #[test]
    fn main_branches_are_handed_out_in_order_once() {
        let candidates: Vec<String> = vec!["main".into(), "master".into()];
        let mut registry = Registry::new();
        assert_eq!(registry.claim_main_branch(&candidates).as_deref(), Some("main"));
        assert_eq!(registry.claim_main_branch(&candidates).as_deref(), Some("master"));
        assert_eq!(registry.claim_main_branch(&candidates), None);
    }

    #[test]
    fn users_keep_insertion_order_and_reject_duplicates() {
        let mut registry = Registry::new();
        assert!(registry.register_user("zzzz"));
        assert!(registry.register_user("aaaa"));
        assert!(!registry.register_user("zzzz"));
        assert_eq!(registry.users(), ["zzzz", "aaaa"]);
    }

    #[test]
    fn versions_reject_duplicates() {
        let mut registry = Registry::new();
        assert!(registry.register_version("1.2.3"));
        assert!(!registry.register_version("1.2.3"));
        assert!(registry.register_version("1.2.4"));
    }
}
