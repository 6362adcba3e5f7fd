//! The ViewState document consumed by the daily client.
//!
//! Field names here are the integration contract with the presentation
//! layer; renaming any of them breaks the client bootstrap.

pub mod slug;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

pub use slug::slug;

/// Root document describing every project and its branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Milliseconds since the Unix epoch when the document was generated.
    pub id: i64,
    /// Repository hosting the daily sites.
    pub host_repository: String,
    /// Projects in display order.
    pub projects: Vec<Project>,
}

impl ViewState {
    /// Serializes with the 4-space indentation the client fixtures use.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a field cannot be encoded.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(serde::ser::Error::custom)
    }
}

/// A project and its branches grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name.
    pub name: String,
    /// Source repository name.
    pub repository: String,
    /// Branches keyed by category.
    pub branches: Branches,
}

/// A deployed branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name as it appears in source control.
    pub name: String,
    /// URL-safe form of `name`.
    pub slug: String,
    /// Deployment time, `yyyy-mm-dd h:m`.
    pub date: String,
}

impl Branch {
    /// Builds a branch, deriving the slug from the name.
    #[must_use]
    pub fn new(name: String, date: String) -> Self {
        let slug = slug(&name);
        Self { name, slug, date }
    }
}

/// The purpose of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchCategory {
    /// Long-lived integration branches (`main`, `master`, ...).
    Main,
    /// Personal branches under `user/<name>/`.
    User,
    /// Release branches under `release/<version>`.
    Release,
    /// Feature branches under `feature/`.
    Feature,
    /// Anything else.
    Other,
}

impl BranchCategory {
    /// Every category, in document key order.
    pub const ALL: [Self; 5] = [Self::Main, Self::User, Self::Release, Self::Feature, Self::Other];

    /// The JSON key for this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::User => "user",
            Self::Release => "release",
            Self::Feature => "feature",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Branch buckets, one per [`BranchCategory`].
///
/// A struct rather than a map so all five keys are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branches {
    /// `main` bucket.
    pub main: Vec<Branch>,
    /// `user` bucket.
    pub user: Vec<Branch>,
    /// `release` bucket.
    pub release: Vec<Branch>,
    /// `feature` bucket.
    pub feature: Vec<Branch>,
    /// `other` bucket.
    pub other: Vec<Branch>,
}

impl Branches {
    /// The bucket for `category`.
    #[must_use]
    pub fn bucket(&self, category: BranchCategory) -> &[Branch] {
        match category {
            BranchCategory::Main => &self.main,
            BranchCategory::User => &self.user,
            BranchCategory::Release => &self.release,
            BranchCategory::Feature => &self.feature,
            BranchCategory::Other => &self.other,
        }
    }

    /// Mutable access to the bucket for `category`.
    pub fn bucket_mut(&mut self, category: BranchCategory) -> &mut Vec<Branch> {
        match category {
            BranchCategory::Main => &mut self.main,
            BranchCategory::User => &mut self.user,
            BranchCategory::Release => &mut self.release,
            BranchCategory::Feature => &mut self.feature,
            BranchCategory::Other => &mut self.other,
        }
    }

    /// Iterates over `(category, branch)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (BranchCategory, &Branch)> {
        BranchCategory::ALL
            .into_iter()
            .flat_map(move |category| self.bucket(category).iter().map(move |b| (category, b)))
    }

    /// Total number of branches across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        BranchCategory::ALL.iter().map(|c| self.bucket(*c).len()).sum()
    }

    /// Returns `true` when every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
