#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Municipal department catalog entry types.
//!
//! Defines the TOML schema for the department directory. Each department
//! claims a set of issue categories from the canonical taxonomy; routing
//! assigns reports to the first department in catalog order that claims
//! the report's category.

use civic_map_issue_models::IssueCategory;
use serde::{Deserialize, Serialize};

/// A municipal department, deserialized from TOML.
///
/// The catalog is fixed at process start; there is no runtime mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department slug (e.g. `"public-works"`).
    pub id: String,
    /// Human-readable name (e.g. "Public Works").
    pub name: String,
    /// One-line description of the department's remit.
    pub description: String,
    /// Display color hint for badges and map markers (hex).
    pub color: String,
    /// Display icon hint (icon font name); passed through untouched.
    pub icon: String,
    /// Issue categories this department owns, in priority order.
    pub categories: Vec<IssueCategory>,
    /// Public contact email, if the department publishes one.
    pub contact_email: Option<String>,
    /// Public phone number, if the department publishes one.
    pub phone: Option<String>,
}

impl Department {
    /// Returns the department slug.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this department owns the given category.
    #[must_use]
    pub fn owns_category(&self, category: IssueCategory) -> bool {
        self.categories.contains(&category)
    }
}
