#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Compile-time registries of departments and districts.
//!
//! Loads the embedded TOML catalogs once at startup and wraps them in
//! directory types that provide lookups. Both catalogs are immutable for
//! the life of the process; consumers share them read-only.

pub mod registry;

use civic_map_directory_models::Department;
use civic_map_geography_models::District;

/// The department catalog, loaded once and shared across all consumers.
pub struct DepartmentDirectory {
    departments: Vec<Department>,
}

impl DepartmentDirectory {
    /// Loads the embedded department catalog.
    ///
    /// # Panics
    ///
    /// Panics if an embedded TOML file fails to parse (a development
    /// error, caught during CI).
    #[must_use]
    pub fn load() -> Self {
        let departments = registry::all_departments();
        log::info!("Loaded {} departments into directory", departments.len());
        Self { departments }
    }

    /// Returns all departments in catalog priority order.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Looks up a department by slug.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }
}

/// The district catalog, loaded once and shared across all consumers.
pub struct DistrictDirectory {
    districts: Vec<District>,
}

impl DistrictDirectory {
    /// Loads the embedded district catalog.
    ///
    /// # Panics
    ///
    /// Panics if an embedded TOML file fails to parse (a development
    /// error, caught during CI).
    #[must_use]
    pub fn load() -> Self {
        let districts = registry::all_districts();
        log::info!("Loaded {} districts into directory", districts.len());
        Self { districts }
    }

    /// Returns all districts.
    #[must_use]
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Looks up a district by identifier.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_lookup_by_id() {
        let directory = DepartmentDirectory::load();
        let department = directory.by_id("public-works").unwrap();
        assert_eq!(department.name, "Public Works");
        assert!(directory.by_id("no-such-department").is_none());
    }

    #[test]
    fn district_lookup_by_id() {
        let directory = DistrictDirectory::load();
        let district = directory.by_id("downtown").unwrap();
        assert_eq!(district.name, "Downtown");
        assert!(directory.by_id("no-such-district").is_none());
    }
}
