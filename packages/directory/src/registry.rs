//! Compile-time registry of department and district catalog data.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Adding a department or district requires creating a TOML file and adding
//! a corresponding entry here.

use civic_map_directory_models::Department;
use civic_map_geography_models::District;

/// Number of registered departments. Updated when departments are added.
/// Enforced by a test.
#[cfg(test)]
const EXPECTED_DEPARTMENT_COUNT: usize = 7;

/// Number of registered districts. Updated when districts are added.
/// Enforced by a test.
#[cfg(test)]
const EXPECTED_DISTRICT_COUNT: usize = 4;

/// Embedded department TOML definitions, in catalog priority order.
/// Assignment picks the first department claiming a category, so order
/// here is meaningful.
const DEPARTMENT_TOMLS: &[(&str, &str)] = &[
    (
        "public-works",
        include_str!("../departments/public-works.toml"),
    ),
    (
        "transportation",
        include_str!("../departments/transportation.toml"),
    ),
    ("utilities", include_str!("../departments/utilities.toml")),
    ("sanitation", include_str!("../departments/sanitation.toml")),
    (
        "parks-recreation",
        include_str!("../departments/parks-recreation.toml"),
    ),
    (
        "code-enforcement",
        include_str!("../departments/code-enforcement.toml"),
    ),
    (
        "public-safety",
        include_str!("../departments/public-safety.toml"),
    ),
];

/// Embedded district TOML definitions.
const DISTRICT_TOMLS: &[(&str, &str)] = &[
    ("downtown", include_str!("../districts/downtown.toml")),
    ("riverside", include_str!("../districts/riverside.toml")),
    ("midtown", include_str!("../districts/midtown.toml")),
    ("northside", include_str!("../districts/northside.toml")),
];

/// Returns all registered departments in catalog priority order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught during CI.
#[must_use]
pub fn all_departments() -> Vec<Department> {
    DEPARTMENT_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse department '{name}': {e}"))
        })
        .collect()
}

/// Returns all registered districts.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse (a development error,
/// caught during CI).
#[must_use]
pub fn all_districts() -> Vec<District> {
    DISTRICT_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse district '{name}': {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_all_departments() {
        let departments = all_departments();
        assert_eq!(
            departments.len(),
            EXPECTED_DEPARTMENT_COUNT,
            "Expected {EXPECTED_DEPARTMENT_COUNT} departments, found {}. \
             Update EXPECTED_DEPARTMENT_COUNT after adding/removing departments.",
            departments.len()
        );
    }

    #[test]
    fn loads_all_districts() {
        let districts = all_districts();
        assert_eq!(
            districts.len(),
            EXPECTED_DISTRICT_COUNT,
            "Expected {EXPECTED_DISTRICT_COUNT} districts, found {}. \
             Update EXPECTED_DISTRICT_COUNT after adding/removing districts.",
            districts.len()
        );
    }

    #[test]
    fn department_ids_are_unique() {
        let departments = all_departments();
        let mut seen = BTreeSet::new();
        for department in &departments {
            assert!(
                seen.insert(&department.id),
                "Duplicate department ID: {}",
                department.id
            );
        }
    }

    #[test]
    fn district_ids_are_unique() {
        let districts = all_districts();
        let mut seen = BTreeSet::new();
        for district in &districts {
            assert!(
                seen.insert(&district.id),
                "Duplicate district ID: {}",
                district.id
            );
        }
    }

    #[test]
    fn category_claims_are_unique_across_departments() {
        // Assignment is first-match-wins, so a category claimed twice would
        // silently shadow the later department. Keep claims disjoint.
        let mut seen = BTreeSet::new();
        for department in all_departments() {
            for category in &department.categories {
                assert!(
                    seen.insert(*category),
                    "Category {category:?} claimed by more than one department \
                     (second claim: {})",
                    department.id
                );
            }
        }
    }

    #[test]
    fn all_departments_have_required_fields() {
        for department in &all_departments() {
            assert!(!department.id.is_empty(), "Department has empty id");
            assert!(
                !department.name.is_empty(),
                "Department {} has empty name",
                department.id
            );
            assert!(
                !department.categories.is_empty(),
                "Department {} claims no categories",
                department.id
            );
            assert!(
                department.color.starts_with('#'),
                "Department {} has non-hex color: {}",
                department.id,
                department.color
            );
        }
    }

    #[test]
    fn district_bounds_are_well_formed() {
        for district in &all_districts() {
            assert!(
                district.bounds.north > district.bounds.south,
                "District {} has north <= south",
                district.id
            );
            assert!(
                district.bounds.east > district.bounds.west,
                "District {} has east <= west",
                district.id
            );
        }
    }
}
