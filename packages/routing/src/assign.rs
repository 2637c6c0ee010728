//! Department assignment.

use civic_map_directory::DepartmentDirectory;
use civic_map_directory_models::Department;
use civic_map_geography_models::Coordinate;
use civic_map_issue_models::IssueCategory;

/// Returns the department responsible for an issue category, or `None` if
/// no department claims it.
///
/// Picks the first department in catalog order whose category list
/// contains `category`. The location parameter is accepted but currently
/// ignored; it reserves the seam for location-based overrides (e.g. a
/// borough-specific department) without an API change. Absence of a match
/// is a normal outcome, not an error.
#[must_use]
pub fn assign_department<'a>(
    directory: &'a DepartmentDirectory,
    category: IssueCategory,
    _location: Option<Coordinate>,
) -> Option<&'a Department> {
    directory
        .departments()
        .iter()
        .find(|department| department.owns_category(category))
}

/// Returns the department responsible for a raw category tag.
///
/// The tag must be an exact lowercase taxonomy tag (`"pothole"`,
/// `"power_outage"`); anything that fails to parse yields `None`. Callers
/// with free-form labels should normalize first via
/// [`civic_map_issue_models::label::map_category_label`].
#[must_use]
pub fn assign_department_for_label<'a>(
    directory: &'a DepartmentDirectory,
    tag: &str,
) -> Option<&'a Department> {
    let category: IssueCategory = tag.parse().ok()?;
    assign_department(directory, category, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_claimed_category_resolves_to_its_owner() {
        let directory = DepartmentDirectory::load();
        for department in directory.departments() {
            for category in &department.categories {
                let assigned = assign_department(&directory, *category, None)
                    .unwrap_or_else(|| panic!("{category:?} resolved to no department"));
                assert_eq!(
                    assigned.id, department.id,
                    "{category:?} resolved to {} instead of {}",
                    assigned.id, department.id
                );
            }
        }
    }

    #[test]
    fn pothole_goes_to_public_works() {
        let directory = DepartmentDirectory::load();
        let department = assign_department(&directory, IssueCategory::Pothole, None).unwrap();
        assert_eq!(department.id, "public-works");
    }

    #[test]
    fn power_outage_goes_to_utilities() {
        let directory = DepartmentDirectory::load();
        let department = assign_department(&directory, IssueCategory::PowerOutage, None).unwrap();
        assert_eq!(department.id, "utilities");
    }

    #[test]
    fn unclaimed_category_returns_none() {
        let directory = DepartmentDirectory::load();
        assert!(assign_department(&directory, IssueCategory::Other, None).is_none());
    }

    #[test]
    fn unknown_tag_returns_none() {
        let directory = DepartmentDirectory::load();
        assert!(assign_department_for_label(&directory, "not_a_real_category").is_none());
        assert!(assign_department_for_label(&directory, "").is_none());
    }

    #[test]
    fn exact_tag_resolves() {
        let directory = DepartmentDirectory::load();
        let department = assign_department_for_label(&directory, "water_leak").unwrap();
        assert_eq!(department.id, "utilities");
    }

    #[test]
    fn location_does_not_change_assignment() {
        let directory = DepartmentDirectory::load();
        let here = Coordinate { lat: 40.71, lng: -74.00 };
        let with_location = assign_department(&directory, IssueCategory::Graffiti, Some(here));
        let without = assign_department(&directory, IssueCategory::Graffiti, None);
        assert_eq!(
            with_location.map(Department::id),
            without.map(Department::id)
        );
    }
}
