//! The civic issue report record.

use chrono::{DateTime, Utc};
use civic_map_geography_models::Coordinate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{IssueCategory, IssuePriority, IssueStatus};

/// A citizen-submitted report of a municipal problem.
///
/// Reports are created with status [`IssueStatus::Submitted`] and a
/// department assigned at creation time from the category. The coordinate
/// is optional; reports without one are still listed but cannot be
/// location-filtered (they fail open into every filter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    /// Unique report ID.
    pub id: Uuid,
    /// Short title (e.g. "Pothole on Elm St").
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Canonical issue category.
    pub category: IssueCategory,
    /// Current lifecycle status.
    pub status: IssueStatus,
    /// Triage priority.
    pub priority: IssuePriority,
    /// Latitude in WGS84 degrees, if the reporter pinned a location.
    pub latitude: Option<f64>,
    /// Longitude in WGS84 degrees, if the reporter pinned a location.
    pub longitude: Option<f64>,
    /// Slug of the department assigned to this report, if any category
    /// owner was found.
    pub department_id: Option<String>,
    /// Optional reporter contact (email or phone) for follow-up.
    pub submitter_contact: Option<String>,
    /// Community upvote count.
    pub upvotes: u32,
    /// Community downvote count.
    pub downvotes: u32,
    /// When the report was submitted.
    pub created_at: DateTime<Utc>,
    /// When the report was last modified.
    pub updated_at: DateTime<Utc>,
}

impl ReportRecord {
    /// Returns the report's coordinate when both latitude and longitude
    /// are present.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(latitude: Option<f64>, longitude: Option<f64>) -> ReportRecord {
        ReportRecord {
            id: Uuid::nil(),
            title: "Pothole on Elm St".to_string(),
            description: None,
            category: IssueCategory::Pothole,
            status: IssueStatus::Submitted,
            priority: IssuePriority::Medium,
            latitude,
            longitude,
            department_id: None,
            submitter_contact: None,
            upvotes: 0,
            downvotes: 0,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn coordinate_requires_both_fields() {
        assert!(record(Some(40.7), Some(-74.0)).coordinate().is_some());
        assert!(record(Some(40.7), None).coordinate().is_none());
        assert!(record(None, Some(-74.0)).coordinate().is_none());
        assert!(record(None, None).coordinate().is_none());
    }
}
