#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Civic issue taxonomy types and report records.
//!
//! This crate defines the canonical issue category enumeration shared by
//! report intake and the department catalog. Keeping the taxonomy closed
//! (an enum rather than free-form strings) means a typo'd category fails to
//! parse instead of silently matching no department.

pub mod label;
pub mod report;

pub use report::ReportRecord;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Priority level for a civic issue, from 1 (low) to 4 (critical).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssuePriority {
    /// Level 1: cosmetic or quality-of-life issues
    Low = 1,
    /// Level 2: routine maintenance issues
    Medium = 2,
    /// Level 3: issues affecting safety or access
    High = 3,
    /// Level 4: hazards requiring immediate dispatch
    Critical = 4,
}

impl IssuePriority {
    /// Returns the numeric value of this priority level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a priority level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-4.
    pub const fn from_value(value: u8) -> Result<Self, InvalidPriorityError> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Critical),
            _ => Err(InvalidPriorityError { value }),
        }
    }
}

/// Error returned when attempting to create an [`IssuePriority`] from an
/// invalid numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPriorityError {
    /// The invalid priority value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidPriorityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid priority value {}: expected 1-4", self.value)
    }
}

impl std::error::Error for InvalidPriorityError {}

/// Lifecycle status of a civic issue report.
///
/// Reports move forward through triage; [`IssueStatus::can_transition_to`]
/// defines the allowed moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueStatus {
    /// Newly submitted by a citizen, not yet reviewed.
    Submitted,
    /// Under review by an administrator.
    InReview,
    /// Accepted and assigned to a department.
    Assigned,
    /// Work is underway.
    InProgress,
    /// Work completed; awaiting confirmation.
    Resolved,
    /// Confirmed complete.
    Closed,
    /// Declined during triage (duplicate, out of jurisdiction, etc.).
    Rejected,
}

impl IssueStatus {
    /// Whether this status ends the report lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Rejected)
    }

    /// Whether a report in this status may move to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match self {
            Self::Submitted => matches!(next, Self::InReview | Self::Assigned | Self::Rejected),
            Self::InReview => matches!(next, Self::Assigned | Self::Rejected),
            Self::Assigned => matches!(next, Self::InProgress | Self::Rejected),
            Self::InProgress => matches!(next, Self::Resolved),
            Self::Resolved => matches!(next, Self::Closed),
            Self::Closed | Self::Rejected => false,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Submitted,
            Self::InReview,
            Self::Assigned,
            Self::InProgress,
            Self::Resolved,
            Self::Closed,
            Self::Rejected,
        ]
    }
}

/// Canonical civic issue categories.
///
/// Serialized as the lowercase tags the report forms submit (`pothole`,
/// `road_damage`, ...). The department catalog claims categories from this
/// same enumeration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IssueCategory {
    /// Pothole in a road surface
    Pothole,
    /// Damaged or deteriorated pavement
    RoadDamage,
    /// Cracked or obstructed sidewalk or curb
    SidewalkDamage,
    /// Street light out or flickering
    StreetlightOutage,
    /// Malfunctioning traffic signal
    TrafficSignal,
    /// Vehicle abandoned on public property
    AbandonedVehicle,
    /// Electrical power outage
    PowerOutage,
    /// Water main break, leak, or damaged hydrant
    WaterLeak,
    /// Sewer backup or blocked storm drain
    SewerBackup,
    /// Trash or recycling collection missed
    MissedCollection,
    /// Illegally dumped waste or debris
    IllegalDumping,
    /// Graffiti on public or private property
    Graffiti,
    /// Damaged park equipment or grounds
    ParkMaintenance,
    /// Fallen tree or hanging limb
    FallenTree,
    /// Excessive or persistent noise
    NoiseComplaint,
    /// Issues that don't fit any other category
    Other,
}

impl IssueCategory {
    /// Returns the default priority assigned to new reports in this
    /// category.
    #[must_use]
    pub const fn default_priority(self) -> IssuePriority {
        match self {
            Self::PowerOutage => IssuePriority::Critical,
            Self::WaterLeak | Self::SewerBackup | Self::TrafficSignal | Self::FallenTree => {
                IssuePriority::High
            }
            Self::Pothole
            | Self::RoadDamage
            | Self::SidewalkDamage
            | Self::StreetlightOutage
            | Self::AbandonedVehicle
            | Self::MissedCollection
            | Self::IllegalDumping => IssuePriority::Medium,
            Self::Graffiti | Self::ParkMaintenance | Self::NoiseComplaint | Self::Other => {
                IssuePriority::Low
            }
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pothole,
            Self::RoadDamage,
            Self::SidewalkDamage,
            Self::StreetlightOutage,
            Self::TrafficSignal,
            Self::AbandonedVehicle,
            Self::PowerOutage,
            Self::WaterLeak,
            Self::SewerBackup,
            Self::MissedCollection,
            Self::IllegalDumping,
            Self::Graffiti,
            Self::ParkMaintenance,
            Self::FallenTree,
            Self::NoiseComplaint,
            Self::Other,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_are_lowercase() {
        for cat in IssueCategory::all() {
            let tag = cat.to_string();
            assert_eq!(
                tag,
                tag.to_lowercase(),
                "{cat:?} serializes to non-lowercase tag {tag}"
            );
        }
    }

    #[test]
    fn category_tag_roundtrip() {
        for cat in IssueCategory::all() {
            let parsed: IssueCategory = cat.to_string().parse().unwrap();
            assert_eq!(parsed, *cat);
        }
    }

    #[test]
    fn priority_from_value_roundtrip() {
        for v in 1..=4u8 {
            let priority = IssuePriority::from_value(v).unwrap();
            assert_eq!(priority.value(), v);
        }
        assert!(IssuePriority::from_value(0).is_err());
        assert!(IssuePriority::from_value(5).is_err());
    }

    #[test]
    fn priority_range_valid() {
        for cat in IssueCategory::all() {
            let val = cat.default_priority().value();
            assert!((1..=4).contains(&val), "{cat:?} priority {val} out of range");
        }
    }

    #[test]
    fn terminal_statuses_have_no_exits() {
        for status in IssueStatus::all() {
            if status.is_terminal() {
                for next in IssueStatus::all() {
                    assert!(
                        !status.can_transition_to(*next),
                        "{status:?} is terminal but can move to {next:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn triage_path_is_allowed() {
        assert!(IssueStatus::Submitted.can_transition_to(IssueStatus::InReview));
        assert!(IssueStatus::InReview.can_transition_to(IssueStatus::Assigned));
        assert!(IssueStatus::Assigned.can_transition_to(IssueStatus::InProgress));
        assert!(IssueStatus::InProgress.can_transition_to(IssueStatus::Resolved));
        assert!(IssueStatus::Resolved.can_transition_to(IssueStatus::Closed));
    }

    #[test]
    fn no_status_skips_to_resolution() {
        assert!(!IssueStatus::Submitted.can_transition_to(IssueStatus::Resolved));
        assert!(!IssueStatus::Submitted.can_transition_to(IssueStatus::Closed));
        assert!(!IssueStatus::Assigned.can_transition_to(IssueStatus::Resolved));
    }
}
