#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the civic map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the store record types to allow independent evolution of the API
//! contract.

use chrono::{DateTime, Utc};
use civic_map_community::{VoteState, VoteTally};
use civic_map_directory_models::Department;
use civic_map_geography_models::{District, DistrictBounds, LocationFilter};
use civic_map_issue_models::{IssueCategory, IssuePriority, IssueStatus, ReportRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A civic issue report as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReport {
    /// Unique report ID.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Canonical issue category.
    pub category: IssueCategory,
    /// Current lifecycle status.
    pub status: IssueStatus,
    /// Triage priority.
    pub priority: IssuePriority,
    /// Priority numeric value (1-4).
    pub priority_value: u8,
    /// Latitude, if the report is located.
    pub latitude: Option<f64>,
    /// Longitude, if the report is located.
    pub longitude: Option<f64>,
    /// Assigned department slug, if any.
    pub department_id: Option<String>,
    /// Community upvote count.
    pub upvotes: u32,
    /// Community downvote count.
    pub downvotes: u32,
    /// Net community score (`upvotes - downvotes`).
    pub score: i64,
    /// When the report was submitted (ISO 8601).
    pub created_at: DateTime<Utc>,
    /// When the report was last modified (ISO 8601).
    pub updated_at: DateTime<Utc>,
}

impl From<ReportRecord> for ApiReport {
    fn from(record: ReportRecord) -> Self {
        let score = VoteTally::new(record.upvotes, record.downvotes).score();
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            category: record.category,
            status: record.status,
            priority: record.priority,
            priority_value: record.priority.value(),
            latitude: record.latitude,
            longitude: record.longitude,
            department_id: record.department_id,
            upvotes: record.upvotes,
            downvotes: record.downvotes,
            score,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// A department catalog entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDepartment {
    /// Department slug.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// One-line description of the department's remit.
    pub description: String,
    /// Display color hint (hex).
    pub color: String,
    /// Display icon hint.
    pub icon: String,
    /// Issue categories this department owns.
    pub categories: Vec<IssueCategory>,
    /// Public contact email, if published.
    pub contact_email: Option<String>,
    /// Public phone number, if published.
    pub phone: Option<String>,
}

impl From<&Department> for ApiDepartment {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id.clone(),
            name: department.name.clone(),
            description: department.description.clone(),
            color: department.color.clone(),
            icon: department.icon.clone(),
            categories: department.categories.clone(),
            contact_email: department.contact_email.clone(),
            phone: department.phone.clone(),
        }
    }
}

/// A district catalog entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDistrict {
    /// District identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Rectangular geographic bounds.
    pub bounds: DistrictBounds,
}

impl From<&District> for ApiDistrict {
    fn from(district: &District) -> Self {
        Self {
            id: district.id.clone(),
            name: district.name.clone(),
            bounds: district.bounds,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters for the reports list endpoint.
///
/// Location filtering comes in two GET-friendly shapes: `near=lat,lng`
/// plus `radiusKm`, or `district=<id>`. Polygon filters have no reasonable
/// query-string encoding and go through the search endpoint body instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQueryParams {
    /// Center for a radius filter, as `lat,lng`.
    pub near: Option<String>,
    /// Radius in kilometers for the `near` filter (default 5).
    pub radius_km: Option<f64>,
    /// District id for a district filter.
    pub district: Option<String>,
    /// Comma-separated list of category tags to include.
    pub categories: Option<String>,
    /// Comma-separated list of status names to include.
    pub statuses: Option<String>,
    /// Minimum priority value (1-4).
    pub priority_min: Option<u8>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Request body for the report search endpoint.
///
/// Carries a full [`LocationFilter`] (including drawn polygons) plus the
/// same taxonomy filters as the GET endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Location filter; absent means "all areas".
    pub filter: Option<LocationFilter>,
    /// Category tags to include; empty or absent means all.
    #[serde(default)]
    pub categories: Vec<IssueCategory>,
    /// Statuses to include; empty or absent means all.
    #[serde(default)]
    pub statuses: Vec<IssueStatus>,
    /// Minimum priority value (1-4).
    pub priority_min: Option<u8>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Response from the report list and search endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListResponse {
    /// Paginated reports.
    pub reports: Vec<ApiReport>,
    /// Total count of reports matching the filters.
    pub total_count: u64,
    /// Whether more reports are available beyond this page.
    pub has_more: bool,
}

/// Request body for submitting a new report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    /// Short title.
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Free-form category label; normalized to the canonical taxonomy
    /// at intake.
    pub category_label: String,
    /// Latitude, if the reporter pinned a location.
    pub latitude: Option<f64>,
    /// Longitude, if the reporter pinned a location.
    pub longitude: Option<f64>,
    /// Priority value (1-4); defaults to the category's default priority.
    pub priority: Option<u8>,
    /// Optional reporter contact for follow-up.
    pub submitter_contact: Option<String>,
}

/// Request body for an admin status change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    /// The status to move the report to.
    pub status: IssueStatus,
}

/// Request body for casting a vote.
///
/// The client reports both its held vote state and the vote being cast;
/// the server applies the toggle bookkeeping. No voter identity is
/// enforced, matching the client-held vote state of the report views.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// The voter's current vote state on this report.
    pub previous: VoteState,
    /// The vote being cast.
    pub cast: VoteState,
}

/// Vote summary returned after a vote is applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVoteSummary {
    /// Upvote count after the vote.
    pub upvotes: u32,
    /// Downvote count after the vote.
    pub downvotes: u32,
    /// Net score after the vote.
    pub score: i64,
    /// The voter's new vote state.
    pub vote: VoteState,
}
