//! HTTP handler functions for the civic map API.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use civic_map_geography_models::{Coordinate, LocationFilter};
use civic_map_issue_models::{
    IssueCategory, IssuePriority, IssueStatus, ReportRecord, label::map_category_label,
};
use civic_map_routing::{assign_department, report_matches_filter};
use civic_map_server_models::{
    ApiDepartment, ApiDistrict, ApiHealth, ApiReport, ApiVoteSummary, ReportListResponse,
    ReportQueryParams, SearchRequest, StatusChangeRequest, SubmitReportRequest, VoteRequest,
};
use uuid::Uuid;

use crate::AppState;
use crate::store::StoreError;

/// Radius applied to `near` queries that don't specify one.
const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Page size applied when the client doesn't specify a limit.
const DEFAULT_LIMIT: u32 = 100;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/departments`
///
/// Returns the department catalog with owned categories.
pub async fn departments(state: web::Data<AppState>) -> HttpResponse {
    let departments: Vec<ApiDepartment> = state
        .departments
        .departments()
        .iter()
        .map(ApiDepartment::from)
        .collect();

    HttpResponse::Ok().json(departments)
}

/// `GET /api/districts`
///
/// Returns the district registry with rectangular bounds.
pub async fn districts(state: web::Data<AppState>) -> HttpResponse {
    let districts: Vec<ApiDistrict> = state
        .districts
        .districts()
        .iter()
        .map(ApiDistrict::from)
        .collect();

    HttpResponse::Ok().json(districts)
}

/// `GET /api/reports`
///
/// Lists reports with location, category, status, and priority filters.
pub async fn reports(
    state: web::Data<AppState>,
    params: web::Query<ReportQueryParams>,
) -> HttpResponse {
    let filter = location_filter_from_params(&params);

    let categories: Vec<IssueCategory> = parse_comma_list(params.categories.as_deref());
    let statuses: Vec<IssueStatus> = parse_comma_list(params.statuses.as_deref());
    let priority_min = params
        .priority_min
        .and_then(|v| IssuePriority::from_value(v).ok());

    list_reports(
        &state,
        filter.as_ref(),
        &categories,
        &statuses,
        priority_min,
        params.limit,
        params.offset,
    )
}

/// `POST /api/reports/search`
///
/// Like `GET /api/reports`, but accepts a full [`LocationFilter`] in the
/// body — the only way to pass a drawn polygon.
pub async fn search_reports(
    state: web::Data<AppState>,
    body: web::Json<SearchRequest>,
) -> HttpResponse {
    let priority_min = body
        .priority_min
        .and_then(|v| IssuePriority::from_value(v).ok());

    list_reports(
        &state,
        body.filter.as_ref(),
        &body.categories,
        &body.statuses,
        priority_min,
        body.limit,
        body.offset,
    )
}

/// `POST /api/reports`
///
/// Submits a new report: normalizes the category label, assigns the owning
/// department, and stores the record with status `submitted`.
pub async fn submit_report(
    state: web::Data<AppState>,
    body: web::Json<SubmitReportRequest>,
) -> HttpResponse {
    let body = body.into_inner();

    if body.title.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "title must not be empty"
        }));
    }

    let category = map_category_label(&body.category_label);
    let coordinate = match (body.latitude, body.longitude) {
        (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }),
        _ => None,
    };
    let department_id = assign_department(&state.departments, category, coordinate)
        .map(|department| department.id.clone());

    let priority = body
        .priority
        .and_then(|v| IssuePriority::from_value(v).ok())
        .unwrap_or_else(|| category.default_priority());

    let now = Utc::now();
    let record = ReportRecord {
        id: Uuid::new_v4(),
        title: body.title,
        description: body.description,
        category,
        status: IssueStatus::Submitted,
        priority,
        latitude: body.latitude,
        longitude: body.longitude,
        department_id,
        submitter_contact: body.submitter_contact,
        upvotes: 0,
        downvotes: 0,
        created_at: now,
        updated_at: now,
    };

    log::info!(
        "New report {} ({}) assigned to {:?}",
        record.id,
        record.category,
        record.department_id
    );

    state.store.insert(record.clone());
    HttpResponse::Created().json(ApiReport::from(record))
}

/// `POST /api/reports/{id}/status`
///
/// Admin triage: moves a report to a new status if the transition is
/// allowed.
pub async fn change_status(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<StatusChangeRequest>,
) -> HttpResponse {
    match state
        .store
        .change_status(path.into_inner(), body.status, Utc::now())
    {
        Ok(record) => HttpResponse::Ok().json(ApiReport::from(record)),
        Err(e @ StoreError::UnknownReport(_)) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e @ StoreError::InvalidTransition { .. }) => {
            HttpResponse::UnprocessableEntity().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// `POST /api/reports/{id}/vote`
///
/// Applies a vote transition to the report's tally.
pub async fn vote(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<VoteRequest>,
) -> HttpResponse {
    match state
        .store
        .apply_vote(path.into_inner(), body.previous, body.cast)
    {
        Ok((tally, vote)) => HttpResponse::Ok().json(ApiVoteSummary {
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
            vote,
        }),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Shared listing path for the GET and search endpoints.
fn list_reports(
    state: &AppState,
    filter: Option<&LocationFilter>,
    categories: &[IssueCategory],
    statuses: &[IssueStatus],
    priority_min: Option<IssuePriority>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> HttpResponse {
    let mut matching: Vec<ReportRecord> = state
        .store
        .all()
        .into_iter()
        .filter(|record| {
            (categories.is_empty() || categories.contains(&record.category))
                && (statuses.is_empty() || statuses.contains(&record.status))
                && priority_min.is_none_or(|min| record.priority >= min)
                && report_matches_filter(record, filter, &state.districts)
        })
        .collect();

    matching.sort_by_key(|record| std::cmp::Reverse(record.created_at));

    let total_count = matching.len() as u64;
    let offset = offset.unwrap_or(0) as usize;
    let limit = limit.unwrap_or(DEFAULT_LIMIT) as usize;

    let page: Vec<ApiReport> = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(ApiReport::from)
        .collect();

    let has_more = (offset + page.len()) < total_count as usize;

    HttpResponse::Ok().json(ReportListResponse {
        reports: page,
        total_count,
        has_more,
    })
}

/// Builds a location filter from the GET query parameters.
///
/// A malformed `near` value fails open (no location filter), matching the
/// core geofence semantics.
fn location_filter_from_params(params: &ReportQueryParams) -> Option<LocationFilter> {
    if let Some(center) = params.near.as_deref().and_then(parse_near) {
        return Some(LocationFilter::Radius {
            name: "Near Me".to_string(),
            center,
            radius_km: params.radius_km.unwrap_or(DEFAULT_RADIUS_KM),
        });
    }

    params.district.as_ref().map(|district_id| LocationFilter::District {
        name: district_id.clone(),
        district_id: district_id.clone(),
    })
}

/// Parses a `lat,lng` pair.
fn parse_near(raw: &str) -> Option<Coordinate> {
    let (lat, lng) = raw.split_once(',')?;
    Some(Coordinate {
        lat: lat.trim().parse().ok()?,
        lng: lng.trim().parse().ok()?,
    })
}

/// Parses a comma-separated list of enum tags, skipping anything that
/// doesn't parse.
fn parse_comma_list<T: std::str::FromStr>(raw: Option<&str>) -> Vec<T> {
    raw.map(|s| s.split(',').filter_map(|item| item.trim().parse().ok()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_near_accepts_lat_lng_pair() {
        let coord = parse_near("40.7128, -74.0060").unwrap();
        assert!((coord.lat - 40.7128).abs() < f64::EPSILON);
        assert!((coord.lng - -74.0060).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_near_rejects_garbage() {
        assert!(parse_near("").is_none());
        assert!(parse_near("40.7128").is_none());
        assert!(parse_near("a,b").is_none());
    }

    #[test]
    fn comma_list_skips_unknown_tags() {
        let categories: Vec<IssueCategory> =
            parse_comma_list(Some("pothole, not_a_tag ,graffiti"));
        assert_eq!(categories, vec![IssueCategory::Pothole, IssueCategory::Graffiti]);
    }
}
