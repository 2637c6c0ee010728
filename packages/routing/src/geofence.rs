//! Geofence evaluation.
//!
//! Decides whether a coordinate lies within a [`LocationFilter`]. Every
//! degenerate input fails open: an unknown district id, a polygon with
//! fewer than three vertices, or a report without a coordinate all admit
//! the point. A misconfigured filter degrades to "show all areas" instead
//! of hiding reports.

use civic_map_directory::DistrictDirectory;
use civic_map_geography_models::{Coordinate, LocationFilter};
use civic_map_issue_models::ReportRecord;

use crate::distance::distance_km;

/// Whether a coordinate lies within a location filter.
///
/// `None` means "all areas" and admits every point. The function never
/// errors; every input maps to a boolean.
#[must_use]
pub fn is_within_filter(
    point: Coordinate,
    filter: Option<&LocationFilter>,
    districts: &DistrictDirectory,
) -> bool {
    let Some(filter) = filter else {
        return true;
    };

    match filter {
        LocationFilter::Radius { center, radius_km, .. } => {
            distance_km(point, *center) <= *radius_km
        }
        LocationFilter::District { district_id, .. } => {
            match districts.by_id(district_id) {
                Some(district) => district.bounds.contains(point),
                // Unknown district: fail open.
                None => true,
            }
        }
        LocationFilter::Polygon { vertices, .. } => {
            if vertices.len() < 3 {
                // Degenerate polygon: fail open.
                return true;
            }
            point_in_polygon(point, vertices)
        }
    }
}

/// Whether a report falls within a location filter.
///
/// A report without a coordinate fails open into every filter, so
/// unlocated reports stay visible regardless of the active filter.
#[must_use]
pub fn report_matches_filter(
    report: &ReportRecord,
    filter: Option<&LocationFilter>,
    districts: &DistrictDirectory,
) -> bool {
    match report.coordinate() {
        Some(point) => is_within_filter(point, filter, districts),
        None => true,
    }
}

/// Ray-casting point-in-polygon test.
///
/// Casts a ray along the latitude axis and toggles an inside flag at each
/// edge crossing. The closing edge from the last vertex back to the first
/// is implicit. A point exactly on a vertex or edge is
/// implementation-defined: whichever side the floating-point crossing test
/// lands on.
#[must_use]
pub fn point_in_polygon(point: Coordinate, vertices: &[Coordinate]) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.lng > point.lng) != (vj.lng > point.lng))
            && (point.lat < (vj.lat - vi.lat) * (point.lng - vi.lng) / (vj.lng - vi.lng) + vi.lat)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
