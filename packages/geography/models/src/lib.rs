#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coordinate, district, and location filter types.
//!
//! These types describe geographic areas used to answer questions like
//! "which reports are near me" or "which reports are in Downtown". They
//! are independent of the issue taxonomy.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
///
/// No range validation is performed; callers are responsible for supplying
/// lat in [-90, 90] and lng in [-180, 180]. Out-of-range values propagate
/// through the math and produce numeric (non-crashing) results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Axis-aligned lat/lng rectangle bounding a district.
///
/// Invariant: `north > south`. The east/west pair defines the rectangle's
/// longitude span directly; there is no wraparound handling for districts
/// spanning the ±180° meridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictBounds {
    /// Northern latitude limit.
    pub north: f64,
    /// Southern latitude limit.
    pub south: f64,
    /// Eastern longitude limit.
    pub east: f64,
    /// Western longitude limit.
    pub west: f64,
}

impl DistrictBounds {
    /// Whether a coordinate lies within these bounds (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

/// A named administrative district with rectangular bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    /// Unique district identifier (e.g. `"downtown"`).
    pub id: String,
    /// Human-readable district name.
    pub name: String,
    /// Rectangular geographic bounds.
    pub bounds: DistrictBounds,
}

impl District {
    /// Returns the district identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A user-selected geographic filter for report lists.
///
/// Created transiently by UI interaction ("Near Me", a district pick, or a
/// drawn polygon) and discarded when cleared; never persisted. "No filter"
/// is represented as `Option::None` at call sites, not as a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationFilter {
    /// All points within `radius_km` of `center` (covers both "near me"
    /// and explicit radius selections).
    Radius {
        /// Display label (e.g. "Near Me").
        name: String,
        /// Center of the circle.
        center: Coordinate,
        /// Radius in kilometers.
        #[serde(rename = "radiusKm")]
        radius_km: f64,
    },
    /// All points inside a named district's rectangular bounds.
    District {
        /// Display label.
        name: String,
        /// District identifier to look up in the district registry.
        #[serde(rename = "districtId")]
        district_id: String,
    },
    /// All points inside an arbitrary polygon (≥3 vertices to be
    /// meaningful; fewer fails open at evaluation time).
    Polygon {
        /// Display label.
        name: String,
        /// Polygon vertices in order. The closing edge from last back to
        /// first vertex is implicit.
        vertices: Vec<Coordinate>,
    },
}

impl LocationFilter {
    /// Returns the display label for this filter.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Radius { name, .. } | Self::District { name, .. } | Self::Polygon { name, .. } => {
                name
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_containment_edges_inclusive() {
        let bounds = DistrictBounds {
            north: 40.720,
            south: 40.700,
            east: -73.980,
            west: -74.020,
        };
        assert!(bounds.contains(Coordinate { lat: 40.71, lng: -74.00 }));
        assert!(bounds.contains(Coordinate { lat: 40.700, lng: -74.020 }));
        assert!(!bounds.contains(Coordinate { lat: 40.75, lng: -74.00 }));
        assert!(!bounds.contains(Coordinate { lat: 40.71, lng: -73.90 }));
    }

    #[test]
    fn filter_serializes_with_type_tag() {
        let filter = LocationFilter::District {
            name: "Downtown".to_string(),
            district_id: "downtown".to_string(),
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["type"], "district");
        assert_eq!(json["districtId"], "downtown");

        let back: LocationFilter = serde_json::from_value(json).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn radius_filter_roundtrip() {
        let filter = LocationFilter::Radius {
            name: "Near Me".to_string(),
            center: Coordinate { lat: 40.7128, lng: -74.0060 },
            radius_km: 5.0,
        };
        let json = serde_json::to_string(&filter).unwrap();
        let back: LocationFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }
}
