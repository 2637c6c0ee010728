#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Civic routing utilities.
//!
//! Pure computation consumed by report intake and list views:
//!
//! - **Department assignment**: map an issue category to the department
//!   responsible for it ([`assign_department`]).
//! - **Distance**: great-circle distance between two coordinates
//!   ([`distance_km`]).
//! - **Geofencing**: decide whether a coordinate falls inside a location
//!   filter ([`is_within_filter`]).
//!
//! Every function here is total: no I/O, no errors raised, deterministic
//! output for any input. Malformed or missing filter data fails open
//! (admits everything) so a broken filter never silently hides reports.

mod assign;
mod distance;
mod geofence;

pub use assign::{assign_department, assign_department_for_label};
pub use distance::distance_km;
pub use geofence::{is_within_filter, point_in_polygon, report_matches_filter};
