//! Category label normalization.
//!
//! Report forms and imported feeds describe issues in free-form text
//! ("Street Light Out", "pot hole near 5th Ave"). This module maps those
//! labels onto the canonical [`IssueCategory`] taxonomy using keyword
//! matching, case-insensitively.

use crate::IssueCategory;

/// Attempts to map a raw category label to the canonical taxonomy.
///
/// An exact lowercase tag (`"pothole"`, `"road_damage"`) parses directly;
/// anything else falls back to keyword detection. Returns
/// [`IssueCategory::Other`] when no mapping can be determined.
#[must_use]
pub fn map_category_label(raw: &str) -> IssueCategory {
    let lower = raw.trim().to_lowercase();

    if let Ok(category) = lower.parse() {
        return category;
    }

    // ── Roads and sidewalks ─────────────────────────────────────────
    if contains_any(&lower, &["pothole", "pot hole"]) {
        return IssueCategory::Pothole;
    }
    if contains_any(&lower, &["sidewalk", "curb", "walkway"]) {
        return IssueCategory::SidewalkDamage;
    }
    if contains_any(
        &lower,
        &["road damage", "pavement", "road surface", "asphalt", "road crack"],
    ) {
        return IssueCategory::RoadDamage;
    }

    // ── Traffic infrastructure (check before the broader light/vehicle
    //    keywords) ─────────────────────────────────────────────────────
    if contains_any(&lower, &["traffic signal", "traffic light", "stoplight"]) {
        return IssueCategory::TrafficSignal;
    }
    if contains_any(&lower, &["streetlight", "street light", "lamp post", "lamppost"]) {
        return IssueCategory::StreetlightOutage;
    }
    if contains_any(&lower, &["abandoned vehicle", "abandoned car", "derelict vehicle"]) {
        return IssueCategory::AbandonedVehicle;
    }

    // ── Utilities ───────────────────────────────────────────────────
    if contains_any(&lower, &["power outage", "blackout", "no power", "power line"]) {
        return IssueCategory::PowerOutage;
    }
    if contains_any(
        &lower,
        &["water leak", "water main", "burst pipe", "hydrant", "leaking water"],
    ) {
        return IssueCategory::WaterLeak;
    }
    if contains_any(&lower, &["sewer", "sewage", "storm drain", "drainage"]) {
        return IssueCategory::SewerBackup;
    }

    // ── Sanitation ──────────────────────────────────────────────────
    if contains_any(
        &lower,
        &["missed collection", "trash pickup", "garbage", "recycling", "bin not"],
    ) {
        return IssueCategory::MissedCollection;
    }
    if contains_any(&lower, &["illegal dumping", "dumping", "dumped", "litter", "debris"]) {
        return IssueCategory::IllegalDumping;
    }

    // ── Parks and property ──────────────────────────────────────────
    if contains_any(&lower, &["graffiti", "tagging", "spray paint"]) {
        return IssueCategory::Graffiti;
    }
    if contains_any(&lower, &["fallen tree", "tree down", "downed tree", "branch", "limb"]) {
        return IssueCategory::FallenTree;
    }
    if contains_any(&lower, &["park", "playground", "trail", "bench"]) {
        return IssueCategory::ParkMaintenance;
    }

    // ── Nuisance ────────────────────────────────────────────────────
    if contains_any(&lower, &["noise", "loud music", "loud party"]) {
        return IssueCategory::NoiseComplaint;
    }

    IssueCategory::Other
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_canonical_tags() {
        assert_eq!(map_category_label("pothole"), IssueCategory::Pothole);
        assert_eq!(map_category_label("road_damage"), IssueCategory::RoadDamage);
        assert_eq!(map_category_label("power_outage"), IssueCategory::PowerOutage);
    }

    #[test]
    fn maps_form_labels() {
        assert_eq!(map_category_label("Pot Hole on 5th Ave"), IssueCategory::Pothole);
        assert_eq!(
            map_category_label("Street Light Out"),
            IssueCategory::StreetlightOutage
        );
        assert_eq!(
            map_category_label("Traffic light stuck on red"),
            IssueCategory::TrafficSignal
        );
        assert_eq!(map_category_label("water main break"), IssueCategory::WaterLeak);
        assert_eq!(
            map_category_label("Garbage not collected"),
            IssueCategory::MissedCollection
        );
        assert_eq!(map_category_label("TREE DOWN across road"), IssueCategory::FallenTree);
        assert_eq!(map_category_label("graffiti on wall"), IssueCategory::Graffiti);
    }

    #[test]
    fn specific_keywords_win_over_broad_ones() {
        // "traffic light" must not be swallowed by the streetlight rule.
        assert_eq!(map_category_label("broken traffic light"), IssueCategory::TrafficSignal);
        // A downed tree in a park is a tree issue, not general park upkeep.
        assert_eq!(
            map_category_label("fallen tree in Riverside park"),
            IssueCategory::FallenTree
        );
    }

    #[test]
    fn other_fallback() {
        assert_eq!(map_category_label("something unrecognizable"), IssueCategory::Other);
        assert_eq!(map_category_label(""), IssueCategory::Other);
    }
}
