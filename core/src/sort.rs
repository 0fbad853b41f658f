//! Client-side ordering of activity lists.

use std::cmp::Ordering;

use crate::types::Activity;

/// Field an activity list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySortKey {
    Type,
    Location,
    Distance,
}

impl ActivitySortKey {
    /// Recognises `type`, `location` and `distance`. Anything else is `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "type" => Some(ActivitySortKey::Type),
            "location" => Some(ActivitySortKey::Location),
            "distance" => Some(ActivitySortKey::Distance),
            _ => None,
        }
    }

    pub fn compare(&self, a: &Activity, b: &Activity) -> Ordering {
        match self {
            ActivitySortKey::Type => a.kind.cmp(&b.kind),
            ActivitySortKey::Location => a.location.cmp(&b.location),
            ActivitySortKey::Distance => a.distance.total_cmp(&b.distance),
        }
    }
}

/// Stable ascending sort by `sort_by`. An unrecognised key leaves the slice
/// untouched.
pub fn sort_activities(activities: &mut [Activity], sort_by: &str) {
    if let Some(key) = ActivitySortKey::parse(sort_by) {
        activities.sort_by(|a, b| key.compare(a, b));
    }
}
