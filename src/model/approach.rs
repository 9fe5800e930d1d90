//! Close approach records

use chrono::NaiveDateTime;

use super::neo::NeoId;
use super::time::datetime_to_str;

/// Arena handle of a `CloseApproach` inside a `NeoDatabase`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    /// Position of the approach in the database's canonical order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A close approach to Earth by an NEO.
///
/// Holds the UTC time of closest approach, the nominal distance in
/// astronomical units and the relative velocity in km/s.
///
/// The NEO's designation is kept as the join key. Once the
/// database has linked the approach, `neo()` returns the owning NEO's
/// handle; it stays `None` when no NEO carries that designation.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Approach time rendered as `YYYY-MM-DD hh:mm`
    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }

    /// Nominal approach distance (au)
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity (km/s)
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Handle of the linked NEO, if the join succeeded
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Designation of the approaching NEO, used as the join key
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub(crate) fn link(&mut self, neo: Option<NeoId>) {
        self.neo = neo;
    }
}
