//! Near-Earth object records

use std::fmt;

use serde::Deserialize;

use super::approach::ApproachId;

/// Arena handle of a `NearEarthObject` inside a `NeoDatabase`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Position of the NEO in the database's NEO collection
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A near-Earth object (NEO).
///
/// Carries the primary designation (required, unique), the IAU name
/// (optional), the diameter in kilometers and the potentially-hazardous
/// flag.
///
/// An unknown diameter is stored as `f64::NAN`, not as an absent value.
/// Every comparison against NaN is false, so range filters on diameter
/// never match an NEO of unknown size.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates an NEO with no name, unknown diameter and not hazardous.
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            name: None,
            diameter: f64::NAN,
            hazardous: false,
            approaches: Vec::new(),
        }
    }

    /// Sets the name. An empty name normalizes to absent.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Sets the diameter in kilometers (NaN when unknown)
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the potentially-hazardous flag
    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Handles of this NEO's close approaches, in database order
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// `designation` alone, or `designation-name` when a name is present
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{}-{}", self.designation, name),
            None => self.designation.clone(),
        }
    }

    pub(crate) fn push_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }

    pub(crate) fn clear_approaches(&mut self) {
        self.approaches.clear();
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diameter = if self.diameter.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.3}", self.diameter)
        };
        write!(
            f,
            "NEO {} has a diameter of {} km and {} potentially hazardous",
            self.fullname(),
            diameter,
            if self.hazardous { "is" } else { "is not" }
        )
    }
}

/// A raw NEO row as read from the NEO catalog, before normalization.
///
/// Column names follow the NASA small-body CSV export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoRecord {
    #[serde(rename = "pdes", default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub diameter: Option<String>,
    #[serde(rename = "pha", default)]
    pub hazardous: Option<String>,
}

impl NeoRecord {
    /// Normalizes the raw row into a `NearEarthObject`.
    ///
    /// Never fails:
    /// - missing designation becomes `""`; a present one is kept verbatim
    ///   since it is the exact-match join key
    /// - missing or empty name becomes absent
    /// - missing or unparseable diameter becomes NaN
    /// - hazardous is true only for `Y` or `true` (any case)
    pub fn into_neo(self) -> NearEarthObject {
        let designation = self.designation.unwrap_or_default();

        let diameter = self
            .diameter
            .as_deref()
            .and_then(|d| d.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);

        let hazardous = self
            .hazardous
            .as_deref()
            .map(parse_hazard_flag)
            .unwrap_or(false);

        let neo = NearEarthObject::new(designation)
            .with_diameter(diameter)
            .with_hazardous(hazardous);

        match self.name {
            Some(name) => neo.with_name(name),
            None => neo,
        }
    }
}

fn parse_hazard_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "Y" || raw.eq_ignore_ascii_case("true")
}
