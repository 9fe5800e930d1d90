//! Serialized shapes of a close approach result
//!
//! Field names and order are fixed; downstream consumers depend on them.

use serde::{Deserialize, Serialize};

use crate::database::ApproachView;
use crate::model::NearEarthObject;

use super::errors::{WriteError, WriteResult};

/// Column order of the CSV table
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// One flat CSV row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachRow {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: String,
    pub name: String,
    #[serde(with = "nan_token")]
    pub diameter_km: f64,
    #[serde(with = "title_case_bool")]
    pub potentially_hazardous: bool,
}

/// One element of the JSON array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachDocument {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoDocument,
}

/// NEO fields nested under `neo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoDocument {
    pub designation: String,
    pub name: String,
    #[serde(with = "nan_as_null")]
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

fn linked_neo<'a>(view: &ApproachView<'a>) -> WriteResult<&'a NearEarthObject> {
    view.neo().ok_or_else(|| WriteError::UnresolvedNeo {
        designation: view.designation().to_string(),
    })
}

impl ApproachRow {
    pub fn from_view(view: &ApproachView<'_>) -> WriteResult<Self> {
        let neo = linked_neo(view)?;
        Ok(Self {
            datetime_utc: view.time_str(),
            distance_au: view.distance(),
            velocity_km_s: view.velocity(),
            designation: neo.designation().to_string(),
            name: neo.name().unwrap_or_default().to_string(),
            diameter_km: neo.diameter(),
            potentially_hazardous: neo.hazardous(),
        })
    }
}

impl ApproachDocument {
    pub fn from_view(view: &ApproachView<'_>) -> WriteResult<Self> {
        let neo = linked_neo(view)?;
        Ok(Self {
            datetime_utc: view.time_str(),
            distance_au: view.distance(),
            velocity_km_s: view.velocity(),
            neo: NeoDocument {
                designation: neo.designation().to_string(),
                name: neo.name().unwrap_or_default().to_string(),
                diameter_km: neo.diameter(),
                potentially_hazardous: neo.hazardous(),
            },
        })
    }
}

/// Unknown diameter as the text token `nan`
mod nan_token {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("nan")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
            return Ok(f64::NAN);
        }
        raw.parse().map_err(de::Error::custom)
    }
}

/// Unknown diameter as JSON `null`
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// Booleans as `True` / `False`
mod title_case_bool {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim() {
            s if s.eq_ignore_ascii_case("true") => Ok(true),
            s if s.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(de::Error::custom(format!("invalid boolean '{}'", other))),
        }
    }
}
