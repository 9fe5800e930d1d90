//! Close approach JSON loader
//!
//! The NASA close approach API returns
//! `{"fields": ["des", "orbit_id", "jd", "cd", "dist", ...], "data": [[...], ...]}`.
//! Columns are located through `fields`, not by fixed position.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{cd_to_datetime, CloseApproach};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ExtractError, ExtractResult};

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// A raw close approach row, before parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApproachRecord {
    pub designation: String,
    pub time: String,
    pub distance: String,
    pub velocity: String,
}

impl ApproachRecord {
    /// Parses the required fields; `row` is used for error context only
    pub fn into_approach(self, row: usize) -> ExtractResult<CloseApproach> {
        let time = cd_to_datetime(&self.time).ok_or_else(|| ExtractError::InvalidField {
            row,
            field: "cd",
            value: self.time.clone(),
        })?;
        let distance = parse_float(row, "dist", &self.distance)?;
        let velocity = parse_float(row, "v_rel", &self.velocity)?;

        Ok(CloseApproach::new(self.designation, time, distance, velocity))
    }
}

fn parse_float(row: usize, field: &'static str, raw: &str) -> ExtractResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidField {
            row,
            field,
            value: raw.to_string(),
        })
}

struct Columns {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl Columns {
    fn locate(fields: &[String]) -> ExtractResult<Self> {
        let find = |name: &str| {
            fields
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| ExtractError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            designation: find("des")?,
            time: find("cd")?,
            distance: find("dist")?,
            velocity: find("v_rel")?,
        })
    }

    fn record(&self, row: &[Value]) -> ApproachRecord {
        ApproachRecord {
            designation: cell(row, self.designation),
            time: cell(row, self.time),
            distance: cell(row, self.distance),
            velocity: cell(row, self.velocity),
        }
    }
}

/// Cell text; numbers are rendered, null and missing cells are empty
fn cell(row: &[Value], index: usize) -> String {
    match row.get(index) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Reads the close approach JSON document at `path`
pub fn load_approaches(path: impl AsRef<Path>) -> ExtractResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    load_approaches_from_reader(BufReader::new(file))
}

/// Reads a close approach JSON document from any reader
pub fn load_approaches_from_reader<R: Read>(reader: R) -> ExtractResult<Vec<CloseApproach>> {
    let document: CadDocument = serde_json::from_reader(reader)?;
    let columns = Columns::locate(&document.fields)?;

    let approaches = document
        .data
        .iter()
        .enumerate()
        .map(|(row, values)| columns.record(values).into_approach(row))
        .collect::<ExtractResult<Vec<_>>>()?;

    log_event_with_fields(
        Event::ApproachesLoaded,
        &[("count", &approaches.len().to_string())],
    );

    Ok(approaches)
}
