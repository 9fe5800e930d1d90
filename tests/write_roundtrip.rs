//! Result Writer Tests
//!
//! Tests for CSV and JSON output of query results:
//! - Written rows parse back to the same values
//! - Unknown diameters survive as NaN
//! - Output format follows the file extension
//! - Filter errors abort the write

use std::fs::File;
use std::path::PathBuf;

use neodb::database::NeoDatabase;
use neodb::extract::{load_approaches, load_neos};
use neodb::filters::{create_filters, AttributeFilter, ComparisonOp, Criteria, Filter};
use neodb::query::limit;
use neodb::write::{
    read_csv_rows, read_json_documents, write_results, write_to_csv, write_to_json, WriteError,
};
use tempfile::tempdir;

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture_db() -> NeoDatabase {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data");
    let neos = load_neos(data.join("test-neos-2020.csv")).unwrap();
    let approaches = load_approaches(data.join("test-cad-2020.json")).unwrap();
    NeoDatabase::new(neos, approaches)
}

/// Everything except the approach with no catalog entry
fn resolved_filters() -> Vec<Filter> {
    create_filters(&Criteria::new().with_velocity(Some(4.0), None))
}

// =============================================================================
// CSV Tests
// =============================================================================

/// CSV rows read back with the values that were written.
#[test]
fn test_csv_roundtrip() {
    let db = fixture_db();
    let filters = resolved_filters();

    let mut buf = Vec::new();
    let written = write_to_csv(db.query(&filters), &mut buf).unwrap();
    assert_eq!(written, 7);

    let rows = read_csv_rows(buf.as_slice()).unwrap();
    assert_eq!(rows.len(), 7);

    for (row, view) in rows.iter().zip(db.query(&filters)) {
        let view = view.unwrap();
        let neo = view.neo().unwrap();
        assert_eq!(row.datetime_utc, view.time_str());
        assert_eq!(row.distance_au, view.distance());
        assert_eq!(row.velocity_km_s, view.velocity());
        assert_eq!(row.designation, neo.designation());
        assert_eq!(row.name, neo.name().unwrap_or(""));
        assert_eq!(row.potentially_hazardous, neo.hazardous());
        if neo.diameter().is_nan() {
            assert!(row.diameter_km.is_nan());
        } else {
            assert_eq!(row.diameter_km, neo.diameter());
        }
    }
}

/// Unknown diameter is written as a literal `nan` token.
#[test]
fn test_csv_nan_token() {
    let db = fixture_db();
    let filters = create_filters(&Criteria::new().with_hazardous(true).with_velocity(None, Some(20.0)));

    let mut buf = Vec::new();
    write_to_csv(db.query(&filters), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.contains("2020-01-11 14:03,0.0432,18.33,2019 SN9,,nan,True"));
}

// =============================================================================
// JSON Tests
// =============================================================================

/// JSON documents read back with NEO fields nested.
#[test]
fn test_json_roundtrip() {
    let db = fixture_db();
    let filters = resolved_filters();

    let mut buf = Vec::new();
    write_to_json(db.query(&filters), &mut buf).unwrap();

    let documents = read_json_documents(buf.as_slice()).unwrap();
    assert_eq!(documents.len(), 7);

    let eros = &documents[1];
    assert_eq!(eros.datetime_utc, "2020-01-01 17:12");
    assert_eq!(eros.neo.designation, "433");
    assert_eq!(eros.neo.name, "Eros");
    assert_eq!(eros.neo.diameter_km, 16.84);
    assert!(!eros.neo.potentially_hazardous);

    let unnamed = &documents[0];
    assert_eq!(unnamed.neo.designation, "2020 AB");
    assert_eq!(unnamed.neo.name, "");
    assert!(unnamed.neo.diameter_km.is_nan());
}

// =============================================================================
// File Output Tests
// =============================================================================

/// Extension selects the format; limit caps what is written.
#[test]
fn test_write_results_to_files() {
    let dir = tempdir().unwrap();
    let db = fixture_db();
    let filters = resolved_filters();

    let csv_path = dir.path().join("results.csv");
    let written = write_results(limit(db.query(&filters), Some(3)), &csv_path).unwrap();
    assert_eq!(written, 3);
    assert_eq!(read_csv_rows(File::open(&csv_path).unwrap()).unwrap().len(), 3);

    let json_path = dir.path().join("results.json");
    let written = write_results(db.query(&filters), &json_path).unwrap();
    assert_eq!(written, 7);
    assert_eq!(
        read_json_documents(File::open(&json_path).unwrap()).unwrap().len(),
        7
    );
}

/// Unknown extensions are rejected before anything is created.
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let db = fixture_db();
    let filters: Vec<Filter> = Vec::new();
    let path = dir.path().join("results.txt");

    let err = write_results(db.query(&filters), &path).unwrap_err();
    assert!(matches!(err, WriteError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

/// An approach with no linked NEO cannot be written.
#[test]
fn test_unresolved_neo_aborts_write() {
    let db = fixture_db();
    let filters: Vec<Filter> = Vec::new();

    let err = write_to_json(db.query(&filters), Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, WriteError::UnresolvedNeo { ref designation } if designation == "999999"));
}

/// A failed write leaves neither the output nor its staging file behind.
#[test]
fn test_failed_write_leaves_no_file() {
    let dir = tempdir().unwrap();
    let db = fixture_db();
    let filters: Vec<Filter> = Vec::new();

    for name in ["results.json", "results.csv"] {
        let path = dir.path().join(name);
        let err = write_results(db.query(&filters), &path).unwrap_err();
        assert!(matches!(err, WriteError::UnresolvedNeo { .. }));
        assert!(!path.exists());
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// A failed write keeps the previous contents of the output path.
#[test]
fn test_failed_write_preserves_existing_file() {
    let dir = tempdir().unwrap();
    let db = fixture_db();
    let path = dir.path().join("results.json");

    let written = write_results(db.query(&resolved_filters()), &path).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let everything: Vec<Filter> = Vec::new();
    assert!(write_results(db.query(&everything), &path).is_err());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert_eq!(read_json_documents(before.as_bytes()).unwrap().len(), written);
}

/// Filter that never overrides key extraction
struct OrbitIdFilter;

impl AttributeFilter for OrbitIdFilter {
    type Value = u32;

    fn op(&self) -> ComparisonOp {
        ComparisonOp::Eq
    }

    fn value(&self) -> &u32 {
        &1
    }

    fn name(&self) -> &'static str {
        "OrbitIdFilter"
    }
}

/// A filter error propagates out of the writer.
#[test]
fn test_filter_error_aborts_write() {
    let db = fixture_db();
    let filters = [OrbitIdFilter];

    let err = write_to_csv(db.query(&filters), Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, WriteError::Filter(ref e) if e.criterion() == "OrbitIdFilter"));
}
