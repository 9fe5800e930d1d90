//! Result writers
//!
//! Two output formats, with the same fields:
//!
//! - CSV: `datetime_utc, distance_au, velocity_km_s, designation, name,
//!   diameter_km, potentially_hazardous`
//! - JSON: array of objects, NEO fields nested under `neo`
//!
//! Absent names are written as `""`. Unknown diameters are `nan` in CSV
//! and `null` in JSON. Writers consume query results lazily.

mod document;
mod errors;
mod records;
mod table;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::database::ApproachView;
use crate::filters::FilterResult;
use crate::observability::{log_event_with_fields, Event};

pub use document::{read_json_documents, write_to_json};
pub use errors::{WriteError, WriteResult};
pub use records::{ApproachDocument, ApproachRow, NeoDocument, CSV_FIELDS};
pub use table::{read_csv_rows, write_to_csv};

/// Output format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> WriteResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(OutputFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(OutputFormat::Json),
            _ => Err(WriteError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Writes results to `path` in the format named by its extension.
///
/// Output is staged in a sibling `<path>.tmp` file and renamed over `path`
/// only after every result is written and flushed. On error the staging
/// file is removed and `path` is left untouched.
pub fn write_results<'a, I>(results: I, path: &Path) -> WriteResult<usize>
where
    I: IntoIterator<Item = FilterResult<ApproachView<'a>>>,
{
    let format = OutputFormat::from_path(path)?;
    let staging = staging_path(path);
    let file = File::create(&staging).map_err(|source| WriteError::Io {
        path: staging.clone(),
        source,
    })?;
    let writer = BufWriter::new(file);

    let outcome = match format {
        OutputFormat::Csv => write_to_csv(results, writer),
        OutputFormat::Json => write_to_json(results, writer),
    };
    let written = match outcome {
        Ok(written) => written,
        Err(e) => {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
    };

    fs::rename(&staging, path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    log_event_with_fields(
        Event::ResultsWritten,
        &[
            ("path", &path.display().to_string()),
            ("count", &written.to_string()),
        ],
    );

    Ok(written)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::database::NeoDatabase;
    use crate::model::{cd_to_datetime, CloseApproach, NearEarthObject};

    fn db() -> NeoDatabase {
        NeoDatabase::new(
            vec![
                NearEarthObject::new("433").with_name("Eros").with_diameter(16.84),
                NearEarthObject::new("2020 AB").with_hazardous(true),
            ],
            vec![
                CloseApproach::new("433", cd_to_datetime("2020-Jan-01 00:00").unwrap(), 0.15, 5.2),
                CloseApproach::new("2020 AB", cd_to_datetime("2020-Feb-29 13:45").unwrap(), 0.02, 12.0),
            ],
        )
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")).unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out.JSON")).unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_path(Path::new("out.txt")).is_err());
        assert!(OutputFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_csv_layout() {
        let db = db();
        let mut buf = Vec::new();
        let written = write_to_csv(db.approaches().map(Ok), &mut buf).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
        );
        assert_eq!(lines[1], "2020-01-01 00:00,0.15,5.2,433,Eros,16.84,False");
        assert_eq!(lines[2], "2020-02-29 13:45,0.02,12.0,2020 AB,,nan,True");
    }

    #[test]
    fn test_csv_header_without_results() {
        let mut buf = Vec::new();
        let written = write_to_csv(std::iter::empty(), &mut buf).unwrap();
        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_json_layout() {
        let db = db();
        let mut buf = Vec::new();
        write_to_json(db.approaches().map(Ok), &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let first = &value[0];
        assert_eq!(first["datetime_utc"], "2020-01-01 00:00");
        assert_eq!(first["distance_au"], 0.15);
        assert_eq!(first["neo"]["designation"], "433");
        assert_eq!(first["neo"]["name"], "Eros");
        assert_eq!(first["neo"]["potentially_hazardous"], false);

        let second = &value[1];
        assert_eq!(second["neo"]["name"], "");
        assert!(second["neo"]["diameter_km"].is_null());
    }

    #[test]
    fn test_json_empty_array() {
        let mut buf = Vec::new();
        write_to_json(std::iter::empty(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    /// Accepts nothing; every write fails
    struct FullDisk;

    impl io::Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_flush_failure_is_reported() {
        let db = db();
        let err = write_to_json(db.approaches().map(Ok), BufWriter::new(FullDisk)).unwrap_err();
        assert!(matches!(err, WriteError::Json(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_csv_flush_failure_is_reported() {
        let db = db();
        let err = write_to_csv(db.approaches().map(Ok), BufWriter::new(FullDisk)).unwrap_err();
        assert!(matches!(err, WriteError::Csv(_)));
    }

    #[test]
    fn test_staging_path_is_sibling() {
        assert_eq!(
            staging_path(Path::new("out/results.json")),
            PathBuf::from("out/results.json.tmp")
        );
    }

    #[test]
    fn test_unresolved_neo_is_an_error() {
        let db = NeoDatabase::new(
            Vec::new(),
            vec![CloseApproach::new("999", cd_to_datetime("2020-Jan-01 00:00").unwrap(), 0.1, 1.0)],
        );
        let err = write_to_csv(db.approaches().map(Ok), Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, WriteError::UnresolvedNeo { ref designation } if designation == "999"));
    }
}
