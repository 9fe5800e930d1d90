//! NEO catalog CSV loader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::model::{NearEarthObject, NeoRecord};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ExtractError, ExtractResult};

const REQUIRED_COLUMNS: [&str; 4] = ["pdes", "name", "pha", "diameter"];

/// Reads the NEO catalog CSV at `path`
pub fn load_neos(path: impl AsRef<Path>) -> ExtractResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    load_neos_from_reader(file)
}

/// Reads NEO catalog CSV from any reader.
///
/// Columns are matched by header name; unknown columns are ignored.
pub fn load_neos_from_reader<R: Read>(reader: R) -> ExtractResult<Vec<NearEarthObject>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ExtractError::MissingColumn(column.to_string()));
        }
    }

    let mut neos = Vec::new();
    for record in csv_reader.deserialize::<NeoRecord>() {
        neos.push(record?.into_neo());
    }

    log_event_with_fields(Event::NeosLoaded, &[("count", &neos.len().to_string())]);

    Ok(neos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
id,spkid,full_name,pdes,name,pha,diameter,albedo
a0000433,2000433,433 Eros (A898 PA),433,Eros,N,16.84,0.25
bK20A00B,54000001,(2020 AB),2020 AB,,Y,,
";

    #[test]
    fn test_loads_and_normalizes() {
        let neos = load_neos_from_reader(CATALOG.as_bytes()).unwrap();
        assert_eq!(neos.len(), 2);

        assert_eq!(neos[0].designation(), "433");
        assert_eq!(neos[0].name(), Some("Eros"));
        assert_eq!(neos[0].diameter(), 16.84);
        assert!(!neos[0].hazardous());

        assert_eq!(neos[1].designation(), "2020 AB");
        assert_eq!(neos[1].name(), None);
        assert!(neos[1].diameter().is_nan());
        assert!(neos[1].hazardous());
    }

    #[test]
    fn test_missing_column() {
        let err = load_neos_from_reader("pdes,name,pha\n433,Eros,N\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingColumn(ref c) if c == "diameter"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_neos("/nonexistent/neos.csv").unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
