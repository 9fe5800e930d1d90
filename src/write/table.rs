//! CSV table writer

use std::io::{Read, Write};

use crate::database::ApproachView;
use crate::filters::FilterResult;

use super::errors::WriteResult;
use super::records::{ApproachRow, CSV_FIELDS};

/// Writes a header row and one row per result. Returns the row count.
///
/// The header is written even when there are no results.
pub fn write_to_csv<'a, I, W>(results: I, writer: W) -> WriteResult<usize>
where
    I: IntoIterator<Item = FilterResult<ApproachView<'a>>>,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_FIELDS)?;

    let mut written = 0;
    for result in results {
        let row = ApproachRow::from_view(&result?)?;
        csv_writer.serialize(row)?;
        written += 1;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(written)
}

/// Parses a table produced by `write_to_csv`
pub fn read_csv_rows<R: Read>(reader: R) -> WriteResult<Vec<ApproachRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader
        .deserialize::<ApproachRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
