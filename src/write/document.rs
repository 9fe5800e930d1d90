//! JSON document writer

use std::io::{Read, Write};

use serde::ser::{SerializeSeq, Serializer as _};

use crate::database::ApproachView;
use crate::filters::FilterResult;

use super::errors::WriteResult;
use super::records::ApproachDocument;

/// Writes a pretty-printed JSON array, one object per result.
///
/// Elements are serialized as they are pulled, so the results are never
/// collected in memory. Returns the element count.
pub fn write_to_json<'a, I, W>(results: I, writer: W) -> WriteResult<usize>
where
    I: IntoIterator<Item = FilterResult<ApproachView<'a>>>,
    W: Write,
{
    let mut serializer = serde_json::Serializer::pretty(writer);
    let mut seq = serializer.serialize_seq(None)?;

    let mut written = 0;
    for result in results {
        let document = ApproachDocument::from_view(&result?)?;
        seq.serialize_element(&document)?;
        written += 1;
    }

    seq.end()?;
    serializer
        .into_inner()
        .flush()
        .map_err(serde_json::Error::io)?;
    Ok(written)
}

/// Parses a document produced by `write_to_json`
pub fn read_json_documents<R: Read>(reader: R) -> WriteResult<Vec<ApproachDocument>> {
    Ok(serde_json::from_reader(reader)?)
}
