//! Record-oriented decoding of the raw corpus exports
//!
//! The exports are headerless UTF-8 TSV. Quoting is disabled so that quote
//! characters inside sentence text pass through untouched, and every field is
//! trimmed independently: the files carry inconsistent trailing whitespace,
//! so trimming the line as a whole would not be enough.

use crate::{errors::CorpusError, Result};
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use std::{fs::File, path::Path};

/// Open one corpus export for record-by-record reading
///
/// `fields` is the exact number of tab-separated fields every record must
/// have; a record with any other field count is a data-integrity failure,
/// reported with its line number.
pub fn open(path: &Path, fields: usize) -> Result<Records> {
    let file =
        File::open(path).with_context(|| format!("opening corpus export {}", path.display()))?;
    let reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);
    Ok(Records {
        inner: reader.into_records(),
        path: path.into(),
        fields,
    })
}

/// Validated records of one corpus export
pub struct Records {
    /// Underlying TSV record reader
    inner: StringRecordsIntoIter<File>,

    /// Export being read, for error reporting
    path: Box<Path>,

    /// Exact field count every record must have
    fields: usize,
}
//
impl Iterator for Records {
    type Item = Result<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.inner.next()? {
            Ok(record) => record,
            Err(e) => {
                return Some(
                    Err(e).with_context(|| format!("decoding {}", self.path.display())),
                )
            }
        };
        if record.len() != self.fields {
            let line = record.position().map(|position| position.line()).unwrap_or(0);
            return Some(Err(CorpusError::MalformedRecord {
                path: self.path.to_path_buf(),
                line,
                expected: self.fields,
                found: record.len(),
            }
            .into()));
        }
        Some(Ok(record))
    }
}
