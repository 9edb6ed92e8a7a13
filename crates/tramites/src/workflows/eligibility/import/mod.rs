mod parser;

use std::io::Read;
use std::path::Path;

use super::domain::LeaveInterval;

/// Errors raised while ingesting a bulk leave capture.
#[derive(Debug, thiserror::Error)]
pub enum LeaveImportError {
    #[error("failed to read leave export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid leave CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: both dates must be valid YYYY-MM-DD values")]
    MalformedInterval { line: u64 },
    #[error("line {line}: the end date cannot precede the start date")]
    InvertedInterval { line: u64 },
}

/// Reads a `inicio,fin` CSV export into a leave collection.
///
/// The capture-form rules apply at this boundary: every row needs two
/// parseable dates in chronological order. The evaluator itself stays
/// lenient; rejection happens only here.
pub struct LeaveCsvImporter;

impl LeaveCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeaveInterval>, LeaveImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LeaveInterval>, LeaveImportError> {
        let mut leaves = Vec::new();

        for record in parser::parse_records(reader)? {
            let (start_date, end_date) = match (record.start_date, record.end_date) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(LeaveImportError::MalformedInterval { line: record.line }),
            };
            if end_date < start_date {
                return Err(LeaveImportError::InvertedInterval { line: record.line });
            }

            leaves.push(LeaveInterval {
                start: record.start,
                end: record.end,
            });
        }

        // ISO strings order lexicographically, so this is chronological.
        leaves.sort_by(|a, b| a.start.cmp(&b.start));
        Ok(leaves)
    }
}
