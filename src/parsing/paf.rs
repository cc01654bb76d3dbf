//! Parser for PAF (Pairwise mApping Format) alignments.
//!
//! Only the twelve mandatory columns are read; the first nine are used:
//!
//! | Column | Field | Notes |
//! |--------|-------|-------|
//! | 1 | Query name | Template read |
//! | 2 | Query length | |
//! | 3 | Query start | 0-based |
//! | 4 | Query end | Exclusive, converted to inclusive |
//! | 5 | Strand | `+` or `-` |
//! | 6 | Target name | Supporting read |
//! | 7 | Target length | |
//! | 8 | Target start | 0-based |
//! | 9 | Target end | Exclusive, converted to inclusive |

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::core::{Alignment, Strand};
use crate::utils::validation::{check_record_limit, MAX_RECORDS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// Parse a PAF file, plain or gzip compressed (`.gz`)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// if a line is malformed, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_paf_file(path: &Path) -> Result<Vec<Alignment>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        parse_paf_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_paf_reader(BufReader::new(file))
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse PAF records from any buffered reader
///
/// # Errors
///
/// See [`parse_paf_file`].
pub fn parse_paf_reader<R: BufRead>(reader: R) -> Result<Vec<Alignment>, ParseError> {
    let mut alignments = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if check_record_limit(alignments.len()).is_some() {
            return Err(ParseError::TooManyRecords(alignments.len()));
        }

        // Line numbers in errors are 1-based for user friendliness
        alignments.push(parse_paf_line(line, i + 1)?);
    }

    Ok(alignments)
}

/// Parse PAF text held in memory
///
/// # Errors
///
/// See [`parse_paf_file`].
pub fn parse_paf_text(text: &str) -> Result<Vec<Alignment>, ParseError> {
    parse_paf_reader(text.as_bytes())
}

fn parse_paf_line(line: &str, line_num: usize) -> Result<Alignment, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 12 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has {} fields, expected at least 12",
            fields.len()
        )));
    }

    let number = |idx: usize, what: &str| -> Result<usize, ParseError> {
        fields[idx].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {what} on line {line_num}: '{}'",
                fields[idx]
            ))
        })
    };

    let q_length = number(1, "query length")?;
    let q_start = number(2, "query start")?;
    let q_end_exclusive = number(3, "query end")?;
    let strand = Strand::parse(fields[4]).ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Invalid strand on line {line_num}: '{}'",
            fields[4]
        ))
    })?;
    let t_length = number(6, "target length")?;
    let t_start = number(7, "target start")?;
    let t_end_exclusive = number(8, "target end")?;

    if q_end_exclusive <= q_start || t_end_exclusive <= t_start {
        return Err(ParseError::InvalidFormat(format!(
            "Empty alignment on line {line_num}"
        )));
    }

    let alignment = Alignment::new(
        fields[0],
        q_start,
        q_end_exclusive - 1,
        q_length,
        fields[5],
        t_start,
        t_end_exclusive - 1,
        t_length,
    )
    .with_strand(strand);

    if !alignment.is_consistent() {
        return Err(ParseError::InvalidFormat(format!(
            "Coordinates out of range on line {line_num}"
        )));
    }

    Ok(alignment)
}
