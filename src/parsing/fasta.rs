//! Load read sequences from FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files. Sequences are
//! upper-cased so that k-mer lookups match regardless of input case.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::SequenceStore;
use crate::parsing::paf::{is_gzipped, ParseError};
use crate::utils::validation::check_record_limit;

/// Parse a FASTA file into a sequence store keyed by record name.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no sequences are found, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn load_sequences(path: &Path) -> Result<SequenceStore, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(GzDecoder::new(file)));
        parse_fasta_reader(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        parse_fasta_reader(&mut reader)
    }
}

/// Parse FASTA text held in memory
///
/// # Errors
///
/// See [`load_sequences`].
pub fn parse_fasta_text(text: &str) -> Result<SequenceStore, ParseError> {
    let mut reader = fasta::io::Reader::new(text.as_bytes());
    parse_fasta_reader(&mut reader)
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<SequenceStore, ParseError> {
    let mut store = SequenceStore::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_record_limit(store.len()).is_some() {
            return Err(ParseError::TooManyRecords(store.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence: String = record
            .sequence()
            .as_ref()
            .iter()
            .map(|&b| char::from(b.to_ascii_uppercase()))
            .collect();

        store.insert(name, sequence);
    }

    if store.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(store)
}

/// Sequences of a FASTA file in file order, for callers that need the records
/// themselves rather than a name lookup (e.g. k-mer counting over a pile).
///
/// # Errors
///
/// See [`load_sequences`].
pub fn load_sequence_list(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    let mut reader = fasta::io::Reader::new(reader);

    let mut sequences = Vec::new();
    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_record_limit(sequences.len()).is_some() {
            return Err(ParseError::TooManyRecords(sequences.len()));
        }

        sequences.push(
            String::from_utf8_lossy(record.sequence().as_ref()).to_ascii_uppercase(),
        );
    }

    if sequences.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(sequences)
}
