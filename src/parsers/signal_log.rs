//! Data/clock signal log parser.
//!
//! Each meaningful line has the form `<HH:MM:SS[.fff]> -> <data> <clock>`.
//! Blank lines and lines without `->` are noise. Lines that carry the
//! separator but fail to parse are dropped and parsing continues, so a capture
//! truncated mid-line still loads.

use std::fs;
use std::path::Path;

use super::timestamp::to_seconds;
use super::types::{LogRecord, ParsedLog};
use crate::error::LoadError;

/// Separator between the timestamp and the bit pair
pub const SEPARATOR: &str = "->";

impl LogRecord {
    /// Parse one line into a record, `None` for noise and malformed lines
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let (time_part, bits_part) = line.split_once(SEPARATOR)?;

        let mut bits = bits_part.split_whitespace();
        let data_bit = parse_bit(bits.next()?)?;
        let clock_bit = parse_bit(bits.next()?)?;
        if bits.next().is_some() {
            return None;
        }

        let timestamp = to_seconds(time_part)?;

        Some(Self {
            timestamp,
            data_bit,
            clock_bit,
        })
    }
}

/// Integer token restricted to a single binary level
fn parse_bit(token: &str) -> Option<u8> {
    match token.parse::<u8>().ok()? {
        bit @ (0 | 1) => Some(bit),
        _ => None,
    }
}

/// Signal log parser
pub struct SignalLog;

impl SignalLog {
    /// Parse log text. Never fails: an input with no valid lines gives an
    /// empty log.
    pub fn parse(contents: &str) -> ParsedLog {
        let mut skipped = 0usize;

        let log: ParsedLog = contents
            .lines()
            .filter_map(|line| {
                let record = LogRecord::from_line(line);
                if record.is_none() && line.contains(SEPARATOR) {
                    skipped += 1;
                }
                record
            })
            .collect();

        tracing::info!("Parsed signal log: {} records", log.len());
        if skipped > 0 {
            tracing::debug!("Discarded {} malformed lines", skipped);
        }

        log
    }

    /// Read and parse a log file. Only I/O failures are errors.
    pub fn parse_file(path: &Path) -> Result<ParsedLog, LoadError> {
        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }
}
