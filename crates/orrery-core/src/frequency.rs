//! CPU clock-frequency samples
//!
//! Reads the whitespace-delimited `(year, MHz)` history file: two numeric
//! columns per line. Blank lines are skipped; anything else is rejected
//! with its line number.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{OrreryError, Result};

/// One clock-speed measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockSample {
    /// Release year (fractional years allowed)
    pub year: f64,

    /// Clock rate in MHz
    pub megahertz: f64,
}

/// Parse samples from file contents, preserving row order
pub fn parse_clock_samples(contents: &str) -> Result<Vec<ClockSample>> {
    let mut samples = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(OrreryError::malformed(
                line_number,
                format!("expected two columns, found {}", fields.len()),
            ));
        }

        let year: f64 = fields[0].parse().map_err(|_| {
            OrreryError::malformed(line_number, format!("invalid year: {}", fields[0]))
        })?;
        let megahertz: f64 = fields[1].parse().map_err(|_| {
            OrreryError::malformed(line_number, format!("invalid clock rate: {}", fields[1]))
        })?;

        samples.push(ClockSample { year, megahertz });
    }

    Ok(samples)
}

/// Read and parse a clock-frequency file
pub fn load_clock_samples(path: &Path) -> Result<Vec<ClockSample>> {
    let contents = fs::read_to_string(path)?;
    parse_clock_samples(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_preserves_row_order() {
        let samples = parse_clock_samples("2000 1500\n1971 0.74\n").unwrap();
        assert_eq!(
            samples,
            vec![
                ClockSample {
                    year: 2000.0,
                    megahertz: 1500.0
                },
                ClockSample {
                    year: 1971.0,
                    megahertz: 0.74
                },
            ]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let samples = parse_clock_samples("1971 0.74\n\n   \n1974 2\n").unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_column_count() {
        let err = parse_clock_samples("1971 0.74\n1974 2 fast\n").unwrap_err();
        match err {
            OrreryError::MalformedSample { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let err = parse_clock_samples("about 0.74\n").unwrap_err();
        match err {
            OrreryError::MalformedSample { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("about"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1970 1").unwrap();
        writeln!(file, "1980 10").unwrap();

        let samples = load_clock_samples(file.path()).unwrap();
        assert_eq!(
            samples,
            vec![
                ClockSample {
                    year: 1970.0,
                    megahertz: 1.0
                },
                ClockSample {
                    year: 1980.0,
                    megahertz: 10.0
                },
            ]
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_clock_samples(Path::new("/nonexistent/frequency.dat")).unwrap_err();
        assert!(matches!(err, OrreryError::Io(_)));
    }
}
