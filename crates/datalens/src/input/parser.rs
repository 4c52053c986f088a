//! CSV/TSV ingestion with delimiter detection and value coercion.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{DataLensError, Result};

use super::dataset::{Dataset, Row};
use super::source::SourceMetadata;
use super::value::Value;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text into a typed [`Dataset`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();
        let io_err = |source| DataLensError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let size_bytes = file.metadata().map_err(io_err)?.len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = self.resolve_delimiter(&contents)?;
        let dataset = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, metadata))
    }

    /// Parse in-memory text.
    pub fn parse_str(&self, text: &str) -> Result<Dataset> {
        let bytes = text.as_bytes();
        let delimiter = self.resolve_delimiter(bytes)?;
        self.parse_bytes(bytes, delimiter)
    }

    fn resolve_delimiter(&self, bytes: &[u8]) -> Result<u8> {
        match self.config.delimiter {
            Some(d) if d == self.config.quote || d == b'\n' || d == b'\r' => Err(
                DataLensError::InvalidDelimiter(format!("{:?}", d as char)),
            ),
            Some(d) => Ok(d),
            None => detect_delimiter(bytes),
        }
    }

    /// Parse bytes with a known delimiter.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let records = reader
            .records()
            .take(limit)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            let width = records.iter().map(|r| r.len()).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(DataLensError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::with_capacity(records.len());

        for (line, record) in records.iter().enumerate() {
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            if record.len() != expected_cols {
                warn!(
                    "Record {} has {} fields, expected {}; {}",
                    line + 1,
                    record.len(),
                    expected_cols,
                    if record.len() < expected_cols { "padding" } else { "truncating" }
                );
            }

            let cells: IndexMap<String, Value> = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = record.get(i).map(Value::coerce).unwrap_or(Value::Null);
                    (header.clone(), value)
                })
                .collect();

            rows.push(Row::new(rows.len() + 1, cells));
        }

        debug!(
            "Parsed {} rows x {} columns (skipped {} blank)",
            rows.len(),
            expected_cols,
            records.len() - rows.len()
        );

        Dataset::new(headers, rows)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(DataLensError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Tab gets a slight bonus as it's rare inside actual values
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_empty() {
        assert!(matches!(detect_delimiter(b"\n\n"), Err(DataLensError::EmptyData(_))));
    }

    #[test]
    fn test_parse_coerces_values() {
        let dataset = Parser::new()
            .parse_str("name,age,active\nAlice,30,true\nBob,,false\n")
            .unwrap();

        assert_eq!(dataset.columns(), &["name", "age", "active"]);
        assert_eq!(dataset.row_count(), 2);

        let first = &dataset.rows()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.get("name"), &Value::Text("Alice".into()));
        assert_eq!(first.get("age"), &Value::Number(30.0));
        assert_eq!(first.get("active"), &Value::Bool(true));

        let second = &dataset.rows()[1];
        assert_eq!(second.id, 2);
        assert_eq!(second.get("age"), &Value::Null);
    }

    #[test]
    fn test_parse_skips_blank_rows_and_pads_short_ones() {
        let dataset = Parser::new()
            .parse_str("a,b,c\n1,2,3\n,,\n4,5\n")
            .unwrap();

        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows()[1].id, 2);
        assert_eq!(dataset.rows()[1].get("c"), &Value::Null);
    }

    #[test]
    fn test_parse_header_only_is_empty_dataset() {
        let dataset = Parser::new().parse_str("a,b\n").unwrap();
        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn test_parse_without_header() {
        let parser = Parser::with_config(ParserConfig {
            has_header: false,
            ..Default::default()
        });
        let dataset = parser.parse_str("1,2\n3,4\n").unwrap();

        assert_eq!(dataset.columns(), &["column_1", "column_2"]);
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn test_parse_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..Default::default()
        });
        let dataset = parser.parse_str("x\n1\n2\n3\n").unwrap();
        assert_eq!(dataset.row_count(), 1);
        assert_eq!(dataset.rows()[0].get("x"), &Value::Number(1.0));

        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(10),
            ..Default::default()
        });
        assert_eq!(parser.parse_str("x\n1\n2\n3\n").unwrap().row_count(), 3);
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let err = Parser::new().parse_str("a,a\n1,2\n").unwrap_err();
        assert!(matches!(err, DataLensError::DuplicateColumn(_)));
    }

    #[test]
    fn test_invalid_delimiter() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: Some(b'"'),
            ..Default::default()
        });
        assert!(matches!(
            parser.parse_str("a\n1\n"),
            Err(DataLensError::InvalidDelimiter(_))
        ));
    }
}
