//! `TableParser`: the public entry point orchestrating Ingestor → Template
//! Classifier → (Standard Parser | Non-Standard pipeline).

use std::fs;
use std::path::Path;

use crate::classify_file::{self, FileKind};
use crate::error::{ParseError, Result};
use crate::ingest::ingest;
use crate::line::DEFAULT_TAB_WIDTH;
use crate::nonstandard;
use crate::standard;
use crate::table::Table;

/// A single constant string identifying this parser's version, exposed per
/// the external-interfaces contract (no other persistent state).
pub const PARSER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses paleoclimate data files (Standard NOAA template or Non-Standard
/// free-form text) into ordered `Table`s.
///
/// # Example
///
/// ```no_run
/// use paleoclim_tables::TableParser;
///
/// let mut parser = TableParser::new();
/// parser.tab_width(8);
///
/// let tables = parser.parse_path("data.txt").unwrap();
/// for table in &tables {
///     println!("{:?}", table.column_names());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TableParser {
    tab_width: usize,
    sentinel_vocabulary: Vec<String>,
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser {
    /// Create a new parser with default settings: 8-column tab stops and
    /// the §4.2 minimum sentinel vocabulary.
    pub fn new() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            sentinel_vocabulary: classify_file::default_sentinel_vocabulary(),
        }
    }

    /// Set the tab-stop width used for column math (§9 Open Question #2).
    pub fn tab_width(&mut self, tab_width: usize) -> &mut Self {
        self.tab_width = tab_width;
        self
    }

    /// Override the Template Classifier's sentinel vocabulary (§9 Open
    /// Question #1).
    pub fn sentinel_vocabulary(&mut self, vocabulary: Vec<String>) -> &mut Self {
        self.sentinel_vocabulary = vocabulary;
        self
    }

    /// Parse a file at `path`. Rejects any extension other than `.txt`
    /// with `UnsupportedFileType`.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Table>> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let is_txt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if !is_txt {
            return Err(ParseError::UnsupportedFileType {
                path: path_str,
                reason: "only .txt files are supported".to_string(),
            });
        }

        let data = fs::read(path).map_err(|source| ParseError::ReadError {
            path: path_str.clone(),
            source,
        })?;

        self.parse_bytes(&data, &path_str)
    }

    /// Parse an in-memory byte buffer. `filename_hint` is used only for
    /// error messages and table attrs — no filesystem access occurs here.
    pub fn parse_bytes(&self, data: &[u8], filename_hint: &str) -> Result<Vec<Table>> {
        let lines = ingest(data, self.tab_width);

        match classify_file::classify(&lines, &self.sentinel_vocabulary) {
            FileKind::Standard => {
                let (table, _metadata) = standard::parse(&lines, filename_hint)?;
                Ok(vec![table])
            }
            FileKind::NonStandard => nonstandard::parse(&lines, filename_hint),
        }
    }
}
