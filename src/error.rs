use std::io;
use thiserror::Error;

/// Error type for table parsing operations.
///
/// Every variant carries the source path and, where the spec calls for it,
/// the failing block range, so a caller can report a precise location
/// without inspecting the kind first.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input file extension/MIME is not plain text.
    #[error("{path}: unsupported file type (expected .txt): {reason}")]
    UnsupportedFileType { path: String, reason: String },

    /// Underlying byte source cannot be read.
    #[error("{path}: read error: {source}")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Bytes decode under neither UTF-8 nor Latin-1.
    #[error("{path}: could not decode as UTF-8 or Latin-1: {reason}")]
    EncodingError { path: String, reason: String },

    /// Standard parser found a template header but no data region.
    #[error("{path}: standard template found but no data region{}", format_range(.block_range))]
    EmptyData {
        path: String,
        block_range: Option<(usize, usize)>,
    },

    /// Non-Standard parser found no block classifiable as tabular.
    #[error("{path}: no block could be classified as tabular")]
    ParsingError { path: String },
}

fn format_range(range: &Option<(usize, usize)>) -> String {
    match range {
        Some((start, end)) => format!(" (lines {start}..{end})"),
        None => String::new(),
    }
}

impl ParseError {
    /// The source path this error originated from.
    pub fn path(&self) -> &str {
        match self {
            ParseError::UnsupportedFileType { path, .. }
            | ParseError::ReadError { path, .. }
            | ParseError::EncodingError { path, .. }
            | ParseError::EmptyData { path, .. }
            | ParseError::ParsingError { path } => path,
        }
    }

    /// A short, stable kind tag, for callers that want to match by kind
    /// without depending on message text.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::UnsupportedFileType { .. } => "UnsupportedFileType",
            ParseError::ReadError { .. } => "ReadError",
            ParseError::EncodingError { .. } => "EncodingError",
            ParseError::EmptyData { .. } => "EmptyData",
            ParseError::ParsingError { .. } => "ParsingError",
        }
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let e = ParseError::EmptyData {
            path: "x.txt".into(),
            block_range: Some((3, 7)),
        };
        assert_eq!(e.kind(), "EmptyData");
        assert_eq!(e.path(), "x.txt");
        assert!(e.to_string().contains("lines 3..7"));
    }

    #[test]
    fn test_parsing_error_message() {
        let e = ParseError::ParsingError {
            path: "y.txt".into(),
        };
        assert_eq!(e.kind(), "ParsingError");
        assert!(e.to_string().contains("y.txt"));
    }
}
