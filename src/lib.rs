//! paleoclim-tables: table-understanding parser for paleoclimate data-access files
//!
//! A thin client that queries a remote paleoclimatology search service sits
//! upstream of this crate and is out of scope here; what this crate does is
//! turn the plain-text files that service serves up into structured tables.
//! Two input shapes are handled:
//!
//! * **Standard** files conform to the NOAA paleoclimatology template: a
//!   commented metadata header followed by a single tab-delimited data region.
//! * **Non-Standard** files have no explicit structural markers at all — table
//!   boundaries, headers, and column alignment are all inferred from layout and
//!   token statistics.
//!
//! # Quick Start
//!
//! ```no_run
//! use paleoclim_tables::TableParser;
//!
//! let parser = TableParser::new();
//! let tables = parser.parse_path("data.txt").unwrap();
//!
//! for table in &tables {
//!     println!("columns: {:?}", table.column_names());
//!     println!("rows: {}", table.rows.len());
//! }
//! ```
//!
//! # Architecture
//!
//! Bytes flow strictly upward through seven cooperating components: an
//! Ingestor (encoding detection + line splitting), a Template Classifier
//! (Standard vs. Non-Standard), the Standard Parser, and — for Non-Standard
//! files — a Block Segmenter, Block Statistician, Block Classifier, and Table
//! Constructor. The Non-Standard pipeline's headline technique is
//! *visual-interval overlap assignment*: when a block's rows are ragged,
//! tokens are assigned to columns by which header column's character
//! interval they overlap most, with documented tie-breaks.
//!
//! [`TableParser`] is the single public entry point; everything else in this
//! crate is reachable through its output ([`Table`]) or its error type
//! ([`ParseError`]).

mod block;
mod classify_block;
mod classify_file;
mod construct;
mod encoding;
mod error;
mod header;
mod ingest;
mod line;
mod metadata;
mod nonstandard;
mod numeric;
mod parser;
mod segment;
mod standard;
mod stats;
mod table;
mod token;

pub mod batch;

pub use error::{ParseError, Result};
pub use metadata::{MetadataDict, VariableRecord};
pub use parser::{TableParser, PARSER_VERSION};
pub use table::{Cell, ColumnSpec, Row, Table};
