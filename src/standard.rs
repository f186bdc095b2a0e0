//! The Standard Parser (§4.3): NOAA-template files → one `Table` + `MetadataDict`.

use crate::error::{ParseError, Result};
use crate::line::Line;
use crate::metadata::{MetadataDict, VariableRecord};
use crate::numeric::is_numeric;
use crate::table::{ColumnSpec, Table};

/// Parse a Standard-template line stream into its metadata and single data
/// table.
///
/// Commented lines (starting with `#`) form the metadata region;
/// uncommented, non-blank lines after the last comment form the data
/// region (§4.3 point 1). Interleaving outside that transition boundary is
/// tolerated rather than rejected — every comment line, wherever it
/// appears, still contributes to the metadata walk.
pub fn parse(lines: &[Line], path: &str) -> Result<(Table, MetadataDict)> {
    let mut metadata = MetadataDict::new();
    let mut current_section = String::new();
    let mut last_comment_idx: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        if line.raw_text.starts_with('#') {
            last_comment_idx = Some(i);
            parse_comment_line(&line.raw_text, &mut current_section, &mut metadata);
        }
    }

    let data_start = last_comment_idx.map_or(0, |i| i + 1);
    let data_lines: Vec<&Line> = lines[data_start..]
        .iter()
        .filter(|l| !l.is_blank())
        .collect();

    if data_lines.is_empty() {
        return Err(ParseError::EmptyData {
            path: path.to_string(),
            block_range: last_comment_idx.map(|i| (0, i + 1)),
        });
    }

    let mut columns = preferred_columns(&metadata);
    let mut data_lines = data_lines;

    if columns.is_empty() {
        let first_tokens: Vec<&str> = data_lines[0].raw_text.split('\t').collect();
        if !first_tokens.is_empty()
            && first_tokens.iter().all(|t| !is_numeric(t.trim()))
        {
            columns = first_tokens.iter().map(|t| t.trim().to_string()).collect();
            data_lines = data_lines[1..].to_vec();
            if data_lines.is_empty() {
                return Err(ParseError::EmptyData {
                    path: path.to_string(),
                    block_range: last_comment_idx.map(|i| (0, i + 1)),
                });
            }
        } else {
            columns = (0..first_tokens.len())
                .map(|i| format!("unnamed_{i}"))
                .collect();
        }
    }

    let mut table = Table::new(columns.iter().map(ColumnSpec::new).collect());
    let width = columns.len();
    let mut trimmed_any = false;

    for line in &data_lines {
        let tokens: Vec<&str> = line.raw_text.split('\t').collect();
        let mut row: Vec<Option<String>> = if tokens.len() > width {
            trimmed_any = true;
            tokens[..width]
                .iter()
                .map(|t| Some((*t).to_string()))
                .collect()
        } else {
            tokens.iter().map(|t| Some((*t).to_string())).collect()
        };
        while row.len() < width {
            row.push(None);
        }
        table.push_row(row);
    }

    if trimmed_any {
        table.set_attr("trim_warning", "one or more data rows had more fields than columns; excess trailing fields were dropped");
    }

    for (key, value) in metadata.flatten() {
        table.set_attr(key, value);
    }
    if let Some(title) = metadata.title() {
        table.set_attr("title", title.to_string());
    }

    Ok((table, metadata))
}

/// Column names sourced from the `Variables` section, in file order.
fn preferred_columns(metadata: &MetadataDict) -> Vec<String> {
    metadata
        .variables
        .iter()
        .map(VariableRecord::name)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one commented line's content into either a section header or a
/// `key: value` pair, updating `current_section` / `metadata` in place.
///
/// `##`-prefixed lines are variable records and are handled by the caller
/// before this function is reached in the usual flow, but a `##` line
/// routed here (e.g. if it slips past the caller) is treated as a variable
/// record too, for robustness.
fn parse_comment_line(raw: &str, current_section: &mut String, metadata: &mut MetadataDict) {
    if let Some(rest) = raw.strip_prefix("##") {
        metadata
            .variables
            .push(VariableRecord::from_tab_line(rest.trim_start()));
        return;
    }

    let content = raw.trim_start_matches('#').trim();
    if content.is_empty() {
        return;
    }

    if let Some(colon_idx) = content.find(':') {
        let key = content[..colon_idx].trim().to_string();
        let value = content[colon_idx + 1..].trim().to_string();
        if key.is_empty() {
            return;
        }
        let section = if current_section.is_empty() {
            key.clone()
        } else {
            current_section.clone()
        };
        metadata.insert(&section, key, value);
    } else if content.chars().all(|c| c.is_alphanumeric() || c == '_') {
        *current_section = content.to_string();
    }
    // Free-form prose comments (no colon, more than one token) carry no
    // structural information and are skipped.
}
