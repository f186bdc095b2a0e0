//! Header extraction (§4.7.1): single-line headers taken directly,
//! multi-line headers merged bottom-up. Each bottom-line token is prefixed
//! with the group header that spans its column on every upper line, so
//! sibling sub-columns under one group header (e.g. several isotope
//! columns under "Uranium") all inherit its name without overlapping it
//! directly.

use foldhash::{HashMap, HashMapExt};

use crate::block::ClassifiedBlock;
use crate::table::ColumnSpec;
use crate::token::{Delimiter, Token};

/// Extract column specs from a classified block's header lines
/// (`header_start..header_start + header_extent`).
pub fn extract_headers(classified: &ClassifiedBlock<'_>) -> Vec<ColumnSpec> {
    let multi_tokens = classified.stat.tokens_for(Delimiter::MultiSpace);
    let header_lines = &multi_tokens
        [classified.header_start..classified.header_start + classified.header_extent];

    match header_lines.len() {
        0 => Vec::new(),
        1 => direct_columns(&header_lines[0]),
        _ => overlap_merge_columns(header_lines),
    }
}

fn direct_columns(tokens: &[Token]) -> Vec<ColumnSpec> {
    disambiguate(
        tokens
            .iter()
            .map(|t| (t.text.clone(), (t.start_col, t.end_col)))
            .collect(),
    )
}

/// Bottom-up overlap merge across `header_lines` (top to bottom).
fn overlap_merge_columns(header_lines: &[Vec<Token>]) -> Vec<ColumnSpec> {
    let bottom = header_lines.last().expect("checked len > 1 by caller");
    let upper_lines = &header_lines[..header_lines.len() - 1];

    let mut raw_columns = Vec::new();
    for token in bottom {
        let interval = widen_interval((token.start_col, token.end_col), upper_lines);
        let name = group_name(upper_lines, token);
        raw_columns.push((name, interval));
    }

    disambiguate(raw_columns)
}

/// Widen `interval` to a fixed point that covers every upper-line token
/// overlapping it (§4.7.1: "widened to cover any token on an upper line
/// whose interval overlaps"). This is the *physical* column interval used
/// for later overlap assignment of data tokens, independent of naming.
fn widen_interval(mut interval: (usize, usize), upper_lines: &[Vec<Token>]) -> (usize, usize) {
    let mut changed = true;
    while changed {
        changed = false;
        for line in upper_lines {
            for token in line {
                if token.overlap(interval.0, interval.1) > 0 {
                    let widened = (interval.0.min(token.start_col), interval.1.max(token.end_col));
                    if widened != interval {
                        interval = widened;
                        changed = true;
                    }
                }
            }
        }
    }
    interval
}

/// The final name for one bottom-line `token`: top-to-bottom, the group
/// header on each upper line whose span contains the token, followed by the
/// token's own text (never another bottom-line token — §4.7.1's "error" and
/// "yr" get a group prefix from their own line, nothing more).
fn group_name(upper_lines: &[Vec<Token>], token: &Token) -> String {
    let mut parts: Vec<&str> = upper_lines
        .iter()
        .filter_map(|line| covering_group(line, token.start_col))
        .collect();
    parts.push(token.text.as_str());
    parts.join(" ")
}

/// The text of the token on `line` whose group span contains `col`. A
/// group header commonly labels several narrower sub-columns beneath it
/// ("Uranium" over "238U", "235U", "error"), so a token's span is widened
/// past its own text to the midpoint of the gap to its neighbors on the
/// same line (unbounded at the line's two ends) rather than requiring a
/// direct text overlap.
fn covering_group(line: &[Token], col: usize) -> Option<&str> {
    group_spans(line)
        .into_iter()
        .find(|&(_, lo, hi)| col >= lo && col < hi)
        .map(|(text, _, _)| text)
}

/// Partition `line` into one span per token: each token's span runs from
/// the midpoint between it and its left neighbor to the midpoint between it
/// and its right neighbor, with the outer two spans unbounded.
fn group_spans(line: &[Token]) -> Vec<(&str, usize, usize)> {
    let n = line.len();
    (0..n)
        .map(|i| {
            let lo = if i == 0 {
                0
            } else {
                midpoint(line[i - 1].end_col, line[i].start_col)
            };
            let hi = if i + 1 == n {
                usize::MAX
            } else {
                midpoint(line[i].end_col, line[i + 1].start_col)
            };
            (line[i].text.as_str(), lo, hi)
        })
        .collect()
}

fn midpoint(a: usize, b: usize) -> usize {
    if b > a { a + (b - a) / 2 } else { a }
}

/// Disambiguate duplicate column names left-to-right by appending
/// `_2, _3, …`.
fn disambiguate(columns: Vec<(String, (usize, usize))>) -> Vec<ColumnSpec> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    columns
        .into_iter()
        .map(|(name, interval)| {
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            let final_name = if *count == 1 {
                name
            } else {
                format!("{name}_{count}")
            };
            ColumnSpec::with_interval(final_name, interval)
        })
        .collect()
}
