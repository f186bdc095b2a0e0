//! The Table Constructor (§4.7): header extraction plus the two row
//! construction strategies, `generate_df` and `assign_tokens_by_overlap`.

use crate::block::{BlockKind, ClassifiedBlock, ConstructionStrategy};
use crate::header::extract_headers;
use crate::table::{ColumnSpec, Row, Table};
use crate::token::{Delimiter, Token};

/// Build a `Table` for a classified block whose kind carries its own
/// headers (`CompleteTabular`). `Narrative`, `HeaderOnly`, and `DataOnly`
/// blocks are handled elsewhere (the first two produce no table directly;
/// `DataOnly` is resolved via orphan adoption in `nonstandard.rs`).
pub fn construct_table(classified: &ClassifiedBlock<'_>) -> Option<Table> {
    if classified.kind != BlockKind::CompleteTabular {
        return None;
    }
    let columns = extract_headers(classified);
    let data_tokens = data_tokens(classified);
    let strategy = classified.construction.unwrap_or(ConstructionStrategy::Direct);
    Some(build_table(classified, columns, data_tokens, strategy))
}

/// The multi-space-tokenized lines after the header extent.
fn data_tokens<'a>(classified: &'a ClassifiedBlock<'_>) -> &'a [Vec<Token>] {
    let all = classified.stat.tokens_for(Delimiter::MultiSpace);
    &all[classified.header_start + classified.header_extent..]
}

fn build_table(
    classified: &ClassifiedBlock<'_>,
    columns: Vec<ColumnSpec>,
    data_tokens: &[Vec<Token>],
    strategy: ConstructionStrategy,
) -> Table {
    let width = columns.len();
    let mut table = Table::new(columns);
    for tokens in data_tokens {
        let row = match strategy {
            ConstructionStrategy::Direct => generate_row(width, tokens),
            ConstructionStrategy::OverlapAssign => assign_tokens_by_overlap(&table.columns, tokens),
        };
        table.push_row(row);
    }

    table.set_attr(
        "source_block_range",
        format!("{}..{}", classified.stat.start_index(), classified.stat.end_index() + 1),
    );
    if let Some(title) = classified.title_line {
        table.set_attr("title", title.stripped_text.clone());
    }

    table
}

/// Direct positional row construction (§4.7.2): pads short rows with
/// null, and for overlong rows keeps the first `H-1` tokens and joins the
/// rest into the last column.
pub fn generate_row(width: usize, tokens: &[Token]) -> Row {
    if width == 0 {
        return Vec::new();
    }
    if tokens.len() <= width {
        let mut row: Row = tokens.iter().map(|t| Some(t.text.clone())).collect();
        while row.len() < width {
            row.push(None);
        }
        row
    } else {
        let mut row: Row = tokens[..width - 1].iter().map(|t| Some(t.text.clone())).collect();
        let joined = tokens[width - 1..]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        row.push(Some(joined));
        row
    }
}

/// Overlap-based row construction (§4.7.3): assign each token to the
/// column with greatest interval overlap, applying the four ordered
/// tie-break rules.
pub fn assign_tokens_by_overlap(columns: &[ColumnSpec], tokens: &[Token]) -> Row {
    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); columns.len()];

    for token in tokens {
        let chosen = choose_column(columns, token);
        if let Some(i) = chosen {
            buckets[i].push(token.text.as_str());
        }
    }

    buckets
        .into_iter()
        .map(|texts| if texts.is_empty() { None } else { Some(texts.join(" ")) })
        .collect()
}

fn choose_column(columns: &[ColumnSpec], token: &Token) -> Option<usize> {
    if columns.is_empty() {
        return None;
    }

    let mut best_overlap = 0usize;
    let mut candidates: Vec<usize> = Vec::new();
    for (i, col) in columns.iter().enumerate() {
        let Some((cl, cr)) = col.interval else { continue };
        let overlap = token.overlap(cl, cr);
        if overlap > best_overlap {
            best_overlap = overlap;
            candidates = vec![i];
        } else if overlap > 0 && overlap == best_overlap {
            candidates.push(i);
        }
    }

    if best_overlap > 0 {
        return Some(break_overlap_tie(columns, &candidates, token));
    }

    // Free token (zero overlap with every column): the nearest column
    // whose interval starts strictly to the right of the token; else the
    // rightmost column.
    let nearest_right = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.interval.is_some_and(|(cl, _)| cl > token.end_col))
        .min_by_key(|(_, c)| c.interval.unwrap().0);

    match nearest_right {
        Some((i, _)) => Some(i),
        None => Some(columns.len() - 1),
    }
}

/// Tie-break rules 1 and 2: closest interval midpoint, then leftmost
/// column (lowest index, since columns are ordered left to right).
fn break_overlap_tie(columns: &[ColumnSpec], candidates: &[usize], token: &Token) -> usize {
    if candidates.len() == 1 {
        return candidates[0];
    }
    let token_mid = token.midpoint();
    *candidates
        .iter()
        .min_by(|&&a, &&b| {
            let da = midpoint_distance(&columns[a], token_mid);
            let db = midpoint_distance(&columns[b], token_mid);
            da.partial_cmp(&db).unwrap().then(a.cmp(&b))
        })
        .expect("candidates is non-empty")
}

fn midpoint_distance(col: &ColumnSpec, token_mid: f64) -> f64 {
    let (cl, cr) = col.interval.unwrap_or((0, 0));
    let col_mid = (cl + cr) as f64 / 2.0;
    (col_mid - token_mid).abs()
}
