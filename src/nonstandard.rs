//! Orchestrates the Non-Standard pipeline: Block Segmenter → Block
//! Statistician → Block Classifier → Table Constructor, including orphan
//! data adoption (§4.7.4).

use crate::block::{analyze, BlockKind, ClassifiedBlock};
use crate::classify_block::classify;
use crate::construct::{assign_tokens_by_overlap, construct_table, generate_row};
use crate::error::{ParseError, Result};
use crate::header::extract_headers;
use crate::line::Line;
use crate::segment::segment;
use crate::table::Table;
use crate::token::Delimiter;

/// Parse a Non-Standard file's lines into zero or more tables, one per
/// eligible block.
///
/// Lenient by design (§7): individual blocks that don't resolve into a
/// table (narrative prose, unmatched header-only blocks, orphan data with
/// no preceding header) are silently skipped. Only a file that yields zero
/// tables overall is an error.
pub fn parse(lines: &[Line], path: &str) -> Result<Vec<Table>> {
    let classified: Vec<ClassifiedBlock<'_>> = segment(lines)
        .into_iter()
        .map(analyze)
        .map(classify)
        .collect();

    let mut tables = Vec::new();
    for (i, block) in classified.iter().enumerate() {
        match block.kind {
            BlockKind::CompleteTabular => {
                if let Some(table) = construct_table(block) {
                    tables.push(table);
                }
            }
            BlockKind::DataOnly => {
                if let Some(table) = adopt_orphan(block, &classified[..i]) {
                    tables.push(table);
                }
            }
            BlockKind::Narrative | BlockKind::HeaderOnly => {}
        }
    }

    if tables.is_empty() {
        return Err(ParseError::ParsingError {
            path: path.to_string(),
        });
    }
    Ok(tables)
}

/// Adopt a data-only block's rows onto the nearest preceding header-only
/// block's columns (§4.7.4). Returns `None` if no header-only block
/// precedes it.
fn adopt_orphan(data: &ClassifiedBlock<'_>, preceding: &[ClassifiedBlock<'_>]) -> Option<Table> {
    let header_block = preceding
        .iter()
        .rev()
        .find(|b| b.kind == BlockKind::HeaderOnly)?;
    let columns = extract_headers(header_block);
    if columns.is_empty() {
        return None;
    }
    let width = columns.len();

    let matching_delimiter = [Delimiter::SingleSpace, Delimiter::MultiSpace, Delimiter::Tab]
        .into_iter()
        .find(|&d| mode_token_count(data, d) == width);

    let mut table = Table::new(columns);
    match matching_delimiter {
        Some(delimiter) => {
            for row_tokens in data.stat.tokens_for(delimiter) {
                table.push_row(generate_row(width, row_tokens));
            }
        }
        None => {
            for row_tokens in data.stat.tokens_for(Delimiter::MultiSpace) {
                let row = assign_tokens_by_overlap(&table.columns, row_tokens);
                table.push_row(row);
            }
        }
    }

    table.set_attr(
        "source_block_range",
        format!("{}..{}", data.stat.start_index(), data.stat.end_index() + 1),
    );
    Some(table)
}

fn mode_token_count(block: &ClassifiedBlock<'_>, delimiter: Delimiter) -> usize {
    match delimiter {
        Delimiter::SingleSpace => block.stat.stats.single_space.mode_token_count,
        Delimiter::MultiSpace => block.stat.stats.multi_space.mode_token_count,
        Delimiter::Tab => block.stat.stats.tab.mode_token_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;

    #[test]
    fn test_scenario_f_orphan_data_adoption() {
        let text = b"Depth  Age\n\n1  10\n2  20\n3  30\n";
        let lines = ingest(text, 8);
        let tables = parse(&lines, "scenario_f.txt").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].column_names(), vec!["Depth", "Age"]);
        assert_eq!(tables[0].rows.len(), 3);
    }

    #[test]
    fn test_narrative_only_file_fails() {
        let text = b"This is just a paragraph of English prose.\nIt has no tables in it at all.\n";
        let lines = ingest(text, 8);
        let err = parse(&lines, "narrative.txt").unwrap_err();
        assert_eq!(err.kind(), "ParsingError");
    }

    #[test]
    fn test_scenario_d_standalone_uniform_table() {
        let text = b"Depth  Age  d18O\n1  10  -5.1\n2  20  -5.2\n3  30  -5.3\n4  40  -5.4\n5  50  -5.5\n6  60  -5.6\n7  70  -5.7\n8  80  -5.8\n9  90  -5.9\n";
        let lines = ingest(text, 8);
        let tables = parse(&lines, "scenario_d.txt").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 9);
    }
}
