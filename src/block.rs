//! Block types for the Non-Standard pipeline's phase chain (§9 design
//! note): `RawBlock` (segment.rs) → `StatBlock` → `ClassifiedBlock` →
//! `ConstructedBlock` (table.rs's `Table`).

use std::collections::HashMap;

use crate::line::Line;
use crate::segment::RawBlock;
use crate::stats::{self, BlockStats};
use crate::token::{self, Delimiter, Token};

/// A block with every delimiter's tokenization and statistics computed.
pub struct StatBlock<'a> {
    pub lines: Vec<&'a Line>,
    pub tokens: HashMap<Delimiter, Vec<Vec<Token>>>,
    pub stats: BlockStats,
}

impl<'a> StatBlock<'a> {
    pub fn start_index(&self) -> usize {
        self.lines.first().map(|l| l.index).unwrap_or(0)
    }

    pub fn end_index(&self) -> usize {
        self.lines.last().map(|l| l.index).unwrap_or(0)
    }

    pub fn tokens_for(&self, delimiter: Delimiter) -> &[Vec<Token>] {
        &self.tokens[&delimiter]
    }
}

/// Tokenize and compute statistics for a raw block under all three
/// delimiter hypotheses, per §4.5.
pub fn analyze(raw: RawBlock<'_>) -> StatBlock<'_> {
    let mut tokens = HashMap::new();
    for delimiter in Delimiter::ALL {
        let per_line: Vec<Vec<Token>> = raw
            .lines
            .iter()
            .map(|line| token::tokenize(line, delimiter))
            .collect();
        tokens.insert(delimiter, per_line);
    }

    let single_space = stats::delimiter_stats(&tokens[&Delimiter::SingleSpace]);
    let multi_space = stats::delimiter_stats(&tokens[&Delimiter::MultiSpace]);
    let tab = stats::delimiter_stats(&tokens[&Delimiter::Tab]);
    let mean_numeric_ratio = stats::mean_numeric_ratio(&tokens[&Delimiter::MultiSpace]);
    let line_count = raw.lines.len();

    StatBlock {
        lines: raw.lines,
        tokens,
        stats: BlockStats {
            single_space,
            multi_space,
            tab,
            mean_numeric_ratio,
            line_count,
        },
    }
}

/// What a classified block has been determined to be (§4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Narrative,
    HeaderOnly,
    CompleteTabular,
    DataOnly,
}

/// Which row-construction strategy the Table Constructor should use,
/// decided for kinds where §4.6's rules pin it down already.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionStrategy {
    Direct,
    OverlapAssign,
}

/// A block run through the Block Classifier: its kind and, for
/// header-bearing kinds, where the header lines are and how many there are.
///
/// `header_start` is 1 when the block's first line was split off as a
/// `title_line`, 0 otherwise; `header_extent` counts header lines from
/// `header_start`.
pub struct ClassifiedBlock<'a> {
    pub stat: StatBlock<'a>,
    pub kind: BlockKind,
    pub header_start: usize,
    pub header_extent: usize,
    pub title_line: Option<&'a Line>,
    pub construction: Option<ConstructionStrategy>,
}
