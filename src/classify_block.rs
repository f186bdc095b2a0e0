//! The Block Classifier (§4.6): assigns each block a `BlockKind` and,
//! where the rules already pin it down, a row-construction strategy.

use crate::block::{BlockKind, ClassifiedBlock, ConstructionStrategy, StatBlock};
use crate::line::Line;
use crate::numeric::is_numeric;
use crate::stats::coefficient_of_variation;
use crate::token::Delimiter;

/// Classify one statistics-bearing block, applying the §4.6 rules table in
/// order — first match wins.
pub fn classify(stat: StatBlock<'_>) -> ClassifiedBlock<'_> {
    let multi = stat.stats.multi_space.clone();
    let mean_ratio = stat.stats.mean_numeric_ratio;
    let line_count = stat.stats.line_count;

    let (header_start, header_extent, title_line) = detect_header_extent(&stat);

    let kind;
    let construction;

    // Rules 3-5 of §4.6 all resolve to CompleteTabular, differing only in
    // which construction strategy they pin down; they're collapsed here
    // into one header_extent > 0 branch keyed on sub-block CV, since no
    // scenario distinguishes their downstream action otherwise. A block
    // with no detected header line (header_extent == 0) is never treated
    // as a standalone table even if its own token counts are perfectly
    // uniform (old rule 3's literal wording) — scenario F's orphan data
    // block is exactly this shape (uniform, header-less) and must reach
    // backward for headers rather than emit placeholder columns.
    if mean_ratio < 0.3 && multi.mode_token_count == 1 {
        kind = BlockKind::Narrative;
        construction = None;
    } else if mean_ratio < 0.3 && multi.mode_token_count > 1 && line_count < 5 {
        kind = BlockKind::HeaderOnly;
        construction = None;
    } else if header_extent == 0 {
        kind = BlockKind::DataOnly;
        construction = None;
    } else {
        let sub_block_cv = sub_block_cv(&stat, header_start + header_extent);
        kind = BlockKind::CompleteTabular;
        construction = Some(if sub_block_cv == 0.0 {
            ConstructionStrategy::Direct
        } else {
            ConstructionStrategy::OverlapAssign
        });
    }

    ClassifiedBlock {
        stat,
        kind,
        header_start,
        header_extent,
        title_line,
        construction,
    }
}

/// The CV of multi-space token counts over the lines strictly after
/// `data_start` — §4.6's "sub-block CV".
fn sub_block_cv(stat: &StatBlock<'_>, data_start: usize) -> f64 {
    let start = data_start.min(stat.stats.line_count);
    coefficient_of_variation(&stat.stats.multi_space.line_token_counts[start..])
}

/// Scan from the block's start for a leading run of header lines
/// (§4.6's `detect_header_extent`).
///
/// A line qualifies as a header line if it has no numeric tokens and its
/// multi-space token count is at least the block's overall multi-space
/// mode — used here as the trailing data portion's mode, since a block's
/// data rows typically dominate its line count.
fn detect_header_extent<'a>(stat: &StatBlock<'a>) -> (usize, usize, Option<&'a Line>) {
    let multi_tokens = stat.tokens_for(Delimiter::MultiSpace);
    let data_mode = stat.stats.multi_space.mode_token_count;

    let qualifying_run = |start: usize| -> usize {
        let mut extent = 0usize;
        for tokens in &multi_tokens[start..] {
            if tokens.is_empty() {
                break;
            }
            let has_numeric = tokens.iter().any(|t| is_numeric(&t.text));
            if !has_numeric && tokens.len() >= data_mode {
                extent += 1;
            } else {
                break;
            }
        }
        extent
    };

    // A single-token, non-numeric first line followed by a qualifying
    // header run is a title line, excluded from the header extent itself.
    if let Some(first) = multi_tokens.first()
        && first.len() == 1
        && !first.iter().any(|t| is_numeric(&t.text))
    {
        let following = qualifying_run(1);
        if following >= 1 {
            return (1, following, Some(stat.lines[0]));
        }
    }

    (0, qualifying_run(0), None)
}
