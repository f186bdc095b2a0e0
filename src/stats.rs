//! The Block Statistician (§4.5): per-delimiter token-count statistics and
//! the block-wide numeric ratio.

use crate::numeric::numeric_ratio;
use crate::token::Token;

/// Token-count statistics for one block under one delimiter hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub struct DelimiterStats {
    pub line_token_counts: Vec<usize>,
    pub mode_token_count: usize,
    pub cv_token_count: f64,
}

/// All statistics the Block Classifier needs for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStats {
    pub single_space: DelimiterStats,
    pub multi_space: DelimiterStats,
    pub tab: DelimiterStats,
    pub mean_numeric_ratio: f64,
    pub line_count: usize,
}

/// Compute `DelimiterStats` from one delimiter's per-line tokenization.
pub fn delimiter_stats(lines_tokens: &[Vec<Token>]) -> DelimiterStats {
    let line_token_counts: Vec<usize> = lines_tokens.iter().map(Vec::len).collect();
    DelimiterStats {
        mode_token_count: mode(&line_token_counts),
        cv_token_count: coefficient_of_variation(&line_token_counts),
        line_token_counts,
    }
}

/// The most common token count, lowest value first on tie.
fn mode(counts: &[usize]) -> usize {
    if counts.is_empty() {
        return 0;
    }
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();

    let mut best_value = sorted[0];
    let mut best_freq = 0usize;
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut j = i;
        while j < sorted.len() && sorted[j] == value {
            j += 1;
        }
        let freq = j - i;
        if freq > best_freq {
            best_freq = freq;
            best_value = value;
        }
        i = j;
    }
    best_value
}

/// Population coefficient of variation (stddev / mean). Zero for an empty
/// or constant series, never NaN.
pub(crate) fn coefficient_of_variation(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let n = counts.len() as f64;
    let mean: f64 = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance: f64 = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}

/// Mean, over all lines, of (numeric tokens / total tokens) — using
/// whichever tokenization the caller considers canonical (multi-space,
/// per §4.5).
pub fn mean_numeric_ratio(lines_tokens: &[Vec<Token>]) -> f64 {
    let non_empty: Vec<&Vec<Token>> = lines_tokens.iter().filter(|l| !l.is_empty()).collect();
    if non_empty.is_empty() {
        return 0.0;
    }
    let sum: f64 = non_empty
        .iter()
        .map(|tokens| {
            let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            numeric_ratio(&texts)
        })
        .sum();
    sum / non_empty.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(n: usize) -> Vec<Token> {
        (0..n)
            .map(|i| Token {
                text: "x".to_string(),
                start_col: i,
                end_col: i + 1,
            })
            .collect()
    }

    #[test]
    fn test_mode_lowest_on_tie() {
        assert_eq!(mode(&[3, 3, 2, 2]), 2);
        assert_eq!(mode(&[1, 2, 2, 2, 3]), 2);
        assert_eq!(mode(&[]), 0);
    }

    #[test]
    fn test_cv_zero_for_constant_series() {
        assert_eq!(coefficient_of_variation(&[4, 4, 4]), 0.0);
        assert_eq!(coefficient_of_variation(&[]), 0.0);
    }

    #[test]
    fn test_cv_nonzero_for_varying_series() {
        let cv = coefficient_of_variation(&[2, 4, 6]);
        assert!(cv > 0.0);
    }

    #[test]
    fn test_delimiter_stats() {
        let lines_tokens = vec![toks(3), toks(3), toks(2)];
        let stats = delimiter_stats(&lines_tokens);
        assert_eq!(stats.line_token_counts, vec![3, 3, 2]);
        assert_eq!(stats.mode_token_count, 3);
        assert!(stats.cv_token_count > 0.0);
    }

    #[test]
    fn test_mean_numeric_ratio() {
        let line1 = vec![
            Token { text: "1".to_string(), start_col: 0, end_col: 1 },
            Token { text: "abc".to_string(), start_col: 2, end_col: 5 },
        ];
        let line2 = vec![
            Token { text: "2".to_string(), start_col: 0, end_col: 1 },
            Token { text: "3".to_string(), start_col: 2, end_col: 3 },
        ];
        let ratio = mean_numeric_ratio(&[line1, line2]);
        assert!((ratio - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_mean_numeric_ratio_empty_lines_skipped() {
        let ratio = mean_numeric_ratio(&[vec![]]);
        assert_eq!(ratio, 0.0);
    }
}
