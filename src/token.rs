//! Tokenization of a `Line` under the three delimiter hypotheses (§4.5).

use crate::line::Line;

/// A contiguous non-whitespace run and its half-open display-column
/// interval `[start_col, end_col)` within its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start_col: usize,
    pub end_col: usize,
}

impl Token {
    pub fn new(text: String, start_col: usize, end_col: usize) -> Self {
        Self {
            text,
            start_col,
            end_col,
        }
    }

    /// Overlap (in display columns) between this token's interval and
    /// `[lo, hi)`. Zero if they don't intersect.
    pub fn overlap(&self, lo: usize, hi: usize) -> usize {
        let lo_max = self.start_col.max(lo);
        let hi_min = self.end_col.min(hi);
        hi_min.saturating_sub(lo_max)
    }

    pub fn midpoint(&self) -> f64 {
        (self.start_col + self.end_col) as f64 / 2.0
    }
}

/// Which delimiter hypothesis produced a set of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// Any run of whitespace (length 1+) separates tokens.
    SingleSpace,
    /// Only runs of 2+ whitespace characters separate tokens; a single
    /// embedded space stays part of the token.
    MultiSpace,
    /// Only literal tab characters separate tokens.
    Tab,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [Delimiter::SingleSpace, Delimiter::MultiSpace, Delimiter::Tab];
}

/// Tokenize `line` under `delimiter`.
pub fn tokenize(line: &Line, delimiter: Delimiter) -> Vec<Token> {
    match delimiter {
        Delimiter::SingleSpace => tokenize_single_space(line),
        Delimiter::MultiSpace => tokenize_multi_space(line),
        Delimiter::Tab => tokenize_tab(line),
    }
}

fn tokenize_single_space(line: &Line) -> Vec<Token> {
    let chars: Vec<char> = line.raw_text.chars().collect();
    let n = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < n {
        while i < n && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= n {
            break;
        }
        let start = i;
        while i < n && !chars[i].is_whitespace() {
            i += 1;
        }
        let text: String = chars[start..i].iter().collect();
        tokens.push(Token::new(text, line.display_col(start), line.display_col(i)));
    }
    tokens
}

fn tokenize_multi_space(line: &Line) -> Vec<Token> {
    let chars: Vec<char> = line.raw_text.chars().collect();
    let n = chars.len();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < n {
        // Skip whitespace of any length before a token starts.
        while i < n && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= n {
            break;
        }
        let start = i;
        let mut end = i;
        loop {
            if i >= n {
                break;
            }
            if chars[i].is_whitespace() {
                let run_start = i;
                while i < n && chars[i].is_whitespace() {
                    i += 1;
                }
                let run_len = i - run_start;
                if run_len >= 2 {
                    // Leave the gap for the outer loop's leading skip.
                    i = run_start;
                    break;
                }
                // A single embedded space stays part of the token.
                end = i;
            } else {
                i += 1;
                end = i;
            }
        }
        let text: String = chars[start..end].iter().collect();
        tokens.push(Token::new(text, line.display_col(start), line.display_col(end)));
    }
    tokens
}

fn tokenize_tab(line: &Line) -> Vec<Token> {
    let chars: Vec<char> = line.raw_text.chars().collect();
    let n = chars.len();
    let mut tokens = Vec::new();
    let mut field_start = 0usize;
    let mut i = 0usize;
    loop {
        if i == n || chars[i] == '\t' {
            if let Some((s, e)) = trim_span(&chars, field_start, i) {
                let text: String = chars[s..e].iter().collect();
                tokens.push(Token::new(text, line.display_col(s), line.display_col(e)));
            }
            if i == n {
                break;
            }
            field_start = i + 1;
        }
        i += 1;
    }
    tokens
}

/// Trim leading/trailing whitespace from `chars[start..end]`, returning
/// `None` if nothing but whitespace remains.
fn trim_span(chars: &[char], start: usize, end: usize) -> Option<(usize, usize)> {
    let mut s = start;
    while s < end && chars[s].is_whitespace() {
        s += 1;
    }
    let mut e = end;
    while e > s && chars[e - 1].is_whitespace() {
        e -= 1;
    }
    if s < e { Some((s, e)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> Line {
        Line::new(0, s.to_string(), 8)
    }

    #[test]
    fn test_single_space_splits_on_any_whitespace() {
        let l = line("Depth  Age  d18O");
        let toks = tokenize(&l, Delimiter::SingleSpace);
        let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Depth", "Age", "d18O"]);
    }

    #[test]
    fn test_multi_space_keeps_single_embedded_space() {
        let l = line("Sample  Uranium                  Date");
        let toks = tokenize(&l, Delimiter::MultiSpace);
        let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Sample", "Uranium", "Date"]);
    }

    #[test]
    fn test_multi_space_merges_single_space_words() {
        let l = line("Sample ID      238U");
        let toks = tokenize(&l, Delimiter::MultiSpace);
        let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Sample ID", "238U"]);
    }

    #[test]
    fn test_tab_tokenization() {
        let l = line("age\tage\tC\t,\tyears BP");
        let toks = tokenize(&l, Delimiter::Tab);
        let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["age", "age", "C", ",", "years BP"]);
    }

    #[test]
    fn test_tab_tokenization_skips_empty_fields() {
        let l = line("a\t\tb");
        let toks = tokenize(&l, Delimiter::Tab);
        let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_intervals_use_display_columns() {
        let l = line("a\tbb");
        let toks = tokenize(&l, Delimiter::Tab);
        assert_eq!(toks[0].start_col, 0);
        assert_eq!(toks[0].end_col, 1);
        assert_eq!(toks[1].start_col, 8);
        assert_eq!(toks[1].end_col, 10);
    }

    #[test]
    fn test_overlap() {
        let t = Token::new("x".into(), 2, 5);
        assert_eq!(t.overlap(0, 2), 0);
        assert_eq!(t.overlap(0, 3), 1);
        assert_eq!(t.overlap(3, 4), 1);
        assert_eq!(t.overlap(4, 10), 1);
    }
}
