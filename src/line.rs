//! A single physical line produced by the Ingestor.

/// Width of a tab stop, in display columns. Fixed per spec (§9 Open
/// Questions resolves this to 8), but threaded through as a parameter so
/// tests can exercise other widths without special-casing the constant.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// A physical line from the input file, with leading/trailing whitespace
/// preserved and a precomputed tab-expansion column map.
///
/// `raw_text` is never mutated after ingestion — the Standard Parser needs
/// the original tab characters to split data rows, so tab expansion is
/// expressed only through `col_map`, which downstream tokenizers use to
/// compute display-column intervals. This keeps the "tabs are expanded for
/// column math" requirement (§4.1) and "split each data line by tab" (§4.3)
/// from fighting over the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based index of this line within the file.
    pub index: usize,
    /// The line's text exactly as read, with a trailing `\r` (if any)
    /// already stripped by the Ingestor.
    pub raw_text: String,
    /// `raw_text` trimmed of leading/trailing whitespace.
    pub stripped_text: String,
    /// Count of leading whitespace characters in `raw_text`.
    pub leading_ws_count: usize,
    /// `col_map[i]` is the display column (after tab expansion) at which
    /// the `i`-th character of `raw_text` begins; `col_map[len]` is the
    /// display column just past the last character. Length is
    /// `raw_text.chars().count() + 1`.
    col_map: Vec<usize>,
}

impl Line {
    /// Build a `Line` from raw text, computing its column map eagerly so
    /// the tab-expansion stays "sticky" for every later consumer.
    pub fn new(index: usize, raw_text: String, tab_width: usize) -> Self {
        let stripped_text = raw_text.trim().to_string();
        let leading_ws_count = raw_text
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();

        let mut col_map = Vec::with_capacity(raw_text.chars().count() + 1);
        let mut col = 0usize;
        col_map.push(col);
        for c in raw_text.chars() {
            if c == '\t' {
                let advance = tab_width - (col % tab_width);
                col += advance;
            } else {
                col += 1;
            }
            col_map.push(col);
        }

        Self {
            index,
            raw_text,
            stripped_text,
            leading_ws_count,
            col_map,
        }
    }

    /// True if this line is blank (only whitespace, including Unicode
    /// whitespace, per the Open Question resolution in SPEC_FULL.md).
    pub fn is_blank(&self) -> bool {
        self.stripped_text.is_empty()
    }

    /// Display column (post tab-expansion) at character index `char_idx`.
    pub fn display_col(&self, char_idx: usize) -> usize {
        self.col_map[char_idx.min(self.col_map.len() - 1)]
    }

    /// Total display width of this line after tab expansion.
    pub fn display_width(&self) -> usize {
        *self.col_map.last().unwrap_or(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(Line::new(0, "   \t  ".to_string(), 8).is_blank());
        assert!(!Line::new(0, "  x ".to_string(), 8).is_blank());
    }

    #[test]
    fn test_tab_expansion_sticky() {
        // "a\tb" -> 'a' at col 0, tab advances to col 8, 'b' at col 8.
        let line = Line::new(0, "a\tb".to_string(), 8);
        assert_eq!(line.display_col(0), 0);
        assert_eq!(line.display_col(1), 1);
        assert_eq!(line.display_col(2), 8);
        assert_eq!(line.display_width(), 9);
    }

    #[test]
    fn test_raw_text_preserves_tabs() {
        let line = Line::new(0, "x\ty\tz".to_string(), 8);
        assert_eq!(line.raw_text, "x\ty\tz");
        assert_eq!(line.raw_text.split('\t').count(), 3);
    }

    #[test]
    fn test_leading_ws_count() {
        let line = Line::new(0, "   hello".to_string(), 8);
        assert_eq!(line.leading_ws_count, 3);
    }
}
