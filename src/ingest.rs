//! The Ingestor (§4.1): bytes → ordered `Line`s.

use crate::encoding::decode;
use crate::line::Line;

/// Load bytes into an ordered sequence of `Line`s.
///
/// Detects encoding (UTF-8 preferred, Latin-1 fallback — never fails on
/// encoding), splits on `\n`, strips a trailing `\r`, and expands tabs to
/// `tab_width`-column stops for every line's column map.
pub fn ingest(data: &[u8], tab_width: usize) -> Vec<Line> {
    let (text, _encoding) = decode(data);
    split_lines(&text, tab_width)
}

fn split_lines(text: &str, tab_width: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut index = 0usize;
    for segment in text.split('\n') {
        let raw = segment.strip_suffix('\r').unwrap_or(segment);
        lines.push(Line::new(index, raw.to_string(), tab_width));
        index += 1;
    }
    // A trailing newline produces one extra empty segment; drop it so a
    // file ending in "\n" doesn't contribute a phantom blank line beyond
    // what was actually written, matching how editors display line counts.
    if let Some(last) = lines.last()
        && last.raw_text.is_empty()
        && text.ends_with('\n')
        && lines.len() > 1
    {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_basic() {
        let lines = ingest(b"a\nb\nc\n", 8);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].raw_text, "a");
        assert_eq!(lines[2].raw_text, "c");
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn test_ingest_strips_cr() {
        let lines = ingest(b"a\r\nb\r\n", 8);
        assert_eq!(lines[0].raw_text, "a");
        assert_eq!(lines[1].raw_text, "b");
    }

    #[test]
    fn test_ingest_no_trailing_newline() {
        let lines = ingest(b"a\nb", 8);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].raw_text, "b");
    }

    #[test]
    fn test_ingest_preserves_tabs_and_blank_lines() {
        let lines = ingest(b"a\tb\n\n  \nc", 8);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_blank());
        assert!(lines[2].is_blank());
        assert!(!lines[0].is_blank());
    }

    #[test]
    fn test_ingest_latin1_fallback_never_fails() {
        let data: &[u8] = &[b'a', 0xE9, b'b', b'\n'];
        let lines = ingest(data, 8);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].raw_text.contains('é'));
    }
}
