//! The Template Classifier (§4.2): Standard vs. Non-Standard file.

use crate::line::Line;

/// How many leading lines the classifier inspects.
pub const SCAN_WINDOW: usize = 200;

/// The minimum sentinel vocabulary from §4.2. Expandable per-corpus via
/// `TableParser::sentinel_vocabulary` (§9 Open Question #1).
pub fn default_sentinel_vocabulary() -> Vec<String> {
    ["Site_Name", "Variables", "Data", "Title", "Investigators"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// The classifier's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Standard,
    NonStandard,
}

/// Classify a line stream as Standard or Non-Standard by scanning the
/// first `SCAN_WINDOW` lines for a template sentinel.
pub fn classify(lines: &[Line], vocabulary: &[String]) -> FileKind {
    let window = lines.iter().take(SCAN_WINDOW);
    for line in window {
        if is_sentinel_line(&line.raw_text, vocabulary) {
            return FileKind::Standard;
        }
    }
    FileKind::NonStandard
}

fn is_sentinel_line(raw: &str, vocabulary: &[String]) -> bool {
    if raw.starts_with("##") {
        return true;
    }
    let Some(rest) = raw.strip_prefix("# ") else {
        return false;
    };
    let Some(first_token) = rest.split_whitespace().next() else {
        return false;
    };
    // Section headers are often written "# Variables" or "# Site_Name:" —
    // tolerate a trailing colon.
    let first_token = first_token.trim_end_matches(':');
    vocabulary.iter().any(|v| v == first_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_from(text: &str) -> Vec<Line> {
        text.split('\n')
            .enumerate()
            .map(|(i, s)| Line::new(i, s.to_string(), 8))
            .collect()
    }

    #[test]
    fn test_standard_via_double_hash() {
        let lines = lines_from("## age\tage\tC\nfoo");
        let vocab = default_sentinel_vocabulary();
        assert_eq!(classify(&lines, &vocab), FileKind::Standard);
    }

    #[test]
    fn test_standard_via_vocabulary_word() {
        let lines = lines_from("# Contribution_Date\n# Variables\ndata here");
        let vocab = default_sentinel_vocabulary();
        assert_eq!(classify(&lines, &vocab), FileKind::Standard);
    }

    #[test]
    fn test_non_standard_plain_text() {
        let lines = lines_from("Depth  Age  d18O\n1  2  3\n");
        let vocab = default_sentinel_vocabulary();
        assert_eq!(classify(&lines, &vocab), FileKind::NonStandard);
    }

    #[test]
    fn test_non_standard_unrecognized_comment() {
        let lines = lines_from("# just a remark, not a section header\ndata\n");
        let vocab = default_sentinel_vocabulary();
        assert_eq!(classify(&lines, &vocab), FileKind::NonStandard);
    }

    #[test]
    fn test_only_scans_first_window() {
        let mut text = String::new();
        for _ in 0..SCAN_WINDOW + 5 {
            text.push_str("plain line\n");
        }
        text.push_str("# Variables\n");
        let lines = lines_from(&text);
        let vocab = default_sentinel_vocabulary();
        assert_eq!(classify(&lines, &vocab), FileKind::NonStandard);
    }
}
