//! Numeric-token recognition for the Block Statistician (§4.5).
//!
//! Mirrors the teacher's hot-path string checks in `tum/type_detection.rs`
//! (`is_unsigned_int`, `is_signed_int`) rather than one monolithic regex,
//! falling back to a compiled pattern only for the general decimal/exponent
//! case.

use std::sync::LazyLock;

use regex::Regex;

/// Numbers with a decimal point and/or an exponent, e.g. `-5.1`, `3.0e-4`,
/// `.5`, `5.`.
static DECIMAL_OR_EXPONENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.\d*|\.\d+|\d+)([eE][+-]?\d+)?$").expect("valid numeric pattern")
});

/// Values treated as "numeric-like missing": they don't look like a number
/// syntactically, but in a numeric column they stand in for one.
fn is_numeric_like_missing(s: &str) -> bool {
    matches!(s, "NaN" | "nan" | "NAN" | "na" | "NA" | "Na" | "-" | "–")
}

fn is_plain_integer(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True if `token` matches the numeric pattern from §4.5: optional sign,
/// integer or decimal mantissa, optional exponent — or one of the
/// numeric-like missing-value tokens.
pub fn is_numeric(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if is_numeric_like_missing(token) {
        return true;
    }
    if is_plain_integer(token) {
        return true;
    }
    DECIMAL_OR_EXPONENT_PATTERN.is_match(token)
}

/// Fraction of tokens in `tokens` that are numeric (or numeric-like
/// missing). Returns 0.0 for an empty slice.
pub fn numeric_ratio<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let numeric = tokens.iter().filter(|t| is_numeric(t.as_ref())).count();
    numeric as f64 / tokens.len() as f64
}
