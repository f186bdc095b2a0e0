//! Encoding detection and decoding: UTF-8 primary, Latin-1 fallback.
//!
//! Per spec, the Ingestor never fails on encoding — UTF-8 is tried first,
//! and anything that doesn't validate is decoded as Latin-1 (ISO-8859-1),
//! using `encoding_rs`'s `WINDOWS_1252` decoder as the conventional
//! stand-in (the WHATWG encoding standard maps the `latin1`/`iso-8859-1`
//! labels to windows-1252, which is a strict superset of true Latin-1).

use simdutf8::basic::from_utf8;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
///
/// The UTF-8 BOM is the byte sequence: EF BB BF
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xEF && data[1] == 0xBB && data[2] == 0xBF
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Which encoding a decode actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

/// Decode bytes to a `String`, preferring UTF-8 and falling back to
/// Latin-1. This never fails — Latin-1 (via Windows-1252) can represent
/// every byte value, so the fallback always succeeds.
pub fn decode(data: &[u8]) -> (String, Encoding) {
    let data = skip_bom(data);
    if is_utf8(data) {
        // SAFETY-free path: we just validated it.
        (String::from_utf8_lossy(data).into_owned(), Encoding::Utf8)
    } else {
        let (decoded, _, _had_errors) = encoding_rs::WINDOWS_1252.decode(data);
        (decoded.into_owned(), Encoding::Latin1)
    }
}
