//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset comes from a BOM, or from a meta
//! declaration when that decodes cleanly; otherwise strict UTF-8, GB18030
//! (covering GBK and GB2312) and windows-1252 are tried in that order. The
//! outcome is reported explicitly instead of being silently guessed.

use std::sync::LazyLock;

use encoding_rs::{Encoding, GB18030, UTF_8, WINDOWS_1252};
use regex::Regex;
use tracing::{debug, warn};

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// How the encoding was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    /// Byte order mark.
    Bom,
    /// `<meta charset>` or `http-equiv` declaration.
    Declared,
    /// First fallback candidate that decoded without errors.
    Sniffed,
}

/// Decoded page text plus how it was obtained.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// UTF-8 text.
    pub text: String,
    /// Encoding that produced `text`.
    pub encoding: &'static Encoding,
    /// Detection path.
    pub source: EncodingSource,
    /// Whether malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Detect a declared character encoding from HTML bytes.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">`
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
///
/// Only examines the first 1024 bytes.
#[must_use]
pub fn detect_declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .or_else(|| {
            extract_content_type_charset(&head_str)
                .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        })
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes into UTF-8 text.
///
/// # Examples
///
/// ```
/// use rs_htmlextract::encoding::{decode_html, EncodingSource};
///
/// let decoded = decode_html(b"<html><body>Hello</body></html>");
/// assert_eq!(decoded.text, "<html><body>Hello</body></html>");
/// assert_eq!(decoded.source, EncodingSource::Sniffed);
/// assert!(!decoded.had_errors);
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Decoded {
    if let Some((encoding, bom_len)) = Encoding::for_bom(html) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&html[bom_len..]);
        return finish(text.into_owned(), encoding, EncodingSource::Bom, had_errors);
    }

    // A meta tag cannot declare UTF-16; such labels mean UTF-8.
    if let Some(encoding) = detect_declared_encoding(html).map(Encoding::output_encoding) {
        match encoding.decode_without_bom_handling_and_without_replacement(html) {
            Some(text) => {
                return finish(text.into_owned(), encoding, EncodingSource::Declared, false)
            }
            None => debug!(declared = encoding.name(), "declared charset does not fit, sniffing"),
        }
    }

    for encoding in [UTF_8, GB18030] {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(html) {
            return finish(text.into_owned(), encoding, EncodingSource::Sniffed, false);
        }
    }

    // windows-1252 maps every byte
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(html);
    finish(text.into_owned(), WINDOWS_1252, EncodingSource::Sniffed, had_errors)
}

fn finish(
    text: String,
    encoding: &'static Encoding,
    source: EncodingSource,
    had_errors: bool,
) -> Decoded {
    if had_errors {
        warn!(encoding = encoding.name(), ?source, "page decoded with replacement characters");
    }
    Decoded {
        text,
        encoding,
        source,
        had_errors,
    }
}

/// Undo UTF-8 text that was mis-decoded as Latin-1.
///
/// Returns the repaired string when every character fits in one Latin-1 byte,
/// those bytes form valid UTF-8, and the result differs from the input.
/// Returns `None` when there is nothing to repair.
///
/// # Examples
///
/// ```
/// use rs_htmlextract::encoding::repair_mojibake;
///
/// assert_eq!(repair_mojibake("CafÃ©"), Some("Café".to_string()));
/// assert_eq!(repair_mojibake("Café"), None);
/// assert_eq!(repair_mojibake("plain"), None);
/// ```
#[must_use]
pub fn repair_mojibake(text: &str) -> Option<String> {
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<_>>()?;

    let repaired = String::from_utf8(bytes).ok()?;
    (repaired != text).then_some(repaired)
}

/// [`repair_mojibake`], falling back to the input.
#[must_use]
pub fn repair_or_keep(text: &str) -> String {
    repair_mojibake(text).unwrap_or_else(|| text.to_string())
}
