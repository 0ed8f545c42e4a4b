//! Response body decoding.
//!
//! Catalog pages carry accented labels (`Sódio`, `Açúcares`) that must reach
//! the synonym table intact, so bodies are decoded with the charset the
//! server or the page declares before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match the `charset=` parameter of a Content-Type value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Pick the body encoding.
///
/// Order: the `Content-Type` header's charset, then a `<meta>` declaration in
/// the first 1024 bytes, then UTF-8.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    let from_header = content_type
        .and_then(|ct| CONTENT_TYPE_PARAM_RE.captures(ct))
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to UTF-8, replacing invalid sequences with U+FFFD.
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
