//! URL Utility Functions
//!
//! Resolution of relative links, path segment access and the small string
//! helpers discovery and category derivation need.

use std::collections::HashSet;

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Convert a relative or absolute URL to absolute form.
///
/// # Arguments
/// * `url_str` - The URL to resolve (can be relative or absolute)
/// * `base` - The base URL for resolution
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if is_absolute_url(url_str) {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Non-empty path segments of a URL.
///
/// Strings that do not parse as absolute URLs are treated as bare paths.
#[must_use]
pub fn path_segments(url_str: &str) -> Vec<String> {
    match Url::parse(url_str) {
        Ok(url) => url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        Err(_) => url_str
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Title-case a slug: every letter that follows a non-letter is uppercased,
/// every other letter is lowercased (`pratos-prontos` → `Pratos-Prontos`).
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Remove duplicates keeping the first occurrence of each URL.
#[must_use]
pub fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    let mut unique = urls;
    unique.retain(|url| seen.insert(url.clone()));
    unique
}
