//! Compiled regex patterns shared by the extractor and the normalizer.
//!
//! All patterns are compiled once on first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// First decimal number: ASCII digits with at most one `,` or `.` separator.
pub static NUMBER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").expect("NUMBER_RUN regex"));

/// Portion size in grams inside a title cell, e.g. `Porção 100g`.
pub static PORTION_GRAMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+g)").expect("PORTION_GRAMS regex"));

/// Characters that separate a second number from the kcal value in malformed
/// energy cells (`235 = 987`, `235/987`).
pub const CALORIE_SEPARATORS: &[char] = &['=', '\\', '/', '|', '&', '%', '#'];
