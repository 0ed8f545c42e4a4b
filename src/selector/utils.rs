//! Element accessors for selector rules.
//!
//! Missing attributes read as empty strings so rules stay one-liners.

use dom_query::Selection;

use crate::dom;

/// The raw `class` attribute.
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    attr(sel, "class")
}

#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Whether one of the element's class tokens equals `name`.
///
/// Token match, not substring: `nutricional-table` does not match an
/// element classed `nutricional-table-row`.
///
/// # Example
///
/// ```rust
/// use nutriscrape::selector::utils;
/// use nutriscrape::dom;
///
/// let doc = dom::parse(r#"<h1 class="title product-title">Name</h1>"#);
/// let h1 = doc.select("h1");
///
/// assert!(utils::has_class(&h1, "product-title"));
/// assert!(!utils::has_class(&h1, "product"));
/// ```
#[must_use]
pub fn has_class(sel: &Selection, name: &str) -> bool {
    class(sel).split_whitespace().any(|token| token == name)
}

#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}
