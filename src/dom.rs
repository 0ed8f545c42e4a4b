//! DOM helpers.
//!
//! Thin helpers over the `dom_query` crate used by the selector rules and the
//! extractor.

pub use dom_query::{Document, Selection};

/// Parse an HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<html>` element, root for descendant queries.
///
/// html5ever always synthesizes this element, even for fragments.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// Attribute value, if present.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Lowercase tag name of the first node.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Text content with runs of whitespace collapsed to single spaces and the
/// ends trimmed.
///
/// Markup like `Valor Energético<br/> (kcal)` or `&nbsp;`-padded cells reads
/// the same as its plain form.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    sel.text().split_whitespace().collect::<Vec<_>>().join(" ")
}
