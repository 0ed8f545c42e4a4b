//! Markup queries.
//!
//! Rules are predicates over a `Selection` used to locate product markup.
//! They take the site's class names through captures, so queries accept
//! closures rather than function pointers.
//! Field values are read through ordered strategy chains: each strategy is
//! tried in turn until one produces a non-empty value.

use dom_query::{Document, Selection};

pub mod product;
pub mod utils;

/// First descendant of `root`, in document order, that satisfies `rule`.
///
/// # Example
///
/// ```rust
/// use nutriscrape::selector::{self, utils};
/// use nutriscrape::dom;
///
/// let doc = dom::parse(r#"<table class="nutricional-table"><tr><td>Sódio</td></tr></table>"#);
/// let root = dom::root(&doc);
///
/// let table = selector::query(&root, |sel| utils::has_class(sel, "nutricional-table"));
/// assert!(table.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: impl Fn(&Selection<'a>) -> bool) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Every descendant of `root` that satisfies `rule`, in document order.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: impl Fn(&Selection<'a>) -> bool) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// One way of reading a field value out of a document.
pub type Strategy<'p> = Box<dyn Fn(&Document) -> Option<String> + 'p>;

/// Run strategies in order and return the first non-empty value.
#[must_use]
pub fn first_match(doc: &Document, strategies: &[Strategy<'_>]) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| strategy(doc).filter(|value| !value.trim().is_empty()))
}
