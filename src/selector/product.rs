//! Product Page Selectors
//!
//! Rules locating the product heading and the nutritional facts table. The
//! class names come from the site profile.

use dom_query::Selection;

use crate::profile::MarkupClasses;
use crate::selector::utils::{has_class, is_tag};

/// `h1` carrying the product-title class.
#[must_use]
pub fn is_product_title(sel: &Selection, markup: &MarkupClasses) -> bool {
    is_tag(sel, "h1") && has_class(sel, &markup.product_title_class)
}

/// Any `h1`, used when the classed heading is missing.
#[must_use]
pub fn is_heading(sel: &Selection) -> bool {
    is_tag(sel, "h1")
}

/// The nutritional facts table.
#[must_use]
pub fn is_nutrition_table(sel: &Selection, markup: &MarkupClasses) -> bool {
    is_tag(sel, "table") && has_class(sel, &markup.table_class)
}

/// A title cell of the table (holds the portion line).
#[must_use]
pub fn is_title_cell(sel: &Selection, markup: &MarkupClasses) -> bool {
    is_tag(sel, "td") && has_class(sel, &markup.title_cell_class)
}

/// A label or value cell of a table row.
#[must_use]
pub fn is_row_cell(sel: &Selection, markup: &MarkupClasses) -> bool {
    is_tag(sel, "td") && has_class(sel, &markup.row_cell_class)
}
