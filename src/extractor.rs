//! Field extraction from product pages.
//!
//! Reads the raw, unnormalized text of each canonical field. Nothing here
//! fails: a missing heading, portion cell or table degrades to the profile's
//! sentinel or to a documented default, and the record builder fills the
//! rest.

use std::collections::BTreeMap;

use dom_query::{Document, Selection};
use tracing::{debug, info, warn};

use crate::dom;
use crate::field::Field;
use crate::patterns::PORTION_GRAMS;
use crate::profile::SiteProfile;
use crate::selector::{self, product, Strategy};
use crate::url_utils;

/// Portion reported when the table has no readable portion line.
pub const DEFAULT_PORTION: &str = "100g";

/// Fiber value assumed when the table omits the fiber row.
pub const OMITTED_FIBER: &str = "0 g";

/// Canonical field → raw text as found in the markup.
pub type RawFields = BTreeMap<Field, String>;

/// Extract every page-derived field: product name, portion and the
/// nutritional rows.
#[must_use]
pub fn extract(doc: &Document, profile: &SiteProfile) -> RawFields {
    let mut fields = extract_nutrients(doc, profile);
    fields.insert(Field::NomeProduto, extract_product_name(doc, profile));
    fields.insert(Field::Porcao, extract_portion(doc, profile));
    fields
}

// ============================================================
// PRODUCT NAME
// ============================================================

/// Strategies for the product name, in priority order.
#[must_use]
pub fn name_strategies(profile: &SiteProfile) -> Vec<Strategy<'_>> {
    vec![
        Box::new(move |doc: &Document| classed_heading(doc, profile)),
        Box::new(first_heading),
    ]
}

/// Product name, or the profile's name sentinel when the page has no heading.
#[must_use]
pub fn extract_product_name(doc: &Document, profile: &SiteProfile) -> String {
    selector::first_match(doc, &name_strategies(profile)).unwrap_or_else(|| {
        warn!("product name not found");
        profile.name_sentinel.clone()
    })
}

/// Text of the `h1` carrying the product-title class.
#[must_use]
pub fn classed_heading(doc: &Document, profile: &SiteProfile) -> Option<String> {
    selector::query(&dom::root(doc), |sel| product::is_product_title(sel, &profile.markup))
        .map(|h1| dom::clean_text(&h1))
}

/// Text of the first `h1` on the page.
#[must_use]
pub fn first_heading(doc: &Document) -> Option<String> {
    selector::query(&dom::root(doc), product::is_heading).map(|h1| dom::clean_text(&h1))
}

// ============================================================
// PORTION
// ============================================================

/// Portion size such as `"100g"`, defaulting to [`DEFAULT_PORTION`].
#[must_use]
pub fn extract_portion(doc: &Document, profile: &SiteProfile) -> String {
    let strategies: Vec<Strategy<'_>> =
        vec![Box::new(move |doc: &Document| portion_from_title_cells(doc, profile))];

    selector::first_match(doc, &strategies).unwrap_or_else(|| {
        debug!("portion not found, using {DEFAULT_PORTION}");
        DEFAULT_PORTION.to_string()
    })
}

/// First `<digits>g` in a title cell mentioning the portion label.
///
/// Cells whose text mentions the label but carries no gram figure are
/// skipped in favor of later cells.
#[must_use]
pub fn portion_from_title_cells(doc: &Document, profile: &SiteProfile) -> Option<String> {
    selector::query_all(&dom::root(doc), |sel| product::is_title_cell(sel, &profile.markup))
        .iter()
        .map(dom::clean_text)
        .filter(|text| text.contains(profile.portion_label.as_str()))
        .find_map(|text| PORTION_GRAMS.captures(&text).map(|caps| caps[1].to_string()))
}

// ============================================================
// NUTRITIONAL TABLE
// ============================================================

/// Map a table label to its canonical field.
///
/// The energy label wins over the synonym table; unknown labels map to
/// nothing.
#[must_use]
pub fn classify_label(label: &str, profile: &SiteProfile) -> Option<Field> {
    if profile.is_energy_label(label) {
        return Some(Field::Calorias);
    }
    profile.nutrient_labels.get(label).copied()
}

/// Read the nutritional rows.
///
/// Returns an empty map when the page has no nutritional table. When the
/// table exists but has no fiber row, fiber is recorded as [`OMITTED_FIBER`];
/// the site drops that row when the value is zero.
#[must_use]
pub fn extract_nutrients(doc: &Document, profile: &SiteProfile) -> RawFields {
    let mut fields = RawFields::new();

    let Some(table) =
        selector::query(&dom::root(doc), |sel| product::is_nutrition_table(sel, &profile.markup))
    else {
        warn!("nutritional table not found");
        return fields;
    };

    for node in table.select("tr").nodes() {
        let row = Selection::from(*node);
        let cells = selector::query_all(&row, |sel| product::is_row_cell(sel, &profile.markup));
        if cells.len() < 2 {
            continue;
        }

        let label = dom::clean_text(&cells[0]);
        let value = dom::clean_text(&cells[1]);

        match classify_label(&label, profile) {
            Some(field) => {
                debug!(label = %label, value = %value, field = %field, "extracted");
                fields.insert(field, value);
            }
            None => debug!(label = %label, "ignoring unrecognized label"),
        }
    }

    if !fields.contains_key(&Field::Fibras) {
        info!("dietary fiber row missing, recording {OMITTED_FIBER}");
        fields.insert(Field::Fibras, OMITTED_FIBER.to_string());
    }

    fields
}

// ============================================================
// CATEGORY
// ============================================================

/// Category from the URL path: the segment right after the products segment,
/// title-cased.
///
/// `https://www.perdigao.com.br/produtos/pratos-prontos/lasanhas/x/` gives
/// `Pratos-Prontos`; URLs without that shape give the category sentinel.
#[must_use]
pub fn extract_category(url: &str, profile: &SiteProfile) -> String {
    let segments = url_utils::path_segments(url);

    segments
        .iter()
        .position(|segment| *segment == profile.products_segment)
        .and_then(|i| segments.get(i + 1))
        .map_or_else(
            || profile.category_sentinel.clone(),
            |segment| url_utils::title_case(segment),
        )
}
