//! Product records.
//!
//! A [`ProductRecord`] always has every nutritional field and a portion: the
//! builder normalizes what the extractor found and backfills the rest, so a
//! record is never partially shaped.

use dom_query::Document;
use tracing::{info, warn};

use crate::dom;
use crate::extractor::{self, DEFAULT_PORTION};
use crate::field::Field;
use crate::normalize::{normalize, MISSING_VALUE};
use crate::options::Options;
use crate::profile::SiteProfile;

/// One product's row of the dataset. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    name: String,
    url: String,
    category: Option<String>,
    portion: String,
    nutrients: [String; 8],
}

impl ProductRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Category, when the run derives it.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Portion in grams, without the unit.
    #[must_use]
    pub fn portion(&self) -> &str {
        &self.portion
    }

    /// Value of a column, `None` only for a category the run did not derive.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::NomeProduto => Some(&self.name),
            Field::Url => Some(&self.url),
            Field::Categoria => self.category.as_deref(),
            Field::Porcao => Some(&self.portion),
            _ => field
                .nutrient_index()
                .map(|i| self.nutrients[i].as_str()),
        }
    }
}

/// Build the record for a parsed product page.
///
/// Total: every sub-step degrades to a sentinel or default.
#[must_use]
pub fn build(url: &str, doc: &Document, profile: &SiteProfile, options: &Options) -> ProductRecord {
    let mut raw = extractor::extract(doc, profile);

    let name = raw
        .remove(&Field::NomeProduto)
        .unwrap_or_else(|| profile.name_sentinel.clone());
    let portion_raw = raw
        .remove(&Field::Porcao)
        .unwrap_or_else(|| DEFAULT_PORTION.to_string());
    let portion = normalize(&portion_raw, Field::Porcao);

    let category = options
        .include_category
        .then(|| extractor::extract_category(url, profile));

    let nutrients = Field::NUTRIENTS.map(|field| match raw.get(&field) {
        Some(value) => normalize(value, field),
        None => {
            warn!(url = %url, field = %field, "field not found, defaulting to {MISSING_VALUE}");
            MISSING_VALUE.to_string()
        }
    });

    info!(url = %url, name = %name, "product scraped");

    ProductRecord {
        name,
        url: url.to_string(),
        category,
        portion,
        nutrients,
    }
}

/// Build the record from page HTML.
#[must_use]
pub fn build_from_html(url: &str, html: &str, profile: &SiteProfile, options: &Options) -> ProductRecord {
    build(url, &dom::parse(html), profile, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.perdigao.com.br/produtos/empanados/todos-os-empanados/steak-recheado-100g/";

    fn profile() -> SiteProfile {
        SiteProfile::builtin().unwrap()
    }

    #[test]
    fn page_without_table_is_fully_defaulted() {
        let record = build_from_html(URL, "<html><body><p>sem tabela</p></body></html>", &profile(), &Options::default());
        assert_eq!(record.name(), "Nome não encontrado");
        assert_eq!(record.portion(), "100");
        for field in Field::NUTRIENTS {
            assert_eq!(record.get(field), Some("0"), "{field}");
        }
        assert_eq!(record.category(), Some("Empanados"));
    }

    #[test]
    fn values_are_normalized() {
        let html = r#"
            <h1 class="product-title">Steak Recheado</h1>
            <table class="nutricional-table">
              <tr><td class="nutricional-table-title">Porção 100g</td></tr>
              <tr><td class="nutricional-table-row">Valor Energético (kcal)</td><td class="nutricional-table-row">235 = 987</td></tr>
              <tr><td class="nutricional-table-row">Proteínas (g)</td><td class="nutricional-table-row">12,4 g</td></tr>
              <tr><td class="nutricional-table-row">Fibra Alimentar (g)</td><td class="nutricional-table-row">1,1 g</td></tr>
            </table>
        "#;
        let record = build_from_html(URL, html, &profile(), &Options::default());
        assert_eq!(record.name(), "Steak Recheado");
        assert_eq!(record.url(), URL);
        assert_eq!(record.portion(), "100");
        assert_eq!(record.get(Field::Calorias), Some("235"));
        assert_eq!(record.get(Field::Proteinas), Some("12.4"));
        assert_eq!(record.get(Field::Fibras), Some("1.1"));
        assert_eq!(record.get(Field::Sodio), Some("0"));
    }

    #[test]
    fn category_omitted_when_disabled() {
        let options = Options {
            include_category: false,
            ..Options::default()
        };
        let record = build_from_html(URL, "<h1>x</h1>", &profile(), &options);
        assert_eq!(record.category(), None);
        assert_eq!(record.get(Field::Categoria), None);
    }

    #[test]
    fn get_covers_every_column() {
        let record = build_from_html(URL, "<h1>x</h1>", &profile(), &Options::default());
        for field in Field::COLUMNS {
            assert!(record.get(field).is_some(), "{field}");
        }
    }
}
