//! Site profiles.
//!
//! Everything that ties the pipeline to one catalog site lives here as data:
//! section seeds, the denylist of listing pages, the CSS classes that mark the
//! nutritional table, and the label synonym table. The built-in profile for
//! perdigao.com.br is embedded from `profiles/perdigao.json`; other sites can
//! be described by a JSON file with the same shape.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::field::Field;

const BUILTIN_PROFILE: &str = include_str!("../profiles/perdigao.json");

/// A named entry point for one catalog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSeed {
    pub name: String,
    pub url: String,
}

impl SectionSeed {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Class names identifying the product markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupClasses {
    /// Class of the `h1` holding the product name.
    pub product_title_class: String,
    /// Class of the nutritional facts `table`.
    pub table_class: String,
    /// Class of the `td` cells holding table titles (the portion line).
    pub title_cell_class: String,
    /// Class of the `td` cells holding label/value pairs.
    pub row_cell_class: String,
}

/// On-disk representation of a profile.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    name: String,
    base_url: String,
    products_segment: String,
    dataset_prefix: String,
    sections: Vec<SectionSeed>,
    #[serde(default)]
    denylist: Vec<String>,
    markup: MarkupClasses,
    portion_label: String,
    energy_label: String,
    nutrient_labels: HashMap<String, Field>,
    name_sentinel: String,
    category_sentinel: String,
}

/// Static configuration for one catalog site, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub name: String,
    /// Base used to resolve relative product links.
    pub base_url: Url,
    /// Literal path segment under which products live (`produtos`).
    pub products_segment: String,
    /// Prefix of generated dataset file names.
    pub dataset_prefix: String,
    /// Sections to crawl, in declaration order.
    pub sections: Vec<SectionSeed>,
    /// Listing pages that slip through the shallow-link heuristic.
    pub denylist: Vec<String>,
    pub markup: MarkupClasses,
    /// Word that marks the portion title cell (`Porção`).
    pub portion_label: String,
    /// Exact table labels mapped to nutritional fields.
    pub nutrient_labels: HashMap<String, Field>,
    /// Reported when the page has no usable heading.
    pub name_sentinel: String,
    /// Reported when the URL has no category segment.
    pub category_sentinel: String,
    energy_label: String,
    energy_pattern: Regex,
}

impl SiteProfile {
    /// The embedded perdigao.com.br profile.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PROFILE)
    }

    /// Load a profile from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text)
    }

    /// Parse and validate a profile from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: ProfileFile = serde_json::from_str(text)?;

        let base_url = Url::parse(&file.base_url).map_err(|source| Error::InvalidUrl {
            url: file.base_url.clone(),
            source,
        })?;

        for seed in &file.sections {
            Url::parse(&seed.url).map_err(|source| Error::InvalidUrl {
                url: seed.url.clone(),
                source,
            })?;
        }

        if file.products_segment.is_empty() || file.products_segment.contains('/') {
            return Err(Error::Profile(format!(
                "products_segment must be a single path segment, got {:?}",
                file.products_segment
            )));
        }

        if let Some((label, field)) = file
            .nutrient_labels
            .iter()
            .find(|(_, field)| !field.is_nutrient())
        {
            return Err(Error::Profile(format!(
                "label {label:?} maps to {field}, which is not a nutritional field"
            )));
        }

        let energy_pattern = energy_label_pattern(&file.energy_label)?;

        Ok(Self {
            name: file.name,
            base_url,
            products_segment: file.products_segment,
            dataset_prefix: file.dataset_prefix,
            sections: file.sections,
            denylist: file.denylist,
            markup: file.markup,
            portion_label: file.portion_label,
            nutrient_labels: file.nutrient_labels,
            name_sentinel: file.name_sentinel,
            category_sentinel: file.category_sentinel,
            energy_label: file.energy_label,
            energy_pattern,
        })
    }

    /// The energy label as configured (`Valor Energético`).
    #[must_use]
    pub fn energy_label(&self) -> &str {
        &self.energy_label
    }

    /// Whether a table label names the energy value.
    ///
    /// Matches the configured label case-insensitively, tolerating extra
    /// whitespace and an optional trailing parenthetical such as `(kcal)` or
    /// `(kcal/kJ)`.
    #[must_use]
    pub fn is_energy_label(&self, label: &str) -> bool {
        self.energy_pattern.is_match(label)
    }
}

/// Build the energy-label matcher: `^\s*Word\s+Word\s*(\(.*\))?\s*$`, case-insensitive.
fn energy_label_pattern(label: &str) -> Result<Regex> {
    let words: Vec<String> = label.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return Err(Error::Profile("energy_label must not be empty".to_string()));
    }
    let pattern = format!(r"(?i)^\s*{}\s*(\(.*\))?\s*$", words.join(r"\s+"));
    Regex::new(&pattern).map_err(|e| Error::Profile(format!("energy_label pattern: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profile_loads() {
        let profile = SiteProfile::builtin().unwrap();
        assert_eq!(profile.name, "perdigao");
        assert_eq!(profile.base_url.as_str(), "https://www.perdigao.com.br/");
        assert_eq!(profile.sections.len(), 12);
        assert_eq!(profile.sections[0].name, "EMPANADOS");
        assert_eq!(profile.sections[11].name, "PERU");
        assert!(profile
            .denylist
            .contains(&"https://www.perdigao.com.br/produtos/frios/salame".to_string()));
        assert_eq!(profile.nutrient_labels.get("Sódio (mg)"), Some(&Field::Sodio));
        assert_eq!(profile.nutrient_labels.len(), 7);
    }

    #[test]
    fn energy_label_tolerates_qualifiers_case_and_spacing() {
        let profile = SiteProfile::builtin().unwrap();
        assert!(profile.is_energy_label("Valor Energético"));
        assert!(profile.is_energy_label("Valor Energético (kcal)"));
        assert!(profile.is_energy_label("valor  energético(kcal/kJ)"));
        assert!(profile.is_energy_label("  VALOR ENERGÉTICO ( kcal ) "));
        assert!(!profile.is_energy_label("Valor Energético total"));
        assert!(!profile.is_energy_label("Valor"));
    }

    #[test]
    fn rejects_non_nutrient_synonym_targets() {
        let json = BUILTIN_PROFILE.replace(r#""Sódio (mg)": "SODIO""#, r#""Sódio (mg)": "URL""#);
        let err = SiteProfile::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::Profile(_)));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let json = BUILTIN_PROFILE.replace("\"https://www.perdigao.com.br/\"", "\"not a url\"");
        let err = SiteProfile::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_nested_products_segment() {
        let json = BUILTIN_PROFILE.replace(r#""products_segment": "produtos""#, r#""products_segment": "a/b""#);
        let err = SiteProfile::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::Profile(_)));
    }
}
