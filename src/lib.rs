//! # nutriscrape
//!
//! Crawls a food catalog site for product pages and extracts each product's
//! nutritional facts table into a CSV dataset.
//!
//! The pipeline has two stages that communicate through files:
//!
//! 1. **Discovery** fetches every section seed of a [`SiteProfile`], keeps
//!    shallow product links, deduplicates them in first-seen order and drops
//!    known listing pages. The result is saved as a JSON URL list.
//! 2. **Extraction** fetches each product page, reads the name, portion and
//!    nutritional rows, normalizes the values and assembles a [`Dataset`]
//!    with a fixed column order.
//!
//! Missing markup never fails a page: every field degrades to a sentinel or
//! default, so each [`ProductRecord`] is complete. Only fetch failures drop a
//! page or section, and they never abort the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use nutriscrape::{build_record, Field, Options, SiteProfile};
//!
//! let profile = SiteProfile::builtin()?;
//! let html = r#"
//!   <h1 class="product-title">Mini Chicken</h1>
//!   <table class="nutricional-table">
//!     <tr><td class="nutricional-table-row">Valor Energético (kcal)</td>
//!         <td class="nutricional-table-row">236 kcal</td></tr>
//!   </table>"#;
//!
//! let record = build_record(
//!     "https://www.perdigao.com.br/produtos/empanados/mini-chicken/",
//!     html,
//!     &profile,
//!     &Options::default(),
//! );
//! assert_eq!(record.name(), "Mini Chicken");
//! assert_eq!(record.get(Field::Calorias), Some("236"));
//! assert_eq!(record.get(Field::Fibras), Some("0"));
//! # Ok::<(), nutriscrape::Error>(())
//! ```
//!
//! ## Logging
//!
//! Components emit `tracing` events and never install a subscriber. Callers
//! decide where events go: the binary installs a global one, tests can scope
//! one to a closure with `tracing::subscriber::with_default`.

mod error;
mod field;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector rules and strategy chains for product markup.
pub mod selector;

/// Site profiles: seeds, denylist, markup classes, label synonyms.
pub mod profile;

/// Value normalization.
pub mod normalize;

/// Raw field extraction from product pages.
pub mod extractor;

/// Product record construction.
pub mod record;

/// Product URL discovery and filtering.
pub mod discovery;

/// Dataset assembly and CSV output.
pub mod dataset;

/// Page fetching.
pub mod fetch;

/// Response body decoding.
pub mod encoding;

/// URL utilities.
pub mod url_utils;

/// URL list, dataset and snapshot files.
pub mod artifact;

// Public API - re-exports
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use field::Field;
pub use normalize::normalize;
pub use options::Options;
pub use profile::{SectionSeed, SiteProfile};
pub use record::ProductRecord;

/// Discover product URLs from all sections of `profile`.
///
/// See [`discovery::discover`] to crawl a custom list of seeds.
pub fn discover<F: Fetch + ?Sized>(fetcher: &F, profile: &SiteProfile, options: &Options) -> Vec<String> {
    discovery::discover(fetcher, &profile.sections, profile, options)
}

/// Extract every URL in order into a dataset, skipping pages that fail to load.
pub fn extract_all<F: Fetch + ?Sized>(
    fetcher: &F,
    urls: &[String],
    profile: &SiteProfile,
    options: &Options,
) -> Dataset {
    dataset::run(fetcher, urls, profile, options)
}

/// Build a product record from page HTML without touching the network.
#[must_use]
pub fn build_record(url: &str, html: &str, profile: &SiteProfile, options: &Options) -> ProductRecord {
    record::build_from_html(url, html, profile, options)
}
