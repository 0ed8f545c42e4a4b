//! Product URL discovery.
//!
//! Crawls each section seed once, keeps shallow product links, and subtracts
//! the profile's denylist of listing pages.
//!
//! A link counts as a product link when its `href` is relative, starts with
//! `<products>/` and does not embed `/<products>/` again: product tiles link
//! one level deep while breadcrumbs and category navigation re-embed the
//! segment. Some listing pages still pass this test; the denylist catches
//! the known ones.

use std::collections::HashSet;
use std::thread;

use dom_query::{Document, Selection};
use tracing::{error, info};

use crate::dom;
use crate::fetch::Fetch;
use crate::options::Options;
use crate::profile::{SectionSeed, SiteProfile};
use crate::selector::utils;
use crate::url_utils;

/// Discover product URLs across `seeds`.
///
/// Sections are fetched sequentially in declaration order with
/// `options.pause` between fetches. A section that fails to load contributes
/// nothing. The result has no duplicates, keeps first-seen order, and
/// contains no denylisted URL.
pub fn discover<F: Fetch + ?Sized>(
    fetcher: &F,
    seeds: &[SectionSeed],
    profile: &SiteProfile,
    options: &Options,
) -> Vec<String> {
    let mut collected = Vec::new();

    for (i, seed) in seeds.iter().enumerate() {
        if i > 0 && !options.pause.is_zero() {
            thread::sleep(options.pause);
        }
        collected.extend(collect_section(fetcher, seed, profile));
    }

    let unique = url_utils::dedup_preserving_order(collected);
    info!(total = unique.len(), "unique product URLs collected");

    filter_denylisted(unique, &profile.denylist)
}

/// Fetch one section page and return its product links.
pub fn collect_section<F: Fetch + ?Sized>(
    fetcher: &F,
    seed: &SectionSeed,
    profile: &SiteProfile,
) -> Vec<String> {
    info!(section = %seed.name, url = %seed.url, "collecting section");

    let html = match fetcher.fetch(&seed.url) {
        Ok(html) => html,
        Err(err) => {
            error!(section = %seed.name, url = %seed.url, error = %err, "section fetch failed");
            return Vec::new();
        }
    };

    let links = product_links(&dom::parse(&html), profile);
    info!(section = %seed.name, count = links.len(), "unique links found");
    links
}

/// Shallow product links on a page, resolved against the site base and
/// deduplicated in order.
#[must_use]
pub fn product_links(doc: &Document, profile: &SiteProfile) -> Vec<String> {
    let links = doc
        .select("a[href]")
        .nodes()
        .iter()
        .map(|node| utils::attr(&Selection::from(*node), "href"))
        .filter(|href| is_shallow_product_link(href, &profile.products_segment))
        .map(|href| url_utils::create_absolute_url(&href, &profile.base_url))
        .collect();

    url_utils::dedup_preserving_order(links)
}

/// `href` starts with `<segment>/` and contains no nested `/<segment>/`.
#[must_use]
pub fn is_shallow_product_link(href: &str, segment: &str) -> bool {
    let prefix = format!("{segment}/");
    let nested = format!("/{segment}/");
    href.starts_with(&prefix) && !href.contains(&nested)
}

/// Drop every URL exactly equal to a denylist entry.
#[must_use]
pub fn filter_denylisted(urls: Vec<String>, denylist: &[String]) -> Vec<String> {
    let denied: HashSet<&str> = denylist.iter().map(String::as_str).collect();
    let before = urls.len();

    let kept: Vec<String> = urls
        .into_iter()
        .filter(|url| !denied.contains(url.as_str()))
        .collect();

    info!(
        before,
        after = kept.len(),
        removed = before - kept.len(),
        "denylist applied"
    );
    kept
}
