//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use nutriscrape::{Error, Fetch, Options, Result, SiteProfile};

pub const BASE: &str = "https://www.perdigao.com.br/";

/// Serves canned HTML by URL; anything else is a 404. Records every request.
#[derive(Default)]
pub struct MapFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for MapFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| Error::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub fn profile() -> SiteProfile {
    SiteProfile::builtin().unwrap()
}

/// Default options without the inter-section pause.
pub fn options() -> Options {
    Options {
        pause: Duration::ZERO,
        ..Options::default()
    }
}

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

/// A section listing page with the given hrefs.
pub fn listing(hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!(r#"<li><a href="{href}">item</a></li>"#))
        .collect();
    format!("<html><body><ul>{links}</ul></body></html>")
}

/// A product page in the site's markup.
pub fn product_page(name: &str, portion_cell: &str, rows: &[(&str, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<tr><td class="nutricional-table-row">{label}</td><td class="nutricional-table-row">{value}</td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body>
            <header><h1>Perdigão</h1></header>
            <h1 class="product-title">{name}</h1>
            <table class="nutricional-table">
              <tr><td class="nutricional-table-title" colspan="2">{portion_cell}</td></tr>
              {rows}
            </table>
        </body></html>"#
    )
}
