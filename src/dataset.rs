//! Dataset assembly.
//!
//! Drives extraction over a URL list and owns the column order of the
//! output: the fixed [`Field::COLUMNS`] order, restricted to columns that at
//! least one record populates.

use std::io;

use tracing::{error, info};

use crate::error::Result;
use crate::fetch::Fetch;
use crate::field::Field;
use crate::options::Options;
use crate::profile::SiteProfile;
use crate::record::{self, ProductRecord};

/// Ordered collection of product records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<ProductRecord>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Output columns: fixed order, only those some record populates.
    #[must_use]
    pub fn columns(&self) -> Vec<Field> {
        Field::COLUMNS
            .into_iter()
            .filter(|field| self.records.iter().any(|r| r.get(*field).is_some()))
            .collect()
    }

    /// Rows projected onto [`Dataset::columns`]; unpopulated cells are empty.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        let columns = self.columns();
        self.records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|field| record.get(*field).unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }

    /// Write the dataset as CSV: a header row of column labels, then one row
    /// per record. An empty dataset writes nothing.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let columns = self.columns();
        let mut csv = csv::Writer::from_writer(writer);

        if !columns.is_empty() {
            csv.write_record(columns.iter().map(|field| field.header()))?;
            for row in self.rows() {
                csv.write_record(&row)?;
            }
        }

        csv.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

impl FromIterator<ProductRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Fetch and extract every URL in order.
///
/// A URL whose page cannot be fetched is logged and skipped; the rest of the
/// batch continues.
pub fn run<F: Fetch + ?Sized>(
    fetcher: &F,
    urls: &[String],
    profile: &SiteProfile,
    options: &Options,
) -> Dataset {
    let total = urls.len();
    let mut dataset = Dataset::new();

    for (i, url) in urls.iter().enumerate() {
        info!(url = %url, "processing product {}/{}", i + 1, total);

        match fetcher.fetch(url) {
            Ok(html) => dataset.push(record::build_from_html(url, &html, profile, options)),
            Err(err) => error!(url = %url, error = %err, "failed to process product"),
        }
    }

    info!(records = dataset.len(), skipped = total - dataset.len(), "extraction finished");
    dataset
}
