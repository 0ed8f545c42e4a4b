//! On-disk artifacts.
//!
//! Discovery hands its result to extraction through a JSON URL list;
//! extraction produces a CSV dataset. The snapshot helper saves a page's HTML
//! so extraction can be replayed offline.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::url_utils;

/// Default location of the URL list, relative to the output directory.
pub const URL_LIST_FILE: &str = "product_urls.json";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Write the URL list as an indented JSON array.
pub fn save_url_list(path: &Path, urls: &[String]) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(urls)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), count = urls.len(), "URL list saved");
    Ok(())
}

/// Read the URL list written by discovery.
///
/// A missing file is reported as [`Error::MissingUrlList`] so the caller can
/// tell the operator to run discovery first.
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::MissingUrlList {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// `<prefix>_YYYYMMDD_HHMMSS.csv`
#[must_use]
pub fn default_dataset_filename(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}_{}.csv", now.format(TIMESTAMP_FORMAT))
}

/// The requested file name with a `.csv` extension, or the timestamped
/// default when none was requested.
#[must_use]
pub fn dataset_filename(requested: Option<&str>, prefix: &str, now: NaiveDateTime) -> String {
    match requested.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) if name.ends_with(".csv") => name.to_string(),
        Some(name) => format!("{name}.csv"),
        None => default_dataset_filename(prefix, now),
    }
}

/// Write `dataset` as CSV into `dir/filename`, creating `dir` if needed.
/// Returns the written path.
pub fn save_dataset(dataset: &Dataset, dir: &Path, filename: &str) -> Result<PathBuf> {
    let path = dir.join(filename);
    ensure_parent(&path)?;

    let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    dataset.write_csv(&mut writer)?;
    writer.flush().map_err(|e| Error::io(&path, e))?;

    info!(path = %path.display(), records = dataset.len(), "dataset saved");
    Ok(path)
}

/// Save a page's HTML as `dir/<last-path-segment>_YYYYMMDD_HHMMSS.html`.
pub fn save_snapshot(dir: &Path, url: &str, html: &str, now: NaiveDateTime) -> Result<PathBuf> {
    let slug = url_utils::path_segments(url)
        .pop()
        .unwrap_or_else(|| "page".to_string());
    let path = dir.join(format!("{slug}_{}.html", now.format(TIMESTAMP_FORMAT)));
    ensure_parent(&path)?;

    fs::write(&path, html).map_err(|e| Error::io(&path, e))?;
    info!(path = %path.display(), chars = html.chars().count(), "snapshot saved");
    Ok(path)
}
