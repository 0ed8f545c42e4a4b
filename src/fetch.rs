//! Page fetching.
//!
//! One blocking GET per page with browser-like headers and a bounded timeout.
//! There are no retries: a failed request is final for that URL and callers
//! decide whether to skip it.

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;

/// Source of page bodies.
///
/// The pipeline only needs "URL in, HTML out"; tests substitute an in-memory
/// implementation.
pub trait Fetch {
    /// Fetch `url` and return its decoded body.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// HTTP fetcher backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the browser header set and the configured timeout.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .default_headers(browser_headers(options)?)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self.client.get(url).send().map_err(|source| {
            warn!(url = %url, error = %source, "HTTP request failed");
            Error::Fetch {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "HTTP error status");
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        debug!(url = %url, bytes = body.len(), "HTTP fetch finished");
        Ok(encoding::decode_body(&body, content_type.as_deref()))
    }
}

/// Headers a desktop browser would send for a page navigation.
pub fn browser_headers(options: &Options) -> Result<HeaderMap> {
    let value = |name: &str, v: &str| {
        HeaderValue::from_str(v).map_err(|e| Error::Config(format!("{name} header {v:?}: {e}")))
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, value("User-Agent", &options.user_agent)?);
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        value("Accept-Language", &options.accept_language)?,
    );
    headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    Ok(headers)
}
