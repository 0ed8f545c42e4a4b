//! Runtime options for crawling and extraction.
//!
//! Site-specific data lives in [`SiteProfile`](crate::SiteProfile); `Options`
//! only carries how a run behaves.

use std::time::Duration;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration options for a pipeline run.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use nutriscrape::Options;
///
/// let options = Options {
///     include_category: false,
///     pause: Duration::ZERO,
///     ..Options::default()
/// };
/// assert_eq!(options.timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Derive `CATEGORIA` from product URLs.
    ///
    /// When disabled, records carry no category and the dataset omits the
    /// column.
    ///
    /// Default: `true`
    pub include_category: bool,

    /// Per-request timeout. A request exceeding it counts as a fetch failure.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Courtesy pause between section fetches during discovery.
    ///
    /// Default: 1 second
    pub pause: Duration,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// `Accept-Language` header value.
    ///
    /// Default: `pt-BR,pt;q=0.9,en;q=0.8`
    pub accept_language: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_category: true,
            timeout: Duration::from_secs(30),
            pause: Duration::from_secs(1),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "pt-BR,pt;q=0.9,en;q=0.8".to_string(),
        }
    }
}
