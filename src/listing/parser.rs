//! Directory-listing fetching and link classification.
//!
//! The parser issues a single GET for the listing page, walks every anchor
//! element in document order, and keeps the hrefs that look like bare file
//! names. Everything else (parent links, sub-directories, external URLs,
//! metadata rows) is skipped silently: an irrelevant link is not a fetch
//! failure, it is simply not a file.

use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Grammar for a downloadable entry: a bare file name with a 1-10 character
/// alphanumeric extension. Compiled once and reused for every candidate.
static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-.]+\.[a-zA-Z0-9]{1,10}$").unwrap());

/// Normalize a directory URL so its path ends with a separator.
///
/// Listings are always fetched "at" a trailing-slash path; without this,
/// relative resolution of child links would replace the final path segment
/// instead of descending into it.
///
/// # Example
///
/// ```rust
/// use gleaner::listing::directory_base;
/// use url::Url;
///
/// let url = Url::parse("http://mirror.example.com/pool").unwrap();
/// assert_eq!(directory_base(&url).as_str(), "http://mirror.example.com/pool/");
/// ```
pub fn directory_base(url: &Url) -> Url {
    if url.path().ends_with('/') {
        return url.clone();
    }
    let mut base = url.clone();
    base.set_path(&format!("{}/", url.path()));
    base
}

/// Parses a directory-listing page into a sequence of downloadable entries.
///
/// ```rust,no_run
/// use gleaner::listing::ListingParser;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = Url::parse("http://mirror.example.com/isos/")?;
/// let entries = ListingParser::new().parse(&url).await?;
/// println!("found {} files", entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingParser {
    http_config: HttpClientConfig,
}

impl ListingParser {
    /// Creates a parser with the default HTTP configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom HTTP configuration.
    ///
    /// Use this to share headers, proxy, or deadline settings with the
    /// downloader side.
    pub fn with_http_config(http_config: HttpClientConfig) -> Self {
        Self { http_config }
    }

    /// Fetches the listing page and returns the accepted entries in
    /// document order.
    ///
    /// Fails with [`Error::Status`] if the server answers with a non-success
    /// status, and with [`Error::Parse`] if the response body cannot be
    /// decoded as markup. A listing with zero accepted links yields an empty
    /// vector, not an error.
    pub async fn parse(&self, directory_url: &Url) -> Result<Vec<String>> {
        let base = directory_base(directory_url);
        let client = create_http_client(self.http_config.clone())?;

        debug!("Fetching listing {}", &base);
        let res = client.get(base.as_str()).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        let body = res.text().await.map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Self::extract_entries(&body))
    }

    /// Extracts the downloadable entries from raw listing markup.
    ///
    /// Exposed separately so that classification can be exercised on HTML
    /// fixtures without a server. Duplicates are kept and ordering follows
    /// the document.
    pub fn extract_entries(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let anchor = Selector::parse("a").unwrap();

        document
            .select(&anchor)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| is_file_entry(href))
            .map(str::to_string)
            .collect()
    }
}

/// Classify one href candidate.
///
/// Rejects navigational markers, absolute/external URLs, and sub-directory
/// links, then requires the file-name grammar to match.
fn is_file_entry(href: &str) -> bool {
    if href.is_empty() || href == "../" || href == ".." || href == "./" || href == "." {
        return false;
    }
    if href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//") {
        return false;
    }
    // Sub-directories are out of scope; the scheduler never descends.
    if href.ends_with('/') {
        return false;
    }
    FILE_NAME_PATTERN.is_match(href)
}
