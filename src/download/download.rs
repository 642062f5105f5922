//! Core download task model.
//!
//! A [`Download`] pairs the absolute URL to transfer with the file name used
//! to save it locally. The scheduler creates one per listing entry, a worker
//! consumes it exactly once, and it is then discarded.

use crate::error::Error;
use crate::listing::directory_base;
use crate::utils::output_name;

use url::Url;

/// Represents a file to be downloaded.
#[derive(Debug, Clone)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
}

impl Download {
    /// Creates a new [`Download`].
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
        }
    }

    /// Creates a [`Download`] by resolving a listing entry against the
    /// directory base URL.
    ///
    /// The base is normalized to end with a path separator first, so the
    /// entry always resolves to a child of the listing. The output file name
    /// is derived from the *entry* rather than from the resolved URL.
    ///
    /// ## Example
    ///
    /// ```rust
    /// # use gleaner::{download::Download, Error};
    /// use url::Url;
    ///
    /// # fn main() -> Result<(), Error> {
    /// let base = Url::parse("http://example.com/pub").unwrap();
    /// let download = Download::from_entry(&base, "notes.txt")?;
    /// assert_eq!(download.url.as_str(), "http://example.com/pub/notes.txt");
    /// assert_eq!(download.filename, "notes.txt");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_entry(base: &Url, entry: &str) -> Result<Self, Error> {
        let url = directory_base(base).join(entry).map_err(|e| {
            Error::InvalidUrl(format!(
                "The entry \"{}\" cannot be resolved against \"{}\": {}",
                entry, base, e
            ))
        })?;

        Ok(Self {
            url,
            filename: output_name(entry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry_resolves_relative() {
        let base = Url::parse("http://example.com/files/").unwrap();
        let download = Download::from_entry(&base, "a.txt").unwrap();
        assert_eq!(download.url.as_str(), "http://example.com/files/a.txt");
        assert_eq!(download.filename, "a.txt");
    }

    #[test]
    fn test_from_entry_normalizes_base() {
        // Without the trailing separator, resolution would replace "files".
        let base = Url::parse("http://example.com/files").unwrap();
        let download = Download::from_entry(&base, "a.txt").unwrap();
        assert_eq!(download.url.as_str(), "http://example.com/files/a.txt");
    }

    #[test]
    fn test_from_entry_filename_follows_entry() {
        let base = Url::parse("http://example.com/files/").unwrap();
        let download = Download::from_entry(&base, "sub/b.txt").unwrap();
        assert_eq!(download.url.as_str(), "http://example.com/files/sub/b.txt");
        assert_eq!(download.filename, "b.txt");
    }
}
