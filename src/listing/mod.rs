//! Listing module containing directory-listing parsing functionality.
//!
//! This module fetches an HTTP-served directory-listing page and extracts
//! the set of relative file names that qualify as downloadable entries. It
//! is deliberately conservative: navigational links, external links, and
//! sub-directory links never make it into the result.
//!
//! # Examples
//!
//! ```rust
//! use gleaner::listing::ListingParser;
//!
//! let html = r#"<a href="../">..</a><a href="report.pdf">report.pdf</a>"#;
//! let entries = ListingParser::extract_entries(html);
//! assert_eq!(entries, vec!["report.pdf"]);
//! ```

pub mod parser;

pub use parser::{directory_base, ListingParser};
