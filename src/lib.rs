//! Gleaner crawls an HTTP-served directory listing and downloads the files
//! it links to, asynchronously, under a fixed cap on concurrent transfers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use gleaner::{downloader::DownloaderBuilder, listing::ListingParser, Error};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let base = Url::parse("http://mirror.example.com/isos/").unwrap();
//! let entries = ListingParser::new().parse(&base).await?;
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .concurrent_downloads(4)
//!     .build();
//! downloader.download(&base, &entries).await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The gleaner crate is organized into several modules:
//!
//! - [`listing`] - The directory-listing parser that turns a listing page into file entries
//! - [`download`] - The `Download` task model and the `Summary`/`Status` result types
//! - [`downloader`] - The `Downloader` and `DownloaderBuilder` for orchestrating transfers
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client functionality shared by the parser and the scheduler
//! - [`progress`] - Progress bar styling and display management
//! - [`utils`] - Shared utility functions

pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod listing;
pub mod progress;
pub mod utils;

pub use download::{Download, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use listing::{directory_base, ListingParser};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use utils::output_name;
