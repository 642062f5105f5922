//! Download module containing download-related functionality.
//!
//! This module provides the task model for the scheduler: the core
//! [`Download`] struct pairing a resolved URL with its output file name, and
//! the [`Summary`]/[`Status`] types used to report per-task results.
//!
//! # Examples
//!
//! ## Creating a Download from a listing entry
//!
//! ```rust
//! use gleaner::download::Download;
//! use url::Url;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("http://mirror.example.com/isos/")?;
//! let download = Download::from_entry(&base, "alpine-3.20.iso")?;
//! assert_eq!(download.filename, "alpine-3.20.iso");
//! assert_eq!(download.url.as_str(), "http://mirror.example.com/isos/alpine-3.20.iso");
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with Download Status
//!
//! ```rust
//! use gleaner::download::{Download, Status, Summary};
//! use reqwest::StatusCode;
//! use url::Url;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("http://mirror.example.com/isos/")?;
//! let download = Download::from_entry(&base, "alpine-3.20.iso")?;
//! let summary = Summary::new(download, StatusCode::OK, 1024);
//!
//! match summary.status() {
//!     Status::Success => println!("Download completed successfully"),
//!     Status::Fail(msg) => println!("Download failed: {}", msg),
//!     Status::Skipped(reason) => println!("Download skipped: {}", reason),
//!     Status::Conflict(reason) => println!("Output name conflict: {}", reason),
//!     Status::NotStarted => println!("Download not yet started"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod download;
pub mod summary;

pub use download::Download;
pub use summary::{Status, Summary};
