//! Downloader module containing the scheduler, builder pattern, and configuration.
//!
//! This module provides the main [`Downloader`] struct and its associated
//! builder for configuring and executing transfers. It handles bounded
//! concurrency, per-task result capture, progress reporting, and callback
//! management.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use gleaner::downloader::DownloaderBuilder;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build();
//!
//! let base = Url::parse("http://mirror.example.com/isos/")?;
//! let entries = vec!["alpine-3.20.iso".to_string(), "SHA256SUMS.txt".to_string()];
//!
//! let summaries = downloader.download(&base, &entries).await;
//! println!("{} tasks finished", summaries.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced Configuration
//!
//! ```rust
//! use gleaner::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .concurrent_downloads(5)
//!     .timeout(Duration::from_secs(300))
//!     .on_complete(|summary| {
//!         println!("Finished: {}", summary.download().filename);
//!     })
//!     .build();
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use gleaner::downloader::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::hidden().build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::DownloadCallback;
pub use downloader::Downloader;
