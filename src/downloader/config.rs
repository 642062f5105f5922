//! Configuration structures and defaults for the downloader.
//!
//! This module provides the configuration shared by the [`Downloader`] and
//! [`DownloaderBuilder`]: the output directory, the concurrency budget, the
//! optional transfer deadline, HTTP client knobs, and the per-task
//! completion callback.
//!
//! [`Downloader`]: super::downloader::Downloader
//! [`DownloaderBuilder`]: super::builder::DownloaderBuilder

use crate::download::Summary;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for download completion events.
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader.
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: std::path::PathBuf,
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    /// Optional per-transfer deadline, from connect to end of body.
    pub timeout: Option<Duration>,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            concurrent_downloads: 32,
            timeout: None,
            proxy: None,
            headers: None,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
