//! Core scheduler implementation with fetch logic.
//!
//! This module contains the main [`Downloader`] struct that resolves listing
//! entries against the directory base URL and executes the transfers under a
//! fixed concurrency budget. Every entry produces exactly one [`Summary`];
//! a failing task never aborts its siblings.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gleaner::downloader::DownloaderBuilder;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().concurrent_downloads(4).build();
//!
//! let base = Url::parse("http://mirror.example.com/pub/")?;
//! let entries = vec!["a.txt".to_string(), "b.txt".to_string()];
//! let summaries = downloader.download(&base, &entries).await;
//!
//! for summary in summaries {
//!     println!("{}: {:?}", summary.download().filename, summary.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::download::{Download, Status, Summary};
use crate::error::Error;
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::display::ProgressDisplay;
use crate::utils::output_name;

use futures::stream::{self, StreamExt};
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use std::collections::HashSet;
use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;
use tokio::{fs, fs::File, io::AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// A unit of scheduled work.
///
/// Conflicts and resolution failures are decided before admission, so they
/// complete without touching the network.
enum Task {
    Transfer(Download),
    Conflict(Download),
    Invalid(Download, String),
}

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use gleaner::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of concurrent downloads.
    pub fn concurrent_downloads(&self) -> usize {
        self.config.concurrent_downloads
    }

    /// Gets the per-transfer deadline.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.config.timeout
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&reqwest::header::HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Resolves the entries against the base URL and downloads them.
    ///
    /// The call is a full barrier: it returns only once every task has
    /// reached a terminal state, and it returns one [`Summary`] per entry.
    pub async fn download(&self, base: &Url, entries: &[String]) -> Vec<Summary> {
        self.download_with_cancellation(base, entries, CancellationToken::new())
            .await
    }

    /// Same as [`download`], observing a cancellation token.
    ///
    /// A cancelled task resolves to a `Fail` summary immediately, whether it
    /// was waiting for an admission slot or mid-transfer, and the barrier
    /// still completes normally.
    ///
    /// [`download`]: Downloader::download
    pub async fn download_with_cancellation(
        &self,
        base: &Url,
        entries: &[String],
        cancel: CancellationToken,
    ) -> Vec<Summary> {
        // Prepare the shared HTTP client.
        let client = create_http_client(HttpClientConfig {
            timeout: self.config.timeout,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })
        .unwrap();

        // Resolve every entry up front. The first entry claiming an output
        // name wins; later claimants complete as conflicts without any
        // network traffic.
        let mut claimed = HashSet::new();
        let tasks: Vec<Task> = entries
            .iter()
            .map(|entry| match Download::from_entry(base, entry) {
                Ok(download) => {
                    if claimed.insert(download.filename.clone()) {
                        Task::Transfer(download)
                    } else {
                        Task::Conflict(download)
                    }
                }
                Err(e) => Task::Invalid(Download::new(base, &output_name(entry)), e.to_string()),
            })
            .collect();

        // Prepare the progress display.
        let progress_display =
            ProgressDisplay::new(self.config.style_options.clone(), tasks.len());

        // Execute the tasks under the admission budget. The collect is the
        // barrier; completion order between tasks is unspecified.
        let summaries = stream::iter(tasks)
            .map(|task| self.run_task(&client, task, &progress_display, &cancel))
            .buffer_unordered(self.config.concurrent_downloads)
            .collect::<Vec<_>>()
            .await;

        // Finish the progress display.
        progress_display.finish();

        summaries
    }

    /// Drives one task to its terminal state and reports it.
    async fn run_task(
        &self,
        client: &ClientWithMiddleware,
        task: Task,
        progress_display: &ProgressDisplay,
        cancel: &CancellationToken,
    ) -> Summary {
        let summary = match task {
            Task::Conflict(download) => Summary::new(download, StatusCode::OK, 0)
                .conflict("output name already claimed by an earlier entry"),
            Task::Invalid(download, msg) => {
                Summary::new(download, StatusCode::BAD_REQUEST, 0).fail(msg)
            }
            Task::Transfer(download) => {
                let cancelled = Summary::new(download.clone(), StatusCode::BAD_REQUEST, 0);
                tokio::select! {
                    _ = cancel.cancelled() => cancelled.fail("transfer cancelled"),
                    summary = self.fetch(client, &download, progress_display) => summary,
                }
            }
        };

        progress_display.increment_main();

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }

    /// Fetches one file and writes it to disk.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let output = self.config.directory.join(&download.filename);
        let summary = Summary::new(download.clone(), StatusCode::BAD_REQUEST, 0);

        // A regular file at the destination means the work is already done.
        // Stat errors other than NotFound fail the task instead of green-
        // lighting a re-download.
        match fs::metadata(&output).await {
            Ok(m) if m.is_file() => {
                debug!("A file with the same name already exists at the destination.");
                return Summary::new(download.clone(), StatusCode::OK, m.len())
                    .skip("file already exists");
            }
            // A directory: let the file create below report it.
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return summary.fail(e);
            }
        }

        // Request the file.
        debug!("Fetching {}", &download.url);
        let res = match client.get(download.url.as_str()).send().await {
            Ok(res) => res,
            Err(e) => {
                return summary.fail(e);
            }
        };

        // Check the status for errors.
        let status = res.status();
        if !status.is_success() {
            return summary.fail(Error::Status { status });
        }

        // Update the summary with the collected details.
        let summary = Summary::new(download.clone(), status, 0);

        // Create the progress bar.
        let pb = progress_display.create_child_progress(res.content_length().unwrap_or(0));

        // Prepare the destination directory/file.
        let output_dir = output.parent().unwrap_or(&output);
        debug!("Creating destination directory {:?}", output_dir);
        if let Err(e) = fs::create_dir_all(output_dir).await {
            return summary.fail(e);
        }

        debug!("Creating destination file {:?}", &output);
        let mut file = match File::create(&output).await {
            Ok(file) => file,
            Err(e) => {
                return summary.fail(e);
            }
        };

        let mut final_size = 0;

        // Download the file chunk by chunk.
        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            // Retrieve chunk.
            let mut chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    return summary.fail(e);
                }
            };
            let chunk_size = chunk.len() as u64;
            final_size += chunk_size;
            pb.inc(chunk_size);

            // Write the chunk to disk.
            if let Err(e) = file.write_all_buf(&mut chunk).await {
                return summary.fail(e);
            }
        }

        // Finish the progress bar once complete, and optionally remove it.
        progress_display.finish_child(pb);

        Summary::new(download.clone(), status, final_size).with_status(Status::Success)
    }
}
