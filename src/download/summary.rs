//! Download summary functionality.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum for
//! tracking per-task results. Every scheduled entry produces exactly one
//! summary, whatever its outcome, so a partial-failure run stays diagnosable.

use super::download::Download;
use reqwest::StatusCode;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download was skipped with reason
    Skipped(String),
    /// Download completed successfully
    Success,
    /// Another entry in the same run already claimed this output name
    Conflict(String),
}

impl Status {
    /// Whether this status should count towards a non-zero exit for the run.
    ///
    /// Conflicts count: a file the caller asked for was not downloaded.
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Fail(_) | Status::Conflict(_))
    }
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Download size in bytes.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Download`] [`Summary`].
    pub fn new(download: Download, statuscode: StatusCode, size: u64) -> Self {
        Self {
            download,
            statuscode,
            size,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Download`] [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get the summary's HTTP status code.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as an output-name conflict with a message.
    pub fn conflict(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Conflict(format!("{}", msg)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn create_test_download() -> Download {
        let url = Url::parse("http://example.com/test.zip").unwrap();
        Download::new(&url, "test.zip")
    }

    #[test]
    fn test_status_equality() {
        assert_eq!(Status::Success, Status::Success);
        assert_eq!(Status::NotStarted, Status::NotStarted);
        assert_eq!(
            Status::Fail("error".to_string()),
            Status::Fail("error".to_string())
        );
        assert_eq!(
            Status::Skipped("reason".to_string()),
            Status::Skipped("reason".to_string())
        );

        assert_ne!(Status::Success, Status::NotStarted);
        assert_ne!(
            Status::Fail("error1".to_string()),
            Status::Fail("error2".to_string())
        );
    }

    #[test]
    fn test_status_is_failure() {
        assert!(Status::Fail("boom".to_string()).is_failure());
        assert!(Status::Conflict("taken".to_string()).is_failure());
        assert!(!Status::Success.is_failure());
        assert!(!Status::Skipped("exists".to_string()).is_failure());
        assert!(!Status::NotStarted.is_failure());
    }

    #[test]
    fn test_summary_creation() {
        let download = create_test_download();
        let summary = Summary::new(download.clone(), StatusCode::OK, 1024);

        assert_eq!(summary.statuscode(), StatusCode::OK);
        assert_eq!(summary.size(), 1024);
        assert_eq!(summary.download().filename, "test.zip");
        assert_eq!(summary.status(), &Status::NotStarted);
    }

    #[test]
    fn test_summary_with_status() {
        let download = create_test_download();
        let summary = Summary::new(download, StatusCode::OK, 1024).with_status(Status::Success);

        assert_eq!(summary.status(), &Status::Success);
    }

    #[test]
    fn test_summary_fail() {
        let download = create_test_download();
        let summary =
            Summary::new(download, StatusCode::INTERNAL_SERVER_ERROR, 0).fail("Network error");

        match summary.status() {
            Status::Fail(msg) => assert_eq!(msg, "Network error"),
            _ => panic!("Expected Fail status"),
        }
    }

    #[test]
    fn test_summary_skip() {
        let download = create_test_download();
        let summary = Summary::new(download, StatusCode::OK, 1024).skip("File already exists");

        match summary.status() {
            Status::Skipped(msg) => assert_eq!(msg, "File already exists"),
            _ => panic!("Expected Skipped status"),
        }
    }

    #[test]
    fn test_summary_conflict() {
        let download = create_test_download();
        let summary = Summary::new(download, StatusCode::OK, 0)
            .conflict("output name already claimed by an earlier entry");

        match summary.status() {
            Status::Conflict(msg) => {
                assert_eq!(msg, "output name already claimed by an earlier entry")
            }
            _ => panic!("Expected Conflict status"),
        }
    }

    #[test]
    fn test_summary_debug_format() {
        let download = create_test_download();
        let summary = Summary::new(download, StatusCode::OK, 1024);
        let debug_str = format!("{:?}", summary);
        assert!(debug_str.contains("Summary"));
        assert!(debug_str.contains("test.zip"));
    }
}
