//! Error handling for the gleaner library.
//!
//! This module provides centralized error handling for the two fallible
//! subsystems: fetching/parsing the directory listing and transferring
//! individual files.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen when using gleaner.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other
    /// categories, typically representing unexpected system-level failures.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when a listing entry cannot be resolved against the
    /// directory base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The remote server answered with a non-success status.
    ///
    /// Raised for the listing page as well as for individual files.
    #[error("Server returned status {status}")]
    Status { status: StatusCode },

    /// The listing response body could not be decoded as markup.
    #[error("Failed to parse directory listing: {0}")]
    Parse(String),

    /// I/O Error.
    ///
    /// Wraps standard I/O errors from file operations, such as creating or
    /// writing the destination file during a transfer.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Wraps HTTP client errors, including network failures and
    /// request/response processing errors.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// Result type alias for operations that can fail with a gleaner error.
pub type Result<T> = std::result::Result<T, Error>;
