//! HTTP module containing HTTP client functionality.
//!
//! This module provides HTTP client setup and middleware configuration for
//! the listing parser and the download scheduler. Both subsystems share the
//! same client factory so they get identical tracing, proxy, header, and
//! deadline behavior.
//!
//! # Examples
//!
//! ## Creating an HTTP Client
//!
//! ```rust
//! use gleaner::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     timeout: None,
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
