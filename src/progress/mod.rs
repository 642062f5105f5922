//! Progress module containing progress bar functionality.
//!
//! This module provides progress bar styling and display management for
//! transfer runs: one main bar tracking completed tasks, and one child bar
//! per in-flight transfer.
//!
//! # Examples
//!
//! ## Custom Progress Bar Styling
//!
//! ```rust
//! use gleaner::progress::{StyleOptions, ProgressBarOpts};
//!
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!         Some("█▉▊▋▌▍▎▏  ".to_string()),
//!         true,
//!         false
//!     ),
//!     ProgressBarOpts::with_pip_style(),
//! );
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use gleaner::progress::{StyleOptions, ProgressBarOpts};
//!
//! let hidden_style = StyleOptions::new(
//!     ProgressBarOpts::hidden(),
//!     ProgressBarOpts::hidden(),
//! );
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
