//! Shared utility functions.
//!
//! This module contains utility functions that are used across multiple
//! modules in the gleaner crate. It currently provides output file name
//! derivation for listing entries.
//!
//! # Examples
//!
//! ```rust
//! use gleaner::utils::output_name;
//!
//! assert_eq!(output_name("report.pdf"), "report.pdf");
//! assert_eq!(output_name("archive/data.csv"), "data.csv");
//! ```

pub mod filename;

// Re-export commonly used utilities
pub use filename::{output_name, FALLBACK_FILENAME};
