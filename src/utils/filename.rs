//! Output file name derivation.
//!
//! The local file name for a transfer is derived from the listing entry, not
//! from the resolved URL, so that what the listing displayed is what lands on
//! disk.

/// Name used when an entry has no usable final path segment.
pub const FALLBACK_FILENAME: &str = "downloaded_file";

/// Derive the local output file name for a listing entry.
///
/// The name is the final path segment of the entry. If that segment is empty
/// or the entry is a bare separator, [`FALLBACK_FILENAME`] is substituted so
/// every task has a deterministic non-empty target.
///
/// # Example
///
/// ```rust
/// use gleaner::utils::{output_name, FALLBACK_FILENAME};
///
/// assert_eq!(output_name("report.pdf"), "report.pdf");
/// assert_eq!(output_name("nested/report.pdf"), "report.pdf");
/// assert_eq!(output_name("/"), FALLBACK_FILENAME);
/// ```
pub fn output_name(entry: &str) -> String {
    let segment = entry.rsplit('/').next().unwrap_or_default();
    if segment.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        segment.to_string()
    }
}
