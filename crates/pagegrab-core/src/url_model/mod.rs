//! URL modeling and filename derivation.
//!
//! A downloaded file is named after the last segment of its URL path, as it
//! appears in the URL (no percent-decoding).

mod path;

pub use path::last_path_segment;

/// Filename used when the URL path ends in `/` or has no path at all.
pub const DEFAULT_FILENAME: &str = "downloaded_file";

/// Derives the local filename for `url`.
///
/// # Examples
///
/// - `derive_filename("https://example.com/a/report.bin")` → `"report.bin"`
/// - `derive_filename("https://example.com/")` → `"downloaded_file"`
pub fn derive_filename(url: &str) -> String {
    match last_path_segment(url) {
        Some(s) if s != "." && s != ".." => s,
        _ => DEFAULT_FILENAME.to_string(),
    }
}
