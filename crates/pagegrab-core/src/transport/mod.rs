//! HTTP GET transport.
//!
//! The page run only ever needs "GET this URL, give me the body or tell me
//! why not", so that is the whole trait. `CurlTransport` is the real one;
//! tests substitute their own.

mod easy;

pub use easy::CurlTransport;

use crate::error::GrabError;

/// Blocking GET of a single URL.
pub trait Transport {
    /// Returns the full response body, or a `Network` / `HttpStatus` error.
    fn get(&self, url: &str) -> Result<Vec<u8>, GrabError>;
}

/// 2xx and 3xx count as success; anything else is a failed request.
pub fn is_success_status(code: u32) -> bool {
    (200..400).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(304));
        assert!(!is_success_status(0));
        assert!(!is_success_status(199));
        assert!(!is_success_status(404));
        assert!(!is_success_status(500));
    }
}
