//! Error type shared by the fetch, download and storage steps.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single fetch or download did not produce a result. The underlying
/// curl, URL or I/O error is the `source`, not part of the message.
///
/// The page run never propagates these; it reports them and moves on.
#[derive(Debug, Error)]
pub enum GrabError {
    /// A URL (base URL, page URL or resolved link) could not be parsed.
    #[error("invalid URL {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Curl reported an error (connect, DNS, timeout, read failure).
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a status outside 200-399.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// Creating the download directory or writing the file failed.
    #[error("filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GrabError {
    pub(crate) fn network(url: &str, source: curl::Error) -> Self {
        GrabError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GrabError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// HTTP status code, if this failure came from the server's response.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            GrabError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
