//! pagegrab core: fetch one page, pick out links to files with a given
//! extension, download each into a directory, count the successes.

pub mod config;
pub mod downloader;
pub mod error;
pub mod headers;
pub mod links;
pub mod logging;
pub mod storage;
pub mod transport;
pub mod url_model;

pub use config::GrabConfig;
pub use downloader::{FileDownloader, GrabEvent};
pub use error::GrabError;
pub use headers::RequestHeaders;
pub use transport::{CurlTransport, Transport};
