//! Page fetch, single-file download, and the page run that ties them together.
//!
//! Everything here is sequential and blocking: one GET at a time, in the order
//! the links appear on the page.

mod page;

pub use page::GrabEvent;

use crate::config::GrabConfig;
use crate::error::GrabError;
use crate::headers::RequestHeaders;
use crate::links;
use crate::storage;
use crate::transport::{CurlTransport, Transport};
use crate::url_model;
use std::path::{Path, PathBuf};
use url::Url;

/// Fetches pages and files through a `Transport`. Links are resolved against
/// a fixed base URL when one is configured, else against the page they were
/// found on.
#[derive(Debug, Clone)]
pub struct FileDownloader<T = CurlTransport> {
    base_url: Option<Url>,
    transport: T,
}

impl FileDownloader<CurlTransport> {
    /// Curl-backed downloader with the given headers and no timeout.
    pub fn new(base_url: &str, headers: RequestHeaders) -> Result<Self, GrabError> {
        Self::with_transport(base_url, CurlTransport::new(headers))
    }

    /// Curl-backed downloader set up from `cfg` (base URL, headers, timeout).
    /// Only a configured `base_url` is parsed here; page URLs are checked
    /// when each page is run.
    pub fn from_config(cfg: &GrabConfig) -> Result<Self, GrabError> {
        let transport = CurlTransport::new(cfg.request_headers()).with_timeout(cfg.timeout());
        match cfg.base_url.as_deref() {
            Some(base) => Self::with_transport(base, transport),
            None => Ok(Self::page_relative(transport)),
        }
    }
}

fn parse_url(url: &str) -> Result<Url, GrabError> {
    Url::parse(url).map_err(|source| GrabError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

impl<T: Transport> FileDownloader<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, GrabError> {
        Ok(Self {
            base_url: Some(parse_url(base_url)?),
            transport,
        })
    }

    /// Downloader without a fixed base: each page's links resolve against
    /// that page's own URL.
    pub fn page_relative(transport: T) -> Self {
        Self {
            base_url: None,
            transport,
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GETs `url` and returns the body as text (invalid UTF-8 is replaced).
    pub fn fetch_page_content(&self, url: &str) -> Result<String, GrabError> {
        let body = self.transport.get(url)?;
        tracing::info!(url, bytes = body.len(), "fetched page");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Links on the page whose href ends with `extension`, made absolute
    /// against this downloader's base URL. A page-relative downloader keeps
    /// only hrefs that are already absolute; the page run resolves against
    /// the page instead.
    pub fn parse_file_links(&self, html: &str, extension: &str) -> Vec<String> {
        links::parse_file_links(html, extension, self.base_url.as_ref())
    }

    /// Base that links found on `page_url` resolve against.
    pub(crate) fn base_for_page(&self, page_url: &str) -> Result<Url, GrabError> {
        match &self.base_url {
            Some(base) => Ok(base.clone()),
            None => parse_url(page_url),
        }
    }

    /// GETs `file_url` and saves the body under `download_dir`, named after
    /// the last URL path segment. Returns where the file was written.
    pub fn download_file(&self, file_url: &str, download_dir: &Path) -> Result<PathBuf, GrabError> {
        let body = self.transport.get(file_url)?;
        let filename = url_model::derive_filename(file_url);
        let path = storage::save_file(download_dir, &filename, &body)?;
        tracing::info!(url = file_url, path = %path.display(), bytes = body.len(), "saved file");
        Ok(path)
    }
}
