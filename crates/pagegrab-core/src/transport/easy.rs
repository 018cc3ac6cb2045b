//! Single-request GET over libcurl's easy interface.

use crate::error::GrabError;
use crate::headers::RequestHeaders;
use std::time::Duration;

use super::{is_success_status, Transport};

/// Curl-backed transport. Holds the header set and optional timeout; each
/// `get` builds a fresh easy handle and blocks until the body is read.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    headers: RequestHeaders,
    timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new(headers: RequestHeaders) -> Self {
        Self {
            headers,
            timeout: None,
        }
    }

    /// Total time allowed per request. Without this, curl's defaults apply.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, GrabError> {
        let net = |e: curl::Error| GrabError::network(url, e);

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(net)?;
        easy.get(true).map_err(net)?;
        easy.follow_location(true).map_err(net)?;
        easy.max_redirections(10).map_err(net)?;
        if let Some(t) = self.timeout {
            easy.connect_timeout(t).map_err(net)?;
            easy.timeout(t).map_err(net)?;
        }

        let mut list = curl::easy::List::new();
        for line in self.headers.to_lines() {
            list.append(&line).map_err(net)?;
        }
        easy.http_headers(list).map_err(net)?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(net)?;
            transfer.perform().map_err(net)?;
        }

        let code = easy.response_code().map_err(net)?;
        if !is_success_status(code) {
            return Err(GrabError::HttpStatus {
                url: url.to_string(),
                status: code,
            });
        }
        tracing::debug!(url, status = code, bytes = body.len(), "GET complete");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_timeout() {
        let t = CurlTransport::new(RequestHeaders::default());
        assert!(t.timeout().is_none());
        assert_eq!(t.headers().user_agent(), "Mozilla/5.0");
    }

    #[test]
    fn with_timeout_sets_value() {
        let t = CurlTransport::new(RequestHeaders::default())
            .with_timeout(Some(Duration::from_secs(30)));
        assert_eq!(t.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn unresolvable_url_is_network_error() {
        let t = CurlTransport::new(RequestHeaders::default())
            .with_timeout(Some(Duration::from_secs(5)));
        let err = t.get("http://invalid.invalid/file.bin").unwrap_err();
        assert!(matches!(err, GrabError::Network { .. }), "got {:?}", err);
    }
}
