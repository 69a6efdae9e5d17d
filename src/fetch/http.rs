use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use super::{FetchOptions, PageSource};
use crate::encoding::decode_html;
use crate::error::{Error, Result};

/// Plain HTTP GET fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the configured User-Agent and timeout.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] when the TLS backend cannot be initialised. A
    /// User-Agent that is not a valid header value is skipped.
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&options.user_agent) {
            Ok(value) => {
                headers.insert(USER_AGENT, value);
            }
            Err(err) => warn!(%err, "ignoring invalid user agent"),
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.client.get(url).send().map_err(|err| {
            warn!(url, %err, "request failed");
            Error::Fetch(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes()?;
        let decoded = decode_html(&bytes);
        debug!(
            url,
            bytes = bytes.len(),
            encoding = decoded.encoding.name(),
            "page fetched"
        );
        Ok(decoded.text)
    }
}
