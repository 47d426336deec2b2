use std::future::Future;
use std::time::Duration;

use hibp_range::{Prefix, RangeResultSet, parse_range};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use tracing::{debug, warn};

use crate::error::{Error, LookupError};

/// Public Pwned Passwords API
pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com";

/// Whole-request timeout. The service itself never asks for one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("hibp-check/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a range query for a prefix.
///
/// [`RangeClient`] talks to the real API; tests substitute canned result sets.
pub trait RangeSource {
    fn lookup(
        &self,
        prefix: &Prefix,
    ) -> impl Future<Output = Result<RangeResultSet, LookupError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL; `/range/{PREFIX}` is appended to it
    pub endpoint: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Ask the service to pad responses with zero-count decoy records
    pub padding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            padding: false,
        }
    }
}

/// HTTP client for `GET {endpoint}/range/{PREFIX}`.
#[derive(Debug, Clone)]
pub struct RangeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RangeClient {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if config.padding {
            headers.insert("add-padding", HeaderValue::from_static("true"));
        }

        // Redirects are reported as HttpStatus instead of being followed
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(Policy::none())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client, endpoint: config.endpoint.trim_end_matches('/').to_string() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[tracing::instrument(level = "debug", skip(self, prefix), fields(prefix = %prefix))]
    async fn fetch(&self, prefix: &Prefix) -> Result<RangeResultSet, LookupError> {
        let url = format!("{}/range/{}", self.endpoint, prefix);
        let network = |source| LookupError::Network { prefix: prefix.to_string(), source };

        debug!(%url, "requesting range");
        let response = self.client.get(&url).send().await.map_err(network)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "range lookup rejected");
            return Err(LookupError::HttpStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network)?;
        let results = parse_range(&body)
            .map_err(|source| LookupError::Malformed { prefix: prefix.to_string(), source })?;

        debug!(records = results.len(), bytes = body.len(), "range received");
        Ok(results)
    }
}

impl RangeSource for RangeClient {
    fn lookup(
        &self,
        prefix: &Prefix,
    ) -> impl Future<Output = Result<RangeResultSet, LookupError>> + Send {
        self.fetch(prefix)
    }
}
