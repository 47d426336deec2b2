use hibp_range::ParseError;

/// Why a range lookup produced no result set. Lookups are never retried.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed for prefix {prefix}: {source}")]
    Network {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for prefix {prefix}, check the API and try again")]
    HttpStatus { prefix: String, status: u16 },

    #[error("malformed range response for prefix {prefix}: {source}")]
    Malformed {
        prefix: String,
        #[source]
        source: ParseError,
    },
}

impl LookupError {
    /// The HTTP status code, if the service answered with a non-200 status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { source, .. } if source.is_timeout())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("--{flag} must be at least 1")]
    InvalidArgs { flag: &'static str },
}
