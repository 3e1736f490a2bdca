use thiserror::Error;

/// Failure while retrieving the page over the network
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target is not a syntactically valid absolute URL
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Only `http` and `https` targets are fetched
    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// The fixed request timeout elapsed
    #[error("request to {0} timed out")]
    Timeout(String),

    /// DNS, connection refused, TLS handshake and similar transport failures
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Any other request failure reported by the HTTP client
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// A configured header value is not valid in HTTP
    #[error("invalid header value {0}")]
    InvalidHeader(String),

    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Classify a reqwest error raised while sending a request to `url`
    pub fn from_request(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(url.to_string())
        } else if error.is_connect() {
            Self::Connect {
                url: url.to_string(),
                source: error,
            }
        } else if let Some(status) = error.status() {
            Self::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
        } else {
            Self::Request(error)
        }
    }
}

/// Failure that prevents extraction of the whole document
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// The body is not markup (images, archives, arbitrary binary data)
    #[error("content is not HTML markup ({0})")]
    UnsupportedContent(String),
}

/// Failure to turn a single `href`/`src` value into an absolute URL.
///
/// These never abort extraction; the offending element is dropped.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot resolve '{reference}' against {base}: {source}")]
    Join {
        reference: String,
        base: String,
        #[source]
        source: url::ParseError,
    },

    #[error("malformed absolute URL '{reference}': {source}")]
    Invalid {
        reference: String,
        #[source]
        source: url::ParseError,
    },
}

/// Whole-request failure; its `Display` is the message reported to callers
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] FetchError),

    #[error("Content extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Invalid scraper configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Failure to load or validate a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
