use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

/// A validated target: an absolute `http`/`https` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    url: Url,
}

impl FetchRequest {
    /// Parse and validate a caller-supplied URL before any network call
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let raw = raw.trim();
        let url = Url::parse(raw).map_err(|source| FetchError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;
        Self::from_url(url)
    }

    pub fn from_url(url: Url) -> Result<Self, FetchError> {
        match url.scheme() {
            "http" | "https" => Ok(Self { url }),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Raw response of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: Url,

    /// `Content-Type` header, if the server sent one
    pub content_type: Option<String>,

    /// Undecoded response body
    pub body: Vec<u8>,
}

/// Retrieves a page's raw bytes
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Perform exactly one retrieval of `request`
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchedPage, FetchError>;
}
