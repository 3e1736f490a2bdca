use crate::config::ScraperConfig;
use crate::error::FetchError;
use crate::fetchers::fetcher::{Fetch, FetchRequest, FetchedPage};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue};
use reqwest::{Client, redirect};

/// Fetches pages over HTTP(S) with a browser-like header set.
///
/// Certificates are always verified. Redirects are followed up to the
/// configured bound and the whole request is limited by the configured timeout.
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let headers = browser_headers(config)?;

        let policy = if config.max_redirects == 0 {
            redirect::Policy::none()
        } else {
            redirect::Policy::limited(config.max_redirects)
        };

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .redirect(policy)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

/// Static headers sent with every request (besides `User-Agent`)
fn browser_headers(config: &ScraperConfig) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, header_value(&config.accept)?);
    headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(value).map_err(|e| {
        FetchError::InvalidHeader(format!("'{}': {}", value, e))
    })
}

#[async_trait]
impl Fetch for WebFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchedPage, FetchError> {
        let url = request.url().as_str();
        let start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(request.url().clone())
            .send()
            .await
            .map_err(|e| FetchError::from_request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().clone();
        if final_url.as_str() != url {
            ::log::debug!("{} redirected to {}", url, final_url);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(e)
            }
        })?;

        ::log::debug!(
            "Fetched {} bytes from {} in {:.2} seconds",
            body.len(),
            final_url,
            start.elapsed().as_secs_f64()
        );

        Ok(FetchedPage {
            final_url,
            content_type,
            body: body.to_vec(),
        })
    }
}
