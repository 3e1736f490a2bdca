pub mod config;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ExtractionLimits, ScraperConfig};
pub use error::{ConfigError, ExtractError, FetchError, ScrapeError};
pub use fetchers::{Fetch, FetchRequest, FetchedPage, WebFetcher};
pub use results::{ExtractedContent, ScrapeOutcome, ScrapeStatus};

use parsers::Parser;
use url::Url;

/// Fetches one page and extracts its content summary.
///
/// Each call is independent: one fetch followed by one extraction, with no
/// state shared between calls beyond the fetcher's connection pool.
#[derive(Debug, Clone)]
pub struct Scraper<F = WebFetcher> {
    fetcher: F,
    limits: ExtractionLimits,
}

impl Scraper<WebFetcher> {
    /// Create a scraper with the default configuration
    pub fn new() -> Result<Self, ScrapeError> {
        Self::from_config(&ScraperConfig::default())
    }

    /// Create a scraper from configuration, rejecting invalid settings
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        config.validate()?;
        Ok(Self {
            fetcher: WebFetcher::new(config)?,
            limits: config.limits,
        })
    }
}

impl<F: Fetch> Scraper<F> {
    /// Use a custom fetcher with default limits
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            limits: ExtractionLimits::default(),
        }
    }

    /// Override the collection caps
    pub fn with_limits(mut self, limits: ExtractionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Scrape `url`, converting every failure into an error outcome
    pub async fn scrape(&self, url: &Url) -> ScrapeOutcome {
        ::log::info!("Attempting to scrape URL: {}", url);

        match self.try_scrape(url).await {
            Ok(content) => ScrapeOutcome::success(url.as_str(), content),
            Err(e) => {
                ::log::error!("Scraping {} failed: {}", url, e);
                ScrapeOutcome::error(url.as_str(), e.to_string())
            }
        }
    }

    /// Scrape `url`, returning the typed failure.
    ///
    /// Relative references are resolved against `url` itself, not the
    /// post-redirect location.
    pub async fn try_scrape(&self, url: &Url) -> Result<ExtractedContent, ScrapeError> {
        let request = FetchRequest::from_url(url.clone())?;
        let page = self.fetcher.fetch(&request).await?;

        let content = Parser::extract(
            &page.body,
            page.content_type.as_deref(),
            request.url(),
            &self.limits,
        )?;

        Ok(content)
    }
}

/// Scrape `url` with the default configuration
pub async fn scrape(url: &Url) -> ScrapeOutcome {
    match Scraper::new() {
        Ok(scraper) => scraper.scrape(url).await,
        Err(e) => {
            ::log::error!("Failed to create scraper: {}", e);
            ScrapeOutcome::error(url.as_str(), e.to_string())
        }
    }
}
