use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for fetching and extracting a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Timeout for the single outbound request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of redirects followed before giving up
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// `User-Agent` header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `Accept` header sent with the request
    #[serde(default = "default_accept")]
    pub accept: String,

    /// `Accept-Language` header sent with the request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Caps applied to the extracted collections
    #[serde(default)]
    pub limits: ExtractionLimits,
}

/// Size bounds for the extracted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionLimits {
    #[serde(default = "default_max_headings")]
    pub max_headings: usize,

    #[serde(default = "default_max_links")]
    pub max_links: usize,

    #[serde(default = "default_max_images")]
    pub max_images: usize,

    #[serde(default = "default_max_paragraphs")]
    pub max_paragraphs: usize,

    /// A paragraph is kept only when its cleaned text is longer than this
    #[serde(default = "default_min_paragraph_chars")]
    pub min_paragraph_chars: usize,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_accept() -> String {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.5".to_string()
}

fn default_max_headings() -> usize {
    10
}

fn default_max_links() -> usize {
    20
}

fn default_max_images() -> usize {
    10
}

fn default_max_paragraphs() -> usize {
    5
}

fn default_min_paragraph_chars() -> usize {
    50
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            max_headings: default_max_headings(),
            max_links: default_max_links(),
            max_images: default_max_images(),
            max_paragraphs: default_max_paragraphs(),
            min_paragraph_chars: default_min_paragraph_chars(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            accept_language: default_accept_language(),
            limits: ExtractionLimits::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Override the redirect bound (0 disables redirect following)
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Override the collection caps
    pub fn with_limits(mut self, limits: ExtractionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings that would leave a request unbounded
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.limits.max_headings, 10);
        assert_eq!(config.limits.max_links, 20);
        assert_eq!(config.limits.max_images, 10);
        assert_eq!(config.limits.max_paragraphs, 5);
        assert_eq!(config.limits.min_paragraph_chars, 50);
        assert_eq!(config.accept_language, "en-US,en;q=0.5");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = ScraperConfig::from_json(r#"{"timeout_secs": 3, "limits": {"max_links": 2}}"#)
            .unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.limits.max_links, 2);
        assert_eq!(config.limits.max_images, 10);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = ScraperConfig::from_json("{}").unwrap();
        assert_eq!(config, ScraperConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ScraperConfig::from_json(r#"{"timeout_secs": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ScraperConfig::from_json("{ timeout_secs: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ScraperConfig::from_file("/nonexistent/page-digest.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
