use clap::Parser;
use page_digest::ScraperConfig;
use page_digest::error::ConfigError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-digest")]
#[command(about = "Fetch a web page and print a structured summary of its content")]
#[command(version)]
pub struct Args {
    /// Absolute http(s) URL of the page to summarize
    pub url: String,

    /// JSON configuration file (timeouts, headers, collection limits)
    #[arg(short, long, env = "PAGE_DIGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Maximum number of redirects to follow (overrides the config file)
    #[arg(long)]
    pub max_redirects: Option<usize>,

    /// Pretty-print the JSON result
    #[arg(short, long)]
    pub pretty: bool,
}

impl Args {
    /// Build the scraper configuration from the file (if any) and CLI overrides
    pub fn scraper_config(&self) -> Result<ScraperConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if let Some(seconds) = self.timeout {
            config = config.with_timeout_secs(seconds);
        }
        if let Some(max_redirects) = self.max_redirects {
            config = config.with_max_redirects(max_redirects);
        }

        config.validate()?;
        Ok(config)
    }
}
