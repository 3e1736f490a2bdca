use clap::Parser;
use page_digest::{FetchRequest, ScrapeOutcome, Scraper};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    // Reject malformed targets before touching the network
    let request = match FetchRequest::parse(&args.url) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let config = match args.scraper_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let outcome = match Scraper::from_config(&config) {
        Ok(scraper) => scraper.scrape(request.url()).await,
        Err(e) => {
            ::log::error!("Failed to create scraper: {}", e);
            ScrapeOutcome::error(request.url().as_str(), e.to_string())
        }
    };

    ::log::debug!("Scrape of {} finished with {:?}", outcome.url(), outcome.status());

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&outcome)
    } else {
        serde_json::to_string(&outcome)
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
