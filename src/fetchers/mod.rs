pub mod fetcher;
pub mod web;

pub use fetcher::{Fetch, FetchRequest, FetchedPage};
pub use web::WebFetcher;
