mod client;
mod error;
mod pages;
mod search;
mod source;
mod tweet;

pub use client::{TwitterApiClient, DEFAULT_BASE_URL};
pub use error::TwitterApiError;
pub use pages::search_pages;
pub use search::{SearchPage, SearchQuery};
pub use source::SearchSource;
pub use tweet::Tweet;
