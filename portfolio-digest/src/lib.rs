pub mod accounts;
pub mod collector;
pub mod config;
mod fetcher;
pub mod filter;
pub mod report;
pub mod watermark;

pub use collector::{Collection, Collector, Dataset};
pub use fetcher::fetch_tweets;
