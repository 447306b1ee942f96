use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::StreamExt;
use twitterapi::{search_pages, SearchQuery, SearchSource, Tweet};

/// Fetch every post by `account` between `since` and `until`.
///
/// A failed page ends the fetch for this account; whatever was retrieved
/// before the failure is returned.
pub async fn fetch_tweets<S>(
    source: &S,
    account: &str,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
    delay: Duration,
) -> Vec<Tweet>
where
    S: SearchSource + ?Sized,
{
    let query = SearchQuery::new(account, since, until);
    let pages = search_pages(source, &query, delay);
    futures::pin_mut!(pages);

    let mut all_tweets = vec![];
    while let Some(page) = pages.next().await {
        match page {
            Ok(page) => all_tweets.extend(page.tweets),
            Err(e) => {
                match e.status() {
                    Some(status) => log::error!("Error for @{}: {}", account, status.as_u16()),
                    None => log::error!("Error for @{}: {}", account, e),
                }
                break;
            }
        }
    }

    all_tweets
}
