use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::tweet::{deserialize_tweets, Tweet};

/// Timestamp format accepted by the `since:`/`until:` search operators
static WINDOW_FORMAT: &str = "%Y-%m-%d_%H:%M:%S_UTC";

/// All posts by one account inside a time window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub account: String,
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl SearchQuery {
    pub fn new(account: impl Into<String>, since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            account: account.into(),
            since,
            until,
        }
    }

    /// Render the query string sent as the `query` parameter
    pub fn to_query_string(&self) -> String {
        format!(
            "from:{} since:{} until:{}",
            self.account,
            self.since.format(WINDOW_FORMAT),
            self.until.format(WINDOW_FORMAT)
        )
    }
}

/// One page of search results
#[derive(Deserialize, Debug, Default, Clone)]
pub struct SearchPage {
    #[serde(default, deserialize_with = "deserialize_tweets")]
    pub tweets: Vec<Tweet>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl SearchPage {
    /// Cursor for the following page, if there is one to fetch
    pub fn next_cursor(&self) -> Option<&str> {
        if !self.has_next_page {
            return None;
        }
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}
