use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, SubsecRound, Utc};
use indexmap::IndexMap;
use twitterapi::{SearchSource, Tweet};

use crate::fetcher::fetch_tweets;
use crate::filter::include;
use crate::watermark::{default_since, Watermark};

/// Retained posts per account, in account list order. Accounts without
/// retained posts are absent. A handle listed twice keeps its first position
/// and the posts of its last non-empty fetch.
pub type Dataset = IndexMap<String, Vec<Tweet>>;

#[derive(Debug)]
pub struct Collection {
    pub dataset: Dataset,
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl Collection {
    pub fn total_tweets(&self) -> usize {
        self.dataset.values().map(Vec::len).sum()
    }
}

pub struct Collector<'a, S: ?Sized> {
    source: &'a S,
    delay: Duration,
    save_watermark: bool,
}

impl<'a, S> Collector<'a, S>
where
    S: SearchSource + ?Sized,
{
    pub fn new(source: &'a S, delay: Duration) -> Self {
        Self {
            source,
            delay,
            save_watermark: true,
        }
    }

    /// Leave the watermark untouched after collecting
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.save_watermark = !dry_run;
        self
    }

    /// Collect everything posted since the last run and advance the watermark
    /// to the start of this collection.
    pub async fn collect(&self, accounts: &[String], watermark: &Watermark) -> Result<Collection> {
        // Truncated to what the watermark file can represent
        let until = Utc::now().trunc_subsecs(6);
        let since = window_start(watermark.load_at(until), until);

        println!(
            "Collecting tweets from {} to {}",
            since.date_naive(),
            until.date_naive()
        );
        println!("Monitoring {} accounts...\n", accounts.len());

        let dataset = self.collect_window(accounts, since, until).await;

        if self.save_watermark {
            watermark.save(until)?;
        } else {
            log::info!("Dry run, watermark {:?} left unchanged", watermark.path());
        }

        Ok(Collection {
            dataset,
            since,
            until,
        })
    }

    pub async fn collect_window(
        &self,
        accounts: &[String],
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Dataset {
        let mut dataset = Dataset::new();

        for (i, account) in accounts.iter().enumerate() {
            println!("[{}/{}] @{}", i + 1, accounts.len(), account);
            let filtered: Vec<_> = fetch_tweets(self.source, account, since, until, self.delay)
                .await
                .into_iter()
                .filter(include)
                .collect();

            if filtered.is_empty() {
                println!("  - No activity");
            } else {
                println!("  ✓ {} tweets", filtered.len());
                dataset.insert(account.clone(), filtered);
            }

            if i + 1 < accounts.len() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        dataset
    }
}

/// Clamp a stored watermark so the window is never empty or inverted
fn window_start(stored: DateTime<Utc>, until: DateTime<Utc>) -> DateTime<Utc> {
    if stored < until {
        stored
    } else {
        log::warn!(
            "Watermark {} is not before {}, starting one week back",
            stored,
            until
        );
        default_since(until)
    }
}
