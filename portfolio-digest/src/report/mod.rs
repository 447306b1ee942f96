//! Static HTML digest of a collection run.
//!
//! The output is a single self-contained document: styles are inlined and no
//! external assets are referenced.

use chrono::{DateTime, Utc};
use htmlescape::encode_minimal;
use twitterapi::Tweet;

use self::format::{date_range, display_date, group_thousands, updates_badge};
use self::template::{FOOTER, NO_ACTIVITY, STYLE};
use crate::collector::Dataset;

mod format;
mod template;

pub static DEFAULT_TITLE: &str = "Weekly Portfolio Update";

/// One account's posts, newest first
#[derive(Debug)]
pub struct AccountSummary<'a> {
    pub account: &'a str,
    pub count: usize,
    pub tweets: Vec<&'a Tweet>,
}

/// Per-account summaries, most active account first. Ties keep dataset order.
pub fn summarize(dataset: &Dataset) -> Vec<AccountSummary<'_>> {
    let mut summaries: Vec<_> = dataset
        .iter()
        .map(|(account, tweets)| {
            let mut sorted: Vec<&Tweet> = tweets.iter().collect();
            // Fixed width timestamps, so string order is chronological
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            AccountSummary {
                account: account.as_str(),
                count: tweets.len(),
                tweets: sorted,
            }
        })
        .collect();
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

pub fn render(dataset: &Dataset, since: DateTime<Utc>, until: DateTime<Utc>) -> String {
    render_titled(DEFAULT_TITLE, dataset, since, until)
}

pub fn render_titled(
    title: &str,
    dataset: &Dataset,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
) -> String {
    let summaries = summarize(dataset);
    let active_accounts = dataset.len();
    let total_tweets: usize = dataset.values().map(Vec::len).sum();

    let mut html = String::new();
    html.push_str(&header(title, since, until, active_accounts, total_tweets));

    if summaries.is_empty() {
        html.push_str(NO_ACTIVITY);
    } else {
        for summary in &summaries {
            html.push_str(&account_card(summary));
        }
    }

    html.push_str(FOOTER);
    html
}

fn header(
    title: &str,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
    active_accounts: usize,
    total_tweets: usize,
) -> String {
    let title = encode_minimal(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 {title}</h1>
            <div class="date-range">{range}</div>
            <div class="summary">
                <div>
                    <div class="number">{active_accounts}</div>
                    <div class="label">Active Companies</div>
                </div>
                <div>
                    <div class="number">{total_tweets}</div>
                    <div class="label">Total Updates</div>
                </div>
            </div>
        </div>
"#,
        title = title,
        style = STYLE,
        range = date_range(since, until),
        active_accounts = active_accounts,
        total_tweets = total_tweets,
    )
}

fn account_card(summary: &AccountSummary) -> String {
    let mut card = format!(
        r#"
        <div class="account-card">
            <div class="account-header">
                <h2>@{}</h2>
                <div class="badge">{}</div>
            </div>
"#,
        encode_minimal(summary.account),
        updates_badge(summary.count)
    );

    for tweet in &summary.tweets {
        card.push_str(&tweet_entry(summary.account, tweet));
    }

    card.push_str("        </div>\n");
    card
}

fn tweet_entry(account: &str, tweet: &Tweet) -> String {
    let text = encode_minimal(&tweet.text).replace('\n', "<br>");
    format!(
        r#"
            <div class="tweet">
                <div class="tweet-date">{date}</div>
                <div class="tweet-text">{text}</div>
                <div class="tweet-meta">
                    <span>❤️ {likes}</span>
                    <span>🔄 {retweets}</span>
                    <span>💬 {replies}</span>
                    <a href="{url}" target="_blank" class="tweet-link">View on Twitter →</a>
                </div>
            </div>
"#,
        date = encode_minimal(&display_date(&tweet.created_at)),
        text = text,
        likes = group_thousands(tweet.favorite_count),
        retweets = group_thousands(tweet.retweet_count),
        replies = group_thousands(tweet.reply_count),
        url = encode_minimal(&tweet.permalink(account)).replace('"', "&quot;"),
    )
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    fn tweet(id: &str, created_at: &str, text: &str) -> Tweet {
        Tweet {
            id: id.to_string(),
            text: text.to_string(),
            created_at: created_at.to_string(),
            ..Default::default()
        }
    }

    fn posts(account: &str, n: usize) -> Vec<Tweet> {
        (0..n)
            .map(|i| {
                tweet(
                    &format!("{}{}", account, i),
                    &format!("2024-01-0{}T10:00:00.000Z", i + 1),
                    "post",
                )
            })
            .collect()
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
        )
    }

    fn card_order(html: &str) -> Vec<String> {
        html.match_indices("<h2>@")
            .map(|(i, _)| {
                let rest = &html[i + 5..];
                rest[..rest.find('<').unwrap()].to_string()
            })
            .collect()
    }

    #[test]
    fn cards_sorted_by_activity() {
        let mut dataset = Dataset::new();
        dataset.insert("three".to_string(), posts("three", 3));
        dataset.insert("one".to_string(), posts("one", 1));
        dataset.insert("five".to_string(), posts("five", 5));
        let (since, until) = window();

        let html = render(&dataset, since, until);
        assert_eq!(vec!["five", "three", "one"], card_order(&html));
    }

    #[test]
    fn ties_keep_encounter_order() {
        let mut dataset = Dataset::new();
        dataset.insert("beta".to_string(), posts("beta", 2));
        dataset.insert("alpha".to_string(), posts("alpha", 2));
        dataset.insert("gamma".to_string(), posts("gamma", 4));
        let (since, until) = window();

        let html = render(&dataset, since, until);
        assert_eq!(vec!["gamma", "beta", "alpha"], card_order(&html));
    }

    #[test]
    fn tweets_newest_first() {
        let mut dataset = Dataset::new();
        dataset.insert(
            "acme".to_string(),
            vec![
                tweet("1", "2024-01-02T10:00:00.000Z", "middle"),
                tweet("2", "2024-01-05T09:00:00.000Z", "newest"),
                tweet("3", "2024-01-01T08:00:00.000Z", "oldest"),
            ],
        );
        let summaries = summarize(&dataset);
        let ids: Vec<_> = summaries[0].tweets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(vec!["2", "1", "3"], ids);

        let (since, until) = window();
        let html = render(&dataset, since, until);
        let newest = html.find("newest").unwrap();
        let middle = html.find("middle").unwrap();
        let oldest = html.find("oldest").unwrap();
        assert!(newest < middle && middle < oldest);
    }

    #[test]
    fn empty_dataset_has_placeholder_only() {
        let (since, until) = window();
        let html = render(&Dataset::new(), since, until);
        assert!(html.contains("No activity this week"));
        assert!(!html.contains("class=\"account-card\""));
        assert!(html.contains(r#"<div class="number">0</div>"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn render_is_deterministic() {
        let mut dataset = Dataset::new();
        dataset.insert("acme".to_string(), posts("acme", 3));
        dataset.insert("globex".to_string(), posts("globex", 2));
        let (since, until) = window();
        assert_eq!(
            render(&dataset, since, until),
            render(&dataset, since, until)
        );
    }

    #[test]
    fn single_post_card() {
        let mut dataset = Dataset::new();
        let mut post = tweet(
            "1790",
            "2024-01-03T15:30:00.000Z",
            "Line one\nLine <two> & more",
        );
        post.favorite_count = 12345;
        post.retweet_count = 7;
        post.reply_count = 1000;
        dataset.insert("acme".to_string(), vec![post]);
        let (since, until) = window();

        let html = render(&dataset, since, until);
        assert!(html.contains(r#"<div class="number">1</div>"#));
        assert!(html.contains("<h2>@acme</h2>"));
        assert!(html.contains(r#"<div class="badge">1 update</div>"#));
        assert!(html.contains("Jan 03, 03:30 PM"));
        assert!(html.contains("Line one<br>Line &lt;two&gt; &amp; more"));
        assert!(html.contains("❤️ 12,345"));
        assert!(html.contains("🔄 7"));
        assert!(html.contains("💬 1,000"));
        assert!(html.contains("https://twitter.com/acme/status/1790"));
        assert!(html.contains("Jan 01 - Jan 08, 2024"));
        assert!(!html.contains("No activity this week"));
    }

    #[test]
    fn plural_badge() {
        let mut dataset = Dataset::new();
        dataset.insert("acme".to_string(), posts("acme", 2));
        let (since, until) = window();
        let html = render(&dataset, since, until);
        assert!(html.contains(r#"<div class="badge">2 updates</div>"#));
    }

    #[test]
    fn bad_date_shown_raw() {
        let mut dataset = Dataset::new();
        dataset.insert(
            "acme".to_string(),
            vec![tweet("1", "sometime", "a"), tweet("2", "2024-01-02T00:00:00.000Z", "b")],
        );
        let (since, until) = window();
        let html = render(&dataset, since, until);
        assert!(html.contains(r#"<div class="tweet-date">sometime</div>"#));
        assert!(html.contains("Jan 02, 12:00 AM"));
    }

    #[test]
    fn custom_title_is_escaped() {
        let (since, until) = window();
        let html = render_titled("Q1 <Portfolio>", &Dataset::new(), since, until);
        assert!(html.contains("<title>Q1 &lt;Portfolio&gt;</title>"));
    }
}
