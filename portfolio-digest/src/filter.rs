use twitterapi::Tweet;

/// Prefix marking a plain retweet
pub static RESHARE_MARKER: &str = "RT @";

/// Keep everything except plain retweets
pub fn include(tweet: &Tweet) -> bool {
    !tweet.text.trim().starts_with(RESHARE_MARKER)
}

#[cfg(test)]
mod test {
    use super::*;

    fn tweet(text: &str) -> Tweet {
        Tweet {
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn drops_retweets() {
        assert!(!include(&tweet("RT @globex: big news")));
        assert!(!include(&tweet("  \nRT @globex: big news")));
    }

    #[test]
    fn keeps_everything_else() {
        assert!(include(&tweet("")));
        assert!(include(&tweet("Shipping v2 today")));
        assert!(include(&tweet("rt @globex lowercase is not a retweet")));
        assert!(include(&tweet("RT@globex")));
        assert!(include(&tweet("Great thread RT @globex")));
        assert!(include(&tweet("@globex RT @initech")));
    }
}
