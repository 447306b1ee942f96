use serde::{Deserialize, Deserializer};

/// A single post as returned by the advanced search endpoint.
///
/// Only the fields needed for the digest are kept; everything else in the
/// response is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub favorite_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub retweet_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub reply_count: u64,
}

impl Tweet {
    pub fn permalink(&self, account: &str) -> String {
        format!("https://twitter.com/{}/status/{}", account, self.id)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match v {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for tweet id, got {}",
            other
        ))),
    }
}

fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let v: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}

/// Counters that are not a non-negative integer read as 0
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let v: serde_json::Value = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Decode a list of posts, skipping entries that are not valid posts
pub(crate) fn deserialize_tweets<'de, D>(deserializer: D) -> Result<Vec<Tweet>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<serde_json::Value>> = Deserialize::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}
