use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use home_dir::HomeDirExt;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use url::Url;

static API_KEY_ENV: &str = "TWITTERAPI_IO_KEY";

#[derive(Debug, Deserialize)]
pub struct Config {
    api_key: Option<String>,
    #[serde(default = "default_delay", deserialize_with = "deserialize_seconds")]
    pub rate_limit_delay: Duration,
    #[serde(default = "default_output_path", deserialize_with = "deserialize_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_watermark_path", deserialize_with = "deserialize_path")]
    pub watermark_path: PathBuf,
    #[serde(default = "default_account_source", deserialize_with = "deserialize_path")]
    pub account_source: PathBuf,
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let conf_contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Unable to read config file {:?}", path.as_ref()))?;
        Ok(toml::from_str(&conf_contents)?)
    }

    /// Read the config file if it exists, otherwise fall back to defaults
    pub fn read_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::read(path)
        } else {
            Ok(toml::from_str("")?)
        }
    }

    /// API key from the config file, or from the environment if absent there
    pub fn api_key(&self) -> Result<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.trim().to_string());
        }
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(anyhow!(
                "Missing api_key in config file and {} is not set",
                API_KEY_ENV
            )),
        }
    }
}

fn default_delay() -> Duration {
    Duration::from_secs(5)
}

fn default_output_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_watermark_path() -> PathBuf {
    PathBuf::from("last_run.json")
}

fn default_account_source() -> PathBuf {
    PathBuf::from("accounts.txt")
}

fn default_base_url() -> Url {
    Url::parse(twitterapi::DEFAULT_BASE_URL).expect("default base url is valid")
}

fn default_title() -> String {
    "Weekly Portfolio Update".to_string()
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
}

fn deserialize_path<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let s: PathBuf = Deserialize::deserialize(deserializer)?;
    s.expand_home().map_err(D::Error::custom)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let conf: Config = toml::from_str(r#"api_key = "abc""#).unwrap();
        assert_eq!("abc", conf.api_key().unwrap());
        assert_eq!(Duration::from_secs(5), conf.rate_limit_delay);
        assert_eq!(PathBuf::from("index.html"), conf.output_path);
        assert_eq!(PathBuf::from("last_run.json"), conf.watermark_path);
        assert_eq!(PathBuf::from("accounts.txt"), conf.account_source);
        assert_eq!("https://api.twitterapi.io/", conf.base_url.as_str());
        assert_eq!("Weekly Portfolio Update", conf.title);
    }

    #[test]
    fn overrides() {
        let conf: Config = toml::from_str(
            r#"
            api_key = "abc"
            rate_limit_delay = 0.5
            output_path = "out/report.html"
            watermark_path = "state/last_run.json"
            account_source = "portfolio.txt"
            base_url = "http://localhost:9000"
            title = "Portfolio"
            "#,
        )
        .unwrap();
        assert_eq!(Duration::from_millis(500), conf.rate_limit_delay);
        assert_eq!(PathBuf::from("out/report.html"), conf.output_path);
        assert_eq!(PathBuf::from("state/last_run.json"), conf.watermark_path);
        assert_eq!(PathBuf::from("portfolio.txt"), conf.account_source);
        assert_eq!("http://localhost:9000/", conf.base_url.as_str());
        assert_eq!("Portfolio", conf.title);
    }

    #[test]
    fn negative_delay_rejected() {
        let conf = toml::from_str::<Config>("rate_limit_delay = -1");
        assert!(conf.is_err());
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::read(dir.path().join("missing.toml")).is_err());
        assert!(Config::read_or_default(dir.path().join("missing.toml")).is_ok());
    }
}
