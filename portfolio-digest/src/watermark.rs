use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Time of the last completed collection, persisted between runs
pub struct Watermark {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct WatermarkRecord {
    last_run: String,
}

/// Window start used when no usable watermark exists
pub fn default_since(now: DateTime<Utc>) -> DateTime<Utc> {
    now - TimeDelta::weeks(1)
}

impl Watermark {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> DateTime<Utc> {
        self.load_at(Utc::now())
    }

    /// Last run time, or one week before `now` if the file is missing or
    /// unreadable.
    pub fn load_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.read() {
            Ok(t) => t,
            Err(e) => {
                log::debug!(
                    "No usable watermark at {:?} ({:#}), starting one week back",
                    self.path,
                    e
                );
                default_since(now)
            }
        }
    }

    fn read(&self) -> Result<DateTime<Utc>> {
        let contents = std::fs::read_to_string(&self.path)?;
        let record: WatermarkRecord = serde_json::from_str(&contents)?;
        parse_timestamp(&record.last_run)
    }

    /// Overwrite the watermark with `run_time`.
    ///
    /// The record is written to a temporary file next to the target and then
    /// renamed over it.
    pub fn save(&self, run_time: DateTime<Utc>) -> Result<()> {
        let record = WatermarkRecord {
            last_run: run_time.to_rfc3339_opts(SecondsFormat::Micros, false),
        };
        let data = serde_json::to_string(&record)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Unable to create temporary file in {:?}", dir))?;
        file.write_all(data.as_bytes())?;
        file.persist(&self.path)
            .with_context(|| format!("Unable to write watermark {:?}", self.path))?;

        log::debug!("Saved watermark {} to {:?}", record.last_run, self.path);
        Ok(())
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .with_context(|| format!("Invalid watermark timestamp: {}", s))?;
    Ok(naive.and_utc())
}
