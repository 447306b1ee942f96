use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

/// Normalize a handle: surrounding whitespace and any leading `@` removed,
/// lowercased.
pub fn normalize(handle: &str) -> String {
    handle
        .trim_start_matches(|c: char| c == '@' || c.is_whitespace())
        .trim_end()
        .to_lowercase()
}

/// Read one handle per line, in file order. Blank lines and `#` comments are
/// skipped, duplicates are kept.
pub fn load_accounts(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("Unable to open account list {:?}", path.as_ref()))?;
    parse_accounts(BufReader::new(file))
        .with_context(|| format!("Unable to read account list {:?}", path.as_ref()))
}

pub fn parse_accounts(reader: impl BufRead) -> Result<Vec<String>> {
    let mut accounts = vec![];
    for line in reader.lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        let account = normalize(&line);
        if !account.is_empty() {
            accounts.push(account);
        }
    }
    Ok(accounts)
}
