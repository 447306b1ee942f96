use chrono::{DateTime, NaiveDateTime, Utc};

static DISPLAY_FORMAT: &str = "%b %d, %I:%M %p";

/// Human readable post date. Unparseable values are returned unchanged.
pub fn display_date(created_at: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.fZ") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    // Classic Twitter format, e.g. "Tue Jan 02 03:04:05 +0000 2024"
    if let Ok(dt) = DateTime::parse_from_str(created_at, "%a %b %d %T %z %Y") {
        return dt.with_timezone(&Utc).format(DISPLAY_FORMAT).to_string();
    }
    created_at.to_string()
}

/// Header range such as "Jan 01 - Jan 08, 2024"
pub fn date_range(since: DateTime<Utc>, until: DateTime<Utc>) -> String {
    format!("{} - {}", since.format("%b %d"), until.format("%b %d, %Y"))
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn updates_badge(count: usize) -> String {
    if count == 1 {
        "1 update".to_string()
    } else {
        format!("{} updates", count)
    }
}
