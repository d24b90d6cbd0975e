// src/storage/cookies.rs

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::error::AppError;

/// File-backed cookie jar.
///
/// One record per line, formatted like a `Set-Cookie` header:
///
/// ```text
/// username=Ada; Expires=2025-01-08T12:00:00Z
/// ```
///
/// Values are stored verbatim; no percent-encoding or escaping is performed,
/// so a value containing `;` or a newline is not representable. Known
/// limitation; player names are the only values stored here.
pub struct CookieJar {
    path: PathBuf,
}

impl CookieJar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the live value stored under `name`.
    ///
    /// Unset, expired and malformed records all read as `None`; so does an
    /// unreadable jar file. "Not present" is the only miss signal.
    pub fn get(&self, name: &str) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;

        for line in contents.lines() {
            if let Some(record) = CookieRecord::parse(line) {
                if record.name == name {
                    if record.expires > Utc::now() {
                        return Some(record.value);
                    }
                    return None;
                }
            }
        }

        None
    }

    /// Stores `value` under `name`, expiring `ttl_days` from now.
    /// Overwrites any existing record for the same name.
    pub fn set(&self, name: &str, value: &str, ttl_days: i64) -> Result<(), AppError> {
        self.write_record(name, value, Utc::now() + Duration::days(ttl_days))
    }

    /// Removes `name` by writing an already-expired record for it.
    pub fn clear(&self, name: &str) -> Result<(), AppError> {
        self.write_record(name, "", Utc::now() - Duration::days(1))
    }

    /// Rewrites the whole jar with `name` replaced; records for other
    /// names are kept as-is.
    fn write_record(
        &self,
        name: &str,
        value: &str,
        expires: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let existing = fs::read_to_string(&self.path).unwrap_or_default();

        let mut lines: Vec<String> = existing
            .lines()
            .filter(|line| {
                CookieRecord::parse(line).is_none_or(|record| record.name != name)
            })
            .map(str::to_string)
            .collect();

        lines.push(format!(
            "{}={}; Expires={}",
            name,
            value,
            expires.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        ));

        fs::write(&self.path, lines.join("\n") + "\n")?;
        Ok(())
    }
}

struct CookieRecord {
    name: String,
    value: String,
    expires: DateTime<Utc>,
}

impl CookieRecord {
    /// Parses one `;`-delimited, possibly space-padded record line.
    ///
    /// The first attribute must be `name=value`; an `Expires` attribute that
    /// is missing or fails to parse makes the record read as expired.
    fn parse(line: &str) -> Option<Self> {
        let mut attrs = line.split(';').map(str::trim);

        let (name, value) = attrs.next()?.split_once('=')?;
        if name.is_empty() {
            return None;
        }

        let expires = attrs
            .find_map(|attr| attr.strip_prefix("Expires="))
            .and_then(|stamp| DateTime::parse_from_rfc3339(stamp).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        Some(Self {
            name: name.to_string(),
            value: value.to_string(),
            expires,
        })
    }
}
