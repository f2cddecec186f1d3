//! Timestamp column rendering.

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Config value that selects [`DateFormat::Rfc3339`].
pub const RFC3339: &str = "rfc3339";

/// How the leading timestamp of a console line is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `2006-01-02T15:04:05+07:00`, whole seconds, `Z` for UTC.
    #[default]
    Rfc3339,
    /// A chrono strftime pattern such as `%Y-%m-%d %H:%M:%S`.
    Strftime(String),
}

impl DateFormat {
    /// Accepts `rfc3339` (any case) or a strftime pattern.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        if pattern.eq_ignore_ascii_case(RFC3339) {
            Self::Rfc3339
        } else {
            Self::Strftime(pattern.to_string())
        }
    }

    /// Never fails: a pattern chrono can't render falls back to RFC 3339 so a
    /// config typo can't take logging down.
    #[must_use]
    pub fn render<Tz>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            Self::Rfc3339 => timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            Self::Strftime(pattern) => {
                let mut out = String::new();
                if write!(out, "{}", timestamp.format(pattern)).is_ok() {
                    out
                } else {
                    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
                }
            }
        }
    }
}

impl FromStr for DateFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rfc3339 => f.write_str(RFC3339),
            Self::Strftime(pattern) => f.write_str(pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn rfc3339_uses_z_for_utc() {
        assert_eq!(DateFormat::Rfc3339.render(&sample()), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(DateFormat::new("RFC3339"), DateFormat::Rfc3339);
    }

    #[test]
    fn strftime_pattern() {
        let format = DateFormat::new("%Y/%m/%d %H:%M");
        assert_eq!(format.render(&sample()), "2024/01/02 03:04");
    }

    #[test]
    fn broken_pattern_falls_back() {
        let format = DateFormat::new("%Y-%");
        assert_eq!(format.render(&sample()), "2024-01-02T03:04:05Z");
    }
}
