//! Turns the `ttl = 3600` lines into "1 hour".

use crate::errors::RecordError;
use regex::Regex;
use std::fmt;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// A TTL broken down into whole days, hours, minutes and seconds.
///
/// ```
/// use nslookup::Ttl;
///
/// let ttl = Ttl::from_secs(90061);
/// assert_eq!((ttl.days, ttl.hours, ttl.minutes, ttl.seconds), (1, 1, 1, 1));
/// assert_eq!(ttl.to_string(), "1 day 1 hour 1 minute 1 second");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ttl {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Ttl {
    pub fn from_secs(secs: u64) -> Ttl {
        Ttl {
            days: secs / SECONDS_PER_DAY,
            hours: (secs / SECONDS_PER_HOUR) % 24,
            minutes: (secs / SECONDS_PER_MINUTE) % 60,
            seconds: secs % 60,
        }
    }
}

/// Lists only the non-zero units, so a zero TTL displays as the empty string.
impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];

        let mut first = true;
        for (n, unit) in units.iter().filter(|(n, _)| *n > 0) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", n, unit)?;
            if *n != 1 {
                f.write_str("s")?;
            }
            first = false;
        }

        Ok(())
    }
}

/// Formats a number of seconds, for example `format(3661) == "1 hour 1 minute 1 second"`.
pub fn format(secs: u64) -> String {
    Ttl::from_secs(secs).to_string()
}

/// Extracts the seconds from a line such as "ttl = 3600 (1 hour)".
pub fn parse_ttl(line: &str) -> Result<u64, RecordError> {
    lazy_static! {
        // "{word} = {seconds}"
        static ref RE: Regex = Regex::new(r"\w+\s*=\s*(\d+)").unwrap();
    }

    RE.captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| RecordError::TtlParseFailure {
            line: line.to_string(),
        })
}

/// Extracts the seconds from the line and formats them.
pub fn format_ttl(line: &str) -> Result<String, RecordError> {
    parse_ttl(line).map(format)
}
