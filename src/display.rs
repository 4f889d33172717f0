//! Implements the Display trait for the various types, so they output
//! in a `dig` like style.

use crate::QueryResult;
use crate::Record;
use std::fmt;

/// Displays the record's values tab separated, followed by its TTL.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Record::A { ip, .. } => write!(f, "{}", ip)?,
            Record::NS { host, ip, .. } => write!(f, "{}\t{}", host, ip)?,
            Record::MX {
                host,
                priority,
                ip,
                ..
            } => write!(f, "{} {}\t{}", priority, host, ip)?,
            Record::TXT { text, .. } => write!(f, "{}", text)?,
        };

        if !self.ttl().is_empty() {
            write!(f, "\t; {}", self.ttl())?;
        }

        Ok(())
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, ";; no records found")?;
        }

        for (r#type, records) in self.iter() {
            writeln!(f, ";; {} RECORDS:", r#type)?;
            for record in records {
                writeln!(f, "{}", record)?;
            }
            writeln!(f)?;
        }

        if !self.warnings().is_empty() {
            writeln!(f, ";; WARNINGS:")?;
            for warning in self.warnings() {
                writeln!(f, "; {}", warning)?;
            }
        }

        Ok(())
    }
}
