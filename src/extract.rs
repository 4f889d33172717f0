//! Builds records out of the classified windows.

use crate::classify::windows;
use crate::classify::Window;
use crate::clients::HostResolver;
use crate::errors::RecordError;
use crate::ttl::format_ttl;
use crate::types::{QueryResult, Record, RecordType};
use futures::stream::{self, StreamExt};

/// Parses the window into a record. NS and MX records are returned with an
/// empty `ip`, to be filled in by [`resolve_hosts`].
pub fn parse(window: &Window) -> Result<Record, RecordError> {
    let record_type = window.record_type;
    let malformed = || RecordError::MalformedRecordLine {
        record_type,
        line: window.record_line.to_string(),
    };

    // "MX preference = 10, mail exchanger = mail.example.com"
    //   becomes "MXpreference=10,mailexchanger=mail.example.com"
    let line: String = window
        .record_line
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let record = match record_type {
        RecordType::A => Record::A {
            ip: value(&line).ok_or_else(malformed)?.to_string(),
            ttl: String::new(),
        },
        RecordType::NS => Record::NS {
            host: value(&line).ok_or_else(malformed)?.to_string(),
            ip: String::new(),
            ttl: String::new(),
        },
        RecordType::MX => {
            let segments: Vec<&str> = line.split(',').collect();
            let (preference, exchanger) = match segments.as_slice() {
                [preference, exchanger] => (*preference, *exchanger),
                _ => return Err(malformed()),
            };

            Record::MX {
                priority: value(preference)
                    .and_then(|p| p.parse().ok())
                    .ok_or_else(malformed)?,
                host: value(exchanger).ok_or_else(malformed)?.to_string(),
                ip: String::new(),
                ttl: String::new(),
            }
        }
        RecordType::TXT => Record::TXT {
            text: window.record_line.trim().to_string(),
            ttl: String::new(),
        },
    };

    let ttl = format_ttl(window.ttl_line)?;
    Ok(with_ttl(record, ttl))
}

/// Returns the value of a "name=value" segment.
fn value(segment: &str) -> Option<&str> {
    let tokens: Vec<&str> = segment.split('=').collect();
    match tokens.as_slice() {
        [_, value] if !value.is_empty() => Some(*value),
        _ => None,
    }
}

fn with_ttl(record: Record, ttl: String) -> Record {
    match record {
        Record::A { ip, .. } => Record::A { ip, ttl },
        Record::NS { host, ip, .. } => Record::NS { host, ip, ttl },
        Record::MX {
            host,
            priority,
            ip,
            ..
        } => Record::MX {
            host,
            priority,
            ip,
            ttl,
        },
        Record::TXT { text, .. } => Record::TXT { text, ttl },
    }
}

/// Looks up the address of every NS and MX record's host, at most
/// `concurrency` at a time. The records are returned in their original order.
pub async fn resolve_hosts(
    records: Vec<Record>,
    resolver: &dyn HostResolver,
    concurrency: usize,
) -> Vec<Record> {
    stream::iter(records)
        .map(|record| resolve_host(record, resolver))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

async fn resolve_host(record: Record, resolver: &dyn HostResolver) -> Record {
    let ip = match record.host() {
        Some(host) => resolver.resolve_host(host).await,
        None => String::new(),
    };

    // A and TXT records ignore the ip.
    record.with_ip(ip)
}

/// Extracts every record for `anchor` from the sanitized lines.
///
/// Records that cannot be extracted are skipped and reported as warnings on
/// the result, they never stop the remaining records from being extracted.
pub async fn extract_records<S: AsRef<str>>(
    lines: &[S],
    anchor: &str,
    resolver: &dyn HostResolver,
    concurrency: usize,
) -> QueryResult {
    let mut result = QueryResult::default();
    let mut parsed = Vec::new();

    for window in windows(lines, anchor) {
        match parse(&window) {
            Ok(record) => parsed.push(record),
            Err(e) => {
                debug!("skipping record at line {}: {}", window.index, e);
                result.push_warning(e);
            }
        }
    }

    for record in resolve_hosts(parsed, resolver, concurrency).await {
        result.push(record);
    }

    result
}
