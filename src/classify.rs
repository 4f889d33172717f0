//! Finds the records within the sanitized `nslookup -debug` output.
//!
//! Each answer is printed as the owner name, followed by the record and its TTL:
//!
//! ```text
//!     ->  example.com
//!         internet address = 93.184.216.34
//!         ttl = 3600 (1 hour)
//! ```
//!
//! Text records put their value on the line after the record, so their TTL is
//! one line further down:
//!
//! ```text
//!     ->  example.com
//!         text =
//!         "v=spf1 -all"
//!         ttl = 86400 (1 day)
//! ```

use crate::types::RecordType;

/// The lines a single record is extracted from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window<'a> {
    pub record_type: RecordType,

    /// The line holding the record's value.
    pub record_line: &'a str,

    /// The line holding the record's TTL.
    pub ttl_line: &'a str,

    /// Index of the line following the owner name.
    pub index: usize,
}

#[derive(Debug)]
enum State<'a> {
    /// Looking for the next owner name matching the anchor.
    SeekAnchor,

    /// Found the anchor at this index, checking the lines after it.
    ConfirmMarker(usize),

    /// A complete window is ready to be returned.
    EmitRecord(Window<'a>),

    Done,
}

/// Iterator over the record windows in a set of sanitized lines.
pub struct Windows<'a, S> {
    lines: &'a [S],
    anchor: String,

    /// The next line that may be an anchor.
    cursor: usize,
    state: State<'a>,
}

/// Returns the records windows in `lines` that belong to `anchor`, in the
/// order they appear.
///
/// ```
/// use nslookup::{windows, RecordType};
///
/// let lines = vec!["example.com", "internet address = 93.184.216.34", "ttl = 3600"];
/// let found: Vec<_> = windows(&lines, "example.com").collect();
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].record_type, RecordType::A);
/// assert_eq!(found[0].record_line, "internet address = 93.184.216.34");
/// assert_eq!(found[0].ttl_line, "ttl = 3600");
/// ```
pub fn windows<'a, S: AsRef<str>>(lines: &'a [S], anchor: &str) -> Windows<'a, S> {
    Windows {
        lines,
        anchor: anchor.to_lowercase(),
        cursor: 0,
        state: State::SeekAnchor,
    }
}

/// Strips the "->" nslookup prints before each owner name.
fn owner_name(line: &str) -> String {
    let line = line.trim();
    line.strip_prefix("->").unwrap_or(line).trim().to_lowercase()
}

fn classify(line: &str) -> Option<RecordType> {
    if line.contains("nameserver") {
        Some(RecordType::NS)
    } else if line.contains("mx") {
        Some(RecordType::MX)
    } else if line.contains("internet address") {
        Some(RecordType::A)
    } else {
        None
    }
}

fn has_ttl(line: &str) -> bool {
    line.to_lowercase().contains("ttl")
}

impl<'a, S: AsRef<str>> Windows<'a, S> {
    fn line(&self, i: usize) -> Option<&'a str> {
        let lines: &'a [S] = self.lines;
        lines.get(i).map(|line| line.as_ref())
    }

    /// Returns the index of the next anchor that still has a record and a TTL
    /// line after it.
    fn seek_anchor(&self) -> Option<usize> {
        let end = self.lines.len().saturating_sub(2);
        (self.cursor..end).find(|&at| {
            self.line(at)
                .map_or(false, |line| owner_name(line) == self.anchor)
        })
    }

    fn confirm_marker(&self, anchor: usize) -> Option<Window<'a>> {
        let index = anchor + 1;
        let cur = self.line(index)?;
        let next = self.line(index + 1)?;

        if has_ttl(next) {
            return classify(&cur.to_lowercase()).map(|record_type| Window {
                record_type,
                record_line: cur,
                ttl_line: next,
                index,
            });
        }

        let after = self.line(index + 2)?;
        if has_ttl(after) {
            return Some(Window {
                record_type: RecordType::TXT,
                record_line: next,
                ttl_line: after,
                index,
            });
        }

        None
    }
}

impl<'a, S: AsRef<str>> Iterator for Windows<'a, S> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Window<'a>> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::SeekAnchor => {
                    if let Some(at) = self.seek_anchor() {
                        self.state = State::ConfirmMarker(at);
                    }
                }
                State::ConfirmMarker(at) => {
                    self.cursor = at + 1;
                    self.state = match self.confirm_marker(at) {
                        Some(window) => State::EmitRecord(window),
                        None => State::SeekAnchor,
                    };
                }
                State::EmitRecord(window) => {
                    self.state = State::SeekAnchor;
                    return Some(window);
                }
                State::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn types(lines: &[&str], anchor: &str) -> Vec<(RecordType, usize)> {
        windows(lines, anchor)
            .map(|w| (w.record_type, w.index))
            .collect()
    }

    #[test]
    fn test_classify() {
        let lines = vec![
            "    ->  example.com",
            "        internet address = 93.184.216.34",
            "        ttl = 3600 (1 hour)",
            "    ->  example.com",
            "        nameserver = a.iana-servers.net",
            "        ttl = 86400 (1 day)",
            "    ->  example.com",
            "        MX preference = 10, mail exchanger = mail.example.com",
            "        ttl = 86400 (1 day)",
            "    ->  example.com",
            "        text =",
            "        \"v=spf1 -all\"",
            "        ttl = 86400 (1 day)",
        ];

        let got: Vec<Window> = windows(&lines, "example.com").collect();
        assert_eq!(
            got,
            vec![
                Window {
                    record_type: RecordType::A,
                    record_line: lines[1],
                    ttl_line: lines[2],
                    index: 1,
                },
                Window {
                    record_type: RecordType::NS,
                    record_line: lines[4],
                    ttl_line: lines[5],
                    index: 4,
                },
                Window {
                    record_type: RecordType::MX,
                    record_line: lines[7],
                    ttl_line: lines[8],
                    index: 7,
                },
                Window {
                    record_type: RecordType::TXT,
                    record_line: lines[11],
                    ttl_line: lines[12],
                    index: 10,
                },
            ]
        );
    }

    #[test]
    fn test_anchor_must_match_exactly() {
        let lines = vec![
            "www.example.com",
            "internet address = 93.184.216.34",
            "ttl = 3600",
            "EXAMPLE.COM",
            "internet address = 93.184.216.35",
            "ttl = 3600",
            "example.com, type = A, class = IN",
            "internet address = 93.184.216.36",
            "ttl = 3600",
        ];

        assert_eq!(types(&lines, "example.com"), vec![(RecordType::A, 4)]);
        assert_eq!(types(&lines, "Example.com"), vec![(RecordType::A, 4)]);
        assert_eq!(types(&lines, "www.example.com"), vec![(RecordType::A, 1)]);
        assert!(types(&lines, "example").is_empty());
    }

    #[test]
    fn test_unknown_record_is_skipped() {
        let lines = vec![
            "->  example.com",
            "AAAA IPv6 address = 2606:2800:220:1:248:1893:25c8:1946",
            "ttl = 3600",
            "->  example.com",
            "internet address = 93.184.216.34",
            "ttl = 3600",
        ];

        assert_eq!(types(&lines, "example.com"), vec![(RecordType::A, 4)]);
    }

    #[test]
    fn test_soa_is_not_text() {
        // SOA records print their ttl first, which must not look like a TXT record.
        let lines = vec![
            "->  example.com",
            "ttl = 3600 (1 hour)",
            "primary name server = ns.icann.org",
            "responsible mail addr = noc.dns.icann.org",
            "serial  = 2022091303",
        ];

        assert!(types(&lines, "example.com").is_empty());
    }

    #[test]
    fn test_end_of_buffer() {
        // Too short for any window.
        assert!(types(&[], "example.com").is_empty());
        assert!(types(&["example.com"], "example.com").is_empty());
        assert!(types(&["example.com", "internet address = 1.2.3.4"], "example.com").is_empty());

        // The TXT layout needs one more line than is available.
        assert!(types(&["example.com", "text =", "\"hello\""], "example.com").is_empty());
        assert_eq!(
            types(&["example.com", "text =", "\"hello\"", "ttl = 5"], "example.com"),
            vec![(RecordType::TXT, 1)]
        );

        // An anchor on the last lines has nothing after it.
        assert_eq!(
            types(
                &["example.com", "internet address = 1.2.3.4", "ttl = 5", "example.com", "x"],
                "example.com"
            ),
            vec![(RecordType::A, 1)]
        );
    }
}
