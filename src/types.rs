use crate::errors::LookupError;
use crate::errors::RecordError;
use std::collections::BTreeMap;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Resource Record Type that can be extracted from `nslookup` output.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    /// IPv4 Address.
    A,

    /// Authoritative name server.
    NS,

    /// Mail exchange.
    MX,

    /// Text strings.
    TXT,
}

/// The type of query to perform. Options are: all, any, a, mx, ns, txt.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum QueryType {
    ALL,
    ANY,
    A,
    MX,
    NS,
    TXT,
}

impl Default for QueryType {
    fn default() -> Self {
        QueryType::ANY
    }
}

impl QueryType {
    /// Parses the query type, ignoring case.
    ///
    /// ```
    /// use nslookup::QueryType;
    ///
    /// assert_eq!(QueryType::parse("mx").unwrap(), QueryType::MX);
    /// assert!(QueryType::parse("bogus").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<QueryType, LookupError> {
        QueryType::from_str(&s.trim().to_ascii_uppercase())
            .map_err(|_| LookupError::InvalidRecordType(s.to_string()))
    }

    /// The value handed to `nslookup -type=`.
    pub fn as_nslookup_type(self) -> &'static str {
        match self {
            // nslookup has no "all" type, ANY is the closest it gets.
            QueryType::ALL | QueryType::ANY => "ANY",
            QueryType::A => "A",
            QueryType::MX => "MX",
            QueryType::NS => "NS",
            QueryType::TXT => "TXT",
        }
    }
}

/// A single extracted record.
///
/// The `ttl` is already formatted for people, for example "1 day 1 hour".
/// The `ip` of a NS or MX record is empty when its host could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize), serde(untagged))]
#[allow(clippy::upper_case_acronyms)]
pub enum Record {
    A {
        ip: String,
        ttl: String,
    },
    NS {
        host: String,
        ip: String,
        ttl: String,
    },
    MX {
        host: String,
        priority: u16,
        ip: String,
        ttl: String,
    },
    TXT {
        text: String,
        ttl: String,
    },
}

impl Record {
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::A { .. } => RecordType::A,
            Record::NS { .. } => RecordType::NS,
            Record::MX { .. } => RecordType::MX,
            Record::TXT { .. } => RecordType::TXT,
        }
    }

    pub fn ttl(&self) -> &str {
        match self {
            Record::A { ttl, .. }
            | Record::NS { ttl, .. }
            | Record::MX { ttl, .. }
            | Record::TXT { ttl, .. } => ttl,
        }
    }

    /// The host whose address is still needed, for NS and MX records.
    pub fn host(&self) -> Option<&str> {
        match self {
            Record::NS { host, .. } | Record::MX { host, .. } => Some(host),
            Record::A { .. } | Record::TXT { .. } => None,
        }
    }

    pub(crate) fn with_ip(self, ip: String) -> Record {
        match self {
            Record::NS { host, ttl, .. } => Record::NS { host, ip, ttl },
            Record::MX {
                host,
                priority,
                ttl,
                ..
            } => Record::MX {
                host,
                priority,
                ip,
                ttl,
            },
            other => other,
        }
    }

    /// Returns the record's fields as (name, value) pairs, in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Record::A { ip, ttl } => vec![("ip", ip.clone()), ("ttl", ttl.clone())],
            Record::NS { host, ip, ttl } => vec![
                ("host", host.clone()),
                ("ip", ip.clone()),
                ("ttl", ttl.clone()),
            ],
            Record::MX {
                host,
                priority,
                ip,
                ttl,
            } => vec![
                ("host", host.clone()),
                ("priority", priority.to_string()),
                ("ip", ip.clone()),
                ("ttl", ttl.clone()),
            ],
            Record::TXT { text, ttl } => vec![("text", text.clone()), ("ttl", ttl.clone())],
        }
    }
}

/// The records found by a single lookup, grouped by type.
///
/// Records of each type are kept in the order they appeared in the output. A
/// type with no matches is simply absent. Records that could not be extracted
/// are reported through [`QueryResult::warnings`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    records: BTreeMap<RecordType, Vec<Record>>,
    warnings: Vec<RecordError>,
}

impl QueryResult {
    /// Returns the records of the given type, which may be empty.
    pub fn get(&self, r#type: RecordType) -> &[Record] {
        self.records.get(&r#type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over each record type that was found, and its records.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &[Record])> {
        self.records.iter().map(|(t, r)| (*t, r.as_slice()))
    }

    pub fn warnings(&self) -> &[RecordError] {
        &self.warnings
    }

    /// The total number of records across all types.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the result as record type name to an ordered list of field maps.
    pub fn to_field_maps(&self) -> BTreeMap<String, Vec<BTreeMap<String, String>>> {
        self.records
            .iter()
            .map(|(r#type, records)| {
                let maps = records
                    .iter()
                    .map(|record| {
                        record
                            .fields()
                            .into_iter()
                            .map(|(name, value)| (name.to_string(), value))
                            .collect()
                    })
                    .collect();
                (r#type.to_string(), maps)
            })
            .collect()
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records
            .entry(record.record_type())
            .or_default()
            .push(record)
    }

    pub(crate) fn push_warning(&mut self, warning: RecordError) {
        self.warnings.push(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_type_parse() {
        let tests = vec![
            ("all", QueryType::ALL),
            ("ANY", QueryType::ANY),
            ("a", QueryType::A),
            (" Mx ", QueryType::MX),
            ("ns", QueryType::NS),
            ("txt", QueryType::TXT),
        ];

        for (input, want) in tests {
            assert_eq!(QueryType::parse(input).unwrap(), want, "parsing {:?}", input);
        }

        for input in &["", "bogus", "AAAA", "soa"] {
            match QueryType::parse(input) {
                Err(LookupError::InvalidRecordType(got)) => assert_eq!(&got, input),
                other => panic!("parsing {:?} got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_query_type_default() {
        assert_eq!(QueryType::default(), QueryType::ANY);
        assert_eq!(QueryType::ALL.as_nslookup_type(), "ANY");
        assert_eq!(QueryType::TXT.as_nslookup_type(), "TXT");
    }

    #[test]
    fn test_with_ip() {
        let ns = Record::NS {
            host: "a.iana-servers.net".to_string(),
            ip: String::new(),
            ttl: "1 day".to_string(),
        };
        assert_eq!(ns.host(), Some("a.iana-servers.net"));
        assert_eq!(
            ns.with_ip("199.43.135.53".to_string()),
            Record::NS {
                host: "a.iana-servers.net".to_string(),
                ip: "199.43.135.53".to_string(),
                ttl: "1 day".to_string(),
            }
        );

        // Records without a host are left alone.
        let a = Record::A {
            ip: "93.184.216.34".to_string(),
            ttl: "1 hour".to_string(),
        };
        assert_eq!(a.host(), None);
        assert_eq!(a.clone().with_ip("10.0.0.1".to_string()), a);
    }

    #[test]
    fn test_field_maps() {
        let mut result = QueryResult::default();
        result.push(Record::MX {
            host: "mail.example.com".to_string(),
            priority: 10,
            ip: "192.0.2.25".to_string(),
            ttl: "1 hour".to_string(),
        });
        result.push(Record::A {
            ip: "192.0.2.1".to_string(),
            ttl: "5 minutes".to_string(),
        });
        result.push(Record::A {
            ip: "192.0.2.2".to_string(),
            ttl: "5 minutes".to_string(),
        });

        assert_eq!(result.len(), 3);
        assert_eq!(result.get(RecordType::A).len(), 2);
        assert!(result.get(RecordType::TXT).is_empty());

        let maps = result.to_field_maps();
        assert_eq!(maps.keys().collect::<Vec<_>>(), vec!["A", "MX"]);
        assert_eq!(maps["A"][1]["ip"], "192.0.2.2");
        assert_eq!(maps["MX"][0]["priority"], "10");
        assert_eq!(maps["MX"][0]["host"], "mail.example.com");
    }
}
