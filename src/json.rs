//! JSON output for query results.

use crate::types::{QueryResult, Record, RecordType};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct QueryResultJson<'a> {
    records: BTreeMap<RecordType, &'a [Record]>,
    warnings: Vec<String>,
}

impl QueryResult {
    /// Returns the result as a JSON object, of the form:
    ///
    /// ```json
    /// {
    ///   "records": {"A": [{"ip": "93.184.216.34", "ttl": "1 hour"}]},
    ///   "warnings": []
    /// }
    /// ```
    pub fn to_json(&self) -> serde_json::Result<String> {
        let json = QueryResultJson {
            records: self.iter().collect(),
            warnings: self.warnings().iter().map(ToString::to_string).collect(),
        };
        serde_json::to_string_pretty(&json)
    }
}
