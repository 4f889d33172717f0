use crate::types::RecordType;
use std::io;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors that end a lookup before any records are returned.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid domain format: {0:?}")]
    InvalidDomainFormat(String),

    #[error("invalid record type: {0:?} (expected one of ALL, ANY, A, MX, NS, TXT)")]
    InvalidRecordType(String),

    #[error("resolution failed: {0}")]
    ResolutionFailure(#[from] GatewayError),
}

/// Reasons the external resolution utility could not produce any output.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("cancelled")]
    Cancelled,
}

/// A single record that could not be extracted. These never abort a lookup,
/// they are collected as warnings on the [`QueryResult`](crate::QueryResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed {record_type} record line: {line:?}")]
    MalformedRecordLine {
        record_type: RecordType,
        line: String,
    },

    #[error("unable to parse ttl from line: {line:?}")]
    TtlParseFailure { line: String },
}
