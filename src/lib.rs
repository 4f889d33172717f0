//! Queries DNS information by running `nslookup -debug` and turning its
//! output into typed records.
//!
//! ```rust,no_run
//! use nslookup::Lookup;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nslookup::LookupError> {
//!     let result = Lookup::new().lookup("example.com").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

#[macro_use]
mod cfg;

mod classify;
pub mod clients;
mod display;
mod errors;
mod extract;
mod lookup;
mod sanitize;
pub mod ttl;
pub mod types;
mod validate;

cfg_feature! {
    #![feature = "json"]

    mod json;
}

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub use crate::types::*;

// Pull up the various types that should be on the front page of the docs.
#[doc(inline)]
pub use crate::lookup::Lookup;
#[doc(inline)]
pub use crate::types::QueryResult;
#[doc(inline)]
pub use crate::types::Record;

#[doc(inline)]
pub use crate::errors::{GatewayError, LookupError, RecordError};

pub use crate::classify::{windows, Window, Windows};
pub use crate::extract::{extract_records, parse, resolve_hosts};
pub use crate::lookup::DEFAULT_CONCURRENCY;
pub use crate::sanitize::sanitize;
pub use crate::ttl::Ttl;
pub use crate::validate::validate_domain;
