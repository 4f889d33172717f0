use crate::errors::GatewayError;

pub use self::nslookup::NslookupGateway;
pub use self::resolver::{parse_address, AddressResolver};

mod nslookup;
mod resolver;

use async_trait::async_trait;

/// Gateway runs the external resolution utility and returns its raw output,
/// one entry per line.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn resolve(&self, target: &str, record_type: &str)
        -> Result<Vec<String>, GatewayError>;
}

/// HostResolver turns a host name into a single IP address.
///
/// Implementations never fail, an empty string is returned when the host
/// could not be resolved.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve_host(&self, host: &str) -> String;
}
