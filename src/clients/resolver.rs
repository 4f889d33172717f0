use crate::clients::{Gateway, HostResolver};
use crate::sanitize::sanitize;
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;

/// Resolves host names by asking the gateway for their A records.
///
/// Used to find the address of each name server and mail exchanger.
pub struct AddressResolver<G> {
    gateway: Arc<G>,
}

impl<G> AddressResolver<G>
where
    G: Gateway,
{
    pub fn new(gateway: Arc<G>) -> AddressResolver<G> {
        AddressResolver { gateway }
    }
}

#[async_trait]
impl<G> HostResolver for AddressResolver<G>
where
    G: Gateway + 'static,
{
    async fn resolve_host(&self, host: &str) -> String {
        let lines = match self.gateway.resolve(host, "A").await {
            Ok(lines) => lines,
            Err(e) => {
                warn!("unable to resolve {}: {}", host, e);
                return String::new();
            }
        };

        let ip = parse_address(&sanitize(&lines), host);
        if ip.is_empty() {
            debug!("no address found for {}", host);
        }
        ip
    }
}

/// Returns the address of `host` from the sanitized output of an A query, or
/// an empty string if there isn't one.
///
/// Lines describing the queried server come first, and on Windows may follow
/// a reverse lookup of the server itself. So the address is only taken from
/// the answer, which starts at "Non-authoritative answer:" or at the "Name:"
/// line for `host`.
///
/// ```
/// use nslookup::clients::parse_address;
///
/// let lines = vec![
///     "Server:  8.8.8.8",
///     "Address:  8.8.8.8#53",
///     "Non-authoritative answer:",
///     "Name:    a.iana-servers.net",
///     "Address:  199.43.135.53",
/// ];
/// assert_eq!(parse_address(&lines, "a.iana-servers.net"), "199.43.135.53");
/// ```
pub fn parse_address<S: AsRef<str>>(lines: &[S], host: &str) -> String {
    lazy_static! {
        // "Address: 199.43.135.53" or "Addresses:  2001:500:8f::53"
        static ref ADDRESS: Regex = Regex::new(r"^\s*Address(?:es)?:\s*(\S+)").unwrap();

        // "Name:    a.iana-servers.net"
        static ref NAME: Regex = Regex::new(r"^\s*Name:\s*(\S+)").unwrap();
    }

    let host = host.trim_end_matches('.');
    let is_answer = |line: &str| {
        line.trim().eq_ignore_ascii_case("Non-authoritative answer:")
            || NAME.captures(line).map_or(false, |caps| {
                caps[1].trim_end_matches('.').eq_ignore_ascii_case(host)
            })
    };

    lines
        .iter()
        .map(|line| line.as_ref())
        .skip_while(|line| !is_answer(*line))
        .find_map(|line| ADDRESS.captures(line).map(|caps| caps[1].to_string()))
        .unwrap_or_default()
}
