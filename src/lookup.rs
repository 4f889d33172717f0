use crate::clients::{AddressResolver, Gateway, HostResolver, NslookupGateway};
use crate::errors::LookupError;
use crate::extract::extract_records;
use crate::sanitize::sanitize;
use crate::types::{QueryResult, QueryType};
use crate::validate::validate_domain;
use std::sync::Arc;

/// How many name server or mail exchanger addresses are resolved at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Looks up the DNS records of a domain, using `nslookup` by default.
///
/// # Example
///
/// ```rust,no_run
/// use nslookup::{Lookup, RecordType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), nslookup::LookupError> {
///     let result = Lookup::new().lookup_str("example.com", "mx").await?;
///
///     for record in result.get(RecordType::MX) {
///         println!("{}", record);
///     }
///     Ok(())
/// }
/// ```
pub struct Lookup<G = NslookupGateway> {
    gateway: Arc<G>,
    resolver: Arc<dyn HostResolver>,
    concurrency: usize,
}

impl Default for Lookup {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookup {
    /// Creates a new Lookup that runs `nslookup` against Google's public DNS.
    pub fn new() -> Lookup<NslookupGateway> {
        Lookup::new_with_gateway(NslookupGateway::default())
    }
}

impl<G> Lookup<G>
where
    G: Gateway + 'static,
{
    /// Creates a new Lookup using the gateway for both the query itself and
    /// resolving the addresses of name servers and mail exchangers.
    pub fn new_with_gateway(gateway: G) -> Lookup<G> {
        let gateway = Arc::new(gateway);
        let resolver = Arc::new(AddressResolver::new(Arc::clone(&gateway)));
        Lookup {
            gateway,
            resolver,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Resolves name server and mail exchanger addresses with this resolver instead.
    pub fn with_resolver<R: HostResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Looks up all (ANY) records for the domain.
    pub async fn lookup(&self, domain: &str) -> Result<QueryResult, LookupError> {
        self.lookup_type(domain, QueryType::default()).await
    }

    /// Looks up the records of the named type, one of: all, any, a, mx, ns, txt.
    ///
    /// An unrecognised type fails before anything is queried.
    pub async fn lookup_str(&self, domain: &str, r#type: &str) -> Result<QueryResult, LookupError> {
        let r#type = QueryType::parse(r#type)?;
        self.lookup_type(domain, r#type).await
    }

    pub async fn lookup_type(
        &self,
        domain: &str,
        r#type: QueryType,
    ) -> Result<QueryResult, LookupError> {
        let anchor = validate_domain(domain)?;

        debug!("looking up {} records for {}", r#type, anchor);
        let lines = self
            .gateway
            .resolve(&anchor, r#type.as_nslookup_type())
            .await?;
        let lines = sanitize(&lines);

        let result =
            extract_records(&lines, &anchor, self.resolver.as_ref(), self.concurrency).await;

        for warning in result.warnings() {
            warn!("{}: {}", anchor, warning);
        }
        debug!("found {} records for {}", result.len(), anchor);

        Ok(result)
    }
}
