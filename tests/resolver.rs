use async_trait::async_trait;
use nslookup::clients::{Gateway, HostResolver};
use nslookup::GatewayError;
use nslookup::Lookup;
use nslookup::LookupError;
use nslookup::Record;
use nslookup::RecordType;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const OUTPUT: &str = "------------
    ANSWERS:
    ->  example.com
        nameserver = ns1.example.com
        ttl = 3600 (1 hour)
    ->  example.com
        MX preference = 10, mail exchanger = mx.example.com
        ttl = 300 (5 mins)
    ->  example.com
        nameserver = ns2.example.com
        ttl = 3600 (1 hour)
";

/// Answers the query for example.com, but fails every other lookup.
struct MockClient {
    calls: Arc<AtomicUsize>,
    fail_query: bool,
}

impl MockClient {
    fn new(calls: &Arc<AtomicUsize>) -> Self {
        MockClient {
            calls: Arc::clone(calls),
            fail_query: false,
        }
    }
}

#[async_trait]
impl Gateway for MockClient {
    async fn resolve(&self, target: &str, _type: &str) -> Result<Vec<String>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if target == "example.com" && !self.fail_query {
            return Ok(OUTPUT.lines().map(str::to_string).collect());
        }
        Err(GatewayError::Timeout(Duration::from_secs(10)))
    }
}

/// Resolves every host to the same address.
struct FixedResolver(&'static str);

#[async_trait]
impl HostResolver for FixedResolver {
    async fn resolve_host(&self, _host: &str) -> String {
        self.0.to_string()
    }
}

#[tokio::test]
async fn test_unresolvable_hosts() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = Lookup::new_with_gateway(MockClient::new(&calls));

    let result = lookup
        .lookup_str("example.com", "any")
        .await
        .expect("host failures must not fail the lookup");

    assert_eq!(
        result.get(RecordType::NS),
        &[
            Record::NS {
                host: "ns1.example.com".to_string(),
                ip: "".to_string(),
                ttl: "1 hour".to_string(),
            },
            Record::NS {
                host: "ns2.example.com".to_string(),
                ip: "".to_string(),
                ttl: "1 hour".to_string(),
            },
        ]
    );
    assert_eq!(
        result.get(RecordType::MX),
        &[Record::MX {
            host: "mx.example.com".to_string(),
            priority: 10,
            ip: "".to_string(),
            ttl: "5 minutes".to_string(),
        }]
    );
    assert!(result.warnings().is_empty());

    // The query, and one per host.
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_with_resolver() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = Lookup::new_with_gateway(MockClient::new(&calls))
        .with_resolver(FixedResolver("192.0.2.53"))
        .with_concurrency(1);

    let result = lookup.lookup("example.com").await.unwrap();
    assert_eq!(
        result.get(RecordType::NS),
        &[
            Record::NS {
                host: "ns1.example.com".to_string(),
                ip: "192.0.2.53".to_string(),
                ttl: "1 hour".to_string(),
            },
            Record::NS {
                host: "ns2.example.com".to_string(),
                ip: "192.0.2.53".to_string(),
                ttl: "1 hour".to_string(),
            },
        ]
    );

    // Only the query went through the gateway.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_query_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = Lookup::new_with_gateway(MockClient {
        calls: Arc::clone(&calls),
        fail_query: true,
    });

    match lookup.lookup("example.com").await {
        Err(LookupError::ResolutionFailure(GatewayError::Timeout(timeout))) => {
            assert_eq!(timeout, Duration::from_secs(10))
        }
        other => panic!("expected a resolution failure, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_input_skips_gateway() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = Lookup::new_with_gateway(MockClient::new(&calls));

    match lookup.lookup_str("example.com", "bogus").await {
        Err(LookupError::InvalidRecordType(t)) => assert_eq!(t, "bogus"),
        other => panic!("expected an invalid record type, got {:?}", other),
    }

    match lookup.lookup_str("example.com; ls", "a").await {
        Err(LookupError::InvalidDomainFormat(d)) => assert_eq!(d, "example.com; ls"),
        other => panic!("expected an invalid domain, got {:?}", other),
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
