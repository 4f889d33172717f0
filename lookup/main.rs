// Simple nslookup style command line.
// lookup [+json] [+timeout=SECS] [@server] {domain} {type}
use nslookup::clients::NslookupGateway;
use nslookup::Lookup;
use nslookup::QueryType;
use std::env;
use std::process;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// A simple type alias so as to DRY.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, PartialEq)]
struct Args {
    json: bool,
    timeout: Option<Duration>,

    /// Query this server, or the system default if empty.
    server: Option<String>,

    /// Query this type
    r#type: QueryType,

    /// Across all these domains
    domains: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
    let mut result = Args {
        json: false,
        timeout: None,
        server: None,

        r#type: QueryType::default(),
        domains: Vec::new(),
    };

    let mut type_or_domain = Vec::<String>::new();

    for arg in args {
        if arg == "+json" {
            result.json = true;
        } else if let Some(secs) = arg.strip_prefix("+timeout=") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| format!("Invalid timeout {:?}: {}", secs, e))?;
            result.timeout = Some(Duration::from_secs(secs));
        } else if arg.starts_with('+') {
            return Err(format!("Unknown flag: {}", arg).into());
        } else if let Some(server) = arg.strip_prefix('@') {
            result.server = Some(server.to_string());
        } else {
            type_or_domain.push(arg);
        }
    }

    let mut found_type = false;

    // To be useful, we allow users to say `lookup MX bramp.net` or `lookup bramp.net MX`
    for arg in type_or_domain {
        if !found_type {
            // Use the first type we found and assume the rest are domains.
            if let Ok(r#type) = QueryType::parse(&arg) {
                result.r#type = r#type;
                found_type = true;
                continue;
            }
        }

        result.domains.push(arg)
    }

    if result.domains.is_empty() {
        return Err("No domain given".into());
    }

    Ok(result)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: lookup [+json] [+timeout=SECS] [@server] {{domain}} {{type}}");
            process::exit(1);
        }
    };

    // Stop any running nslookup on Ctrl-C.
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let mut gateway = NslookupGateway::new().with_cancellation(shutdown);
    if args.server.is_some() {
        gateway = gateway.with_server(args.server.clone());
    }
    if let Some(timeout) = args.timeout {
        gateway = gateway.with_timeout(timeout);
    }

    let lookup = Lookup::new_with_gateway(gateway);
    let mut failed = false;

    for domain in &args.domains {
        let result = match lookup.lookup_type(domain, args.r#type).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{}: {}", domain, e);
                failed = true;
                continue;
            }
        };

        if args.json {
            println!("{}", result.to_json()?);
        } else {
            println!("; {} {}", domain, args.r#type);
            println!("{}", result);
        }
    }

    if failed {
        process::exit(1);
    }

    Ok(())
}
