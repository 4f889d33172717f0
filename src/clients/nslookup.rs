use crate::clients::Gateway;
use crate::errors::GatewayError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_PROGRAM: &str = "nslookup";

pub const GOOGLE_IPV4_PRIMARY: &str = "8.8.8.8";

/// Runs `nslookup` in debug mode.
///
/// # Example
///
/// ```rust,no_run
/// use nslookup::clients::{Gateway, NslookupGateway};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), nslookup::GatewayError> {
///     let lines = NslookupGateway::new()
///         .with_timeout(Duration::from_secs(5))
///         .resolve("example.com", "A")
///         .await?;
///
///     for line in lines {
///         println!("{}", line);
///     }
///     Ok(())
/// }
/// ```
///
/// The command is run directly, not through a shell, so the target never
/// needs escaping. A run is killed once it exceeds the timeout, or when the
/// cancellation token is cancelled.
#[derive(Debug)]
pub struct NslookupGateway {
    program: String,

    /// The name server to query, or the system default when `None`.
    server: Option<String>,

    timeout: Duration,
    shutdown: CancellationToken,
}

impl Default for NslookupGateway {
    fn default() -> Self {
        NslookupGateway {
            program: DEFAULT_PROGRAM.to_string(),
            server: Some(GOOGLE_IPV4_PRIMARY.to_string()),
            timeout: Duration::new(10, 0),
            shutdown: CancellationToken::new(),
        }
    }
}

impl NslookupGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs this program instead of `nslookup` found on the `PATH`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_server(mut self, server: Option<String>) -> Self {
        self.server = server;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Returns the token that cancels every in-flight run.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    fn command(&self, target: &str, record_type: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-debug")
            .arg(format!("-type={}", record_type))
            .arg(target);

        if let Some(server) = &self.server {
            command.arg(server);
        }

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl Gateway for NslookupGateway {
    async fn resolve(
        &self,
        target: &str,
        record_type: &str,
    ) -> Result<Vec<String>, GatewayError> {
        let mut command = self.command(target, record_type);
        debug!("running {:?}", command);

        let output = tokio::select! {
            biased;

            _ = self.shutdown.cancelled() => return Err(GatewayError::Cancelled),
            result = tokio::time::timeout(self.timeout, command.output()) => match result {
                Err(_) => return Err(GatewayError::Timeout(self.timeout)),
                Ok(Err(source)) => {
                    return Err(GatewayError::Spawn {
                        program: self.program.clone(),
                        source,
                    })
                }
                Ok(Ok(output)) => output,
            },
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            if stdout.trim().is_empty() {
                return Err(GatewayError::Exit {
                    program: self.program.clone(),
                    status: output.status,
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }

            // nslookup exits non-zero when the name does not exist, but the
            // debug output is still worth parsing.
            warn!(
                "{} -type={} {} exited with {}",
                self.program, record_type, target, output.status
            );
        }

        Ok(stdout.lines().map(str::to_string).collect())
    }
}
