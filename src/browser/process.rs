//! WebDriver process supervision
//!
//! Resolves the configured driver binary, spawns it on a local port, and
//! waits for it to answer status checks before any session is opened. The
//! child is killed on drop so the driver never outlives the run.

use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::time::{sleep, Instant};

use crate::common::config::DriverConfig;
use crate::common::{Error, Result};

/// Poll interval while waiting for the driver to come up
const STATUS_POLL_MS: u64 = 100;

/// A running WebDriver process bound to a local port
pub struct DriverProcess {
    child: Child,
    port: u16,
}

impl DriverProcess {
    /// Resolve, spawn, and health-check the configured driver
    pub async fn start(config: &DriverConfig) -> Result<Self> {
        let binary = resolve_binary(&config.binary)?;
        let port = match config.port {
            Some(port) => port,
            None => free_port()?,
        };

        tracing::debug!(binary = %binary.display(), port, "starting webdriver process");

        let mut cmd = Command::new(&binary);
        cmd.arg(format!("--port={port}"))
            .args(&config.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| {
            Error::DriverStartFailed(format!("failed to start {}: {}", binary.display(), e))
        })?;

        let process = Self { child, port };
        process.wait_until_ready(config.startup_timeout_secs).await?;
        Ok(process)
    }

    /// Port the driver listens on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL for WebDriver sessions against this process
    pub fn endpoint(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    async fn wait_until_ready(&self, timeout_secs: u64) -> Result<()> {
        let status_url = format!("{}/status", self.endpoint());
        let client = reqwest::Client::new();
        let deadline = Instant::now() + Duration::from_secs(timeout_secs);

        loop {
            if let Ok(resp) = client.get(&status_url).send().await {
                if resp.status().is_success() {
                    tracing::debug!(port = self.port, "webdriver ready");
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(Error::DriverStartupTimeout(timeout_secs));
            }
            sleep(Duration::from_millis(STATUS_POLL_MS)).await;
        }
    }

    /// Stop the driver process
    pub async fn stop(mut self) {
        let _ = self.child.kill().await;
    }
}

impl Drop for DriverProcess {
    fn drop(&mut self) {
        // Best-effort since we can't await in drop
        let _ = self.child.start_kill();
    }
}

/// Resolve the driver binary: an existing path is used as given, otherwise
/// PATH is searched.
pub fn resolve_binary(name: &str) -> Result<PathBuf> {
    let direct = Path::new(name);
    if direct.exists() {
        return Ok(direct.to_path_buf());
    }
    which::which(name).map_err(|_| Error::driver_not_found(name, &[name, "PATH"]))
}

/// Ask the OS for a free port by binding port zero and reading back the
/// assignment
fn free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_reports_missing_binary() {
        let err = resolve_binary("definitely-not-a-webdriver-binary").unwrap_err();
        assert!(matches!(err, Error::DriverNotFound { .. }));
    }

    #[test]
    fn free_port_is_nonzero() {
        assert_ne!(free_port().unwrap(), 0);
    }
}
