//! API server reachability probe

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::remote as remote_config;
use crate::error::{KubeContextError, Result};

/// Check that the API server at `server` answers.
///
/// The request is anonymous, so a healthy API server refuses it with
/// 401/403; a 2xx from a server with anonymous access also counts.
/// Certificates are not verified: cluster CAs are usually private.
pub async fn ensure_reachable(server: &str) -> Result<()> {
    let unreachable = |reason: String| KubeContextError::RemoteUnreachable {
        server: server.to_string(),
        reason,
    };

    let client = Client::builder()
        .danger_accept_invalid_certs(true)
        .connect_timeout(Duration::from_secs(remote_config::PROBE_TIMEOUT_SECS))
        .timeout(Duration::from_secs(remote_config::PROBE_TIMEOUT_SECS))
        .build()
        .map_err(|e| unreachable(e.to_string()))?;

    debug!("Probing API endpoint {}", server);
    let response = client
        .get(server)
        .send()
        .await
        .map_err(|e| unreachable(e.to_string()))?;

    let status = response.status();
    debug!("API endpoint {} answered {}", server, status);
    if status.is_success() || remote_config::PROBE_ACCEPTED_STATUSES.contains(&status.as_u16()) {
        Ok(())
    } else {
        Err(unreachable(format!(
            "unexpected HTTP status {} (expected 401 or 403)",
            status
        )))
    }
}

/// Whether the API server at `server` answers
pub async fn probe(server: &str) -> bool {
    ensure_reachable(server).await.is_ok()
}
