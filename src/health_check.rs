//! `affect --health-check`: container liveness check against a local server.

use std::env;
use std::time::Duration;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(1);
const DEFAULT_HEALTH_CHECK_PORT: u16 = 8000;

/// Port to check: `AFFECT_PORT` when it parses, else `8000`.
pub fn health_check_port() -> u16 {
    env::var("AFFECT_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_HEALTH_CHECK_PORT)
}

/// GETs `/healthz` on `127.0.0.1:port` and returns the process exit code:
/// `0` on a 2xx answer, `1` otherwise.
///
/// Runs on the caller's runtime.
pub async fn run_health_check(port: u16) -> i32 {
    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(HEALTH_CHECK_TIMEOUT)
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        Ok(res) => {
            tracing::debug!(status = %res.status(), "Health check got non-success status");
            1
        }
        Err(e) => {
            tracing::debug!(error = %e, "Health check request failed");
            1
        }
    }
}
