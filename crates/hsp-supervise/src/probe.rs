//! HTTP health probing.
//!
//! The platform's `/health` endpoint answers `{"status": "healthy",
//! "database": "connected"}` on success; any 2xx counts as healthy, and
//! the body `status` is carried into the report when present.

use std::time::Duration;

use hsp_config::HealthConfig;
use hsp_core::responses::ProbeReport;

/// Probe `url` once with the given request timeout.
pub async fn probe_once(url: &str, timeout: Duration) -> ProbeReport {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(error) => return failed_report(url, 1, format!("client build failed: {error}")),
    };
    attempt(&client, url, 1).await
}

/// Poll `url` until it answers healthy or the configured deadline passes.
///
/// One attempt is always made; afterwards the loop sleeps
/// `poll_interval_secs` between attempts until `max_wait_secs` elapses.
pub async fn probe(url: &str, health: &HealthConfig) -> ProbeReport {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(health.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(error) => return failed_report(url, 0, format!("client build failed: {error}")),
    };

    let deadline = tokio::time::Instant::now() + Duration::from_secs(health.max_wait_secs);
    let interval = Duration::from_secs(health.poll_interval_secs.max(1));
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        let report = attempt(&client, url, attempts).await;
        if report.healthy {
            return report;
        }

        if tokio::time::Instant::now() + interval > deadline {
            tracing::warn!(url, attempts, "health probe deadline passed");
            return report;
        }
        tokio::time::sleep(interval).await;
    }
}

async fn attempt(client: &reqwest::Client, url: &str, attempts: u32) -> ProbeReport {
    let started = std::time::Instant::now();
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            let body_status = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("status")
                        .and_then(|v| v.as_str())
                        .map(ToString::to_string)
                });

            ProbeReport {
                url: url.to_string(),
                healthy: status.is_success(),
                status: Some(status.as_u16()),
                body_status,
                latency_ms: Some(latency_ms),
                attempts,
                error: None,
            }
        }
        Err(error) => failed_report(url, attempts, error.to_string()),
    }
}

fn failed_report(url: &str, attempts: u32, error: String) -> ProbeReport {
    ProbeReport {
        url: url.to_string(),
        healthy: false,
        status: None,
        body_status: None,
        latency_ms: None,
        attempts,
        error: Some(error),
    }
}
