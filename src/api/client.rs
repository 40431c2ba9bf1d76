use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use super::error::ApiError;
use crate::models::UserRecord;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Fetch the full user list from `url`.
/// One GET, no retries and no timeout beyond what the client was built with.
pub async fn fetch_users(client: &reqwest::Client, url: &str) -> Result<Vec<UserRecord>, ApiError> {
    // --- Curl Logging ---
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!("{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
    ));
    log_output(format!("Request:\n{}", parts.join(" ")));
    // --------------------

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        log_output(format!("Response:\n{}", Paint::new(format!("HTTP {}: {}", status, body)).fg(yansi::Color::Red)));
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let users: Vec<UserRecord> = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;

    // Grayed out so it does not drown the request line
    let summary = format!("HTTP {} ({} users, {} bytes)", status, users.len(), text.len());
    log_output(format!("Response:\n{}", Paint::new(summary).rgb(100, 100, 100)));

    Ok(users)
}
