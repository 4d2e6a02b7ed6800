//! Import Command
//!
//! Pulls one random sample todo from a public JSON endpoint.

use crate::error::{AppError, AppResult};
use crate::models::RemoteTodo;

/// GET `url` and decode a `RemoteTodo`
pub async fn fetch_random_todo(url: &str) -> AppResult<RemoteTodo> {
    log::debug!("[IMPORT] GET {}", url);
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Network(format!("{} returned {}", url, status)));
    }
    let remote = response.json::<RemoteTodo>().await?;
    log::debug!("[IMPORT] Received sample #{}: {:?}", remote.id, remote.text);
    Ok(remote)
}
