use crate::core::config::ApiConfig;

use super::endpoint::{resolve_url, ViewKind};
use super::error::LoadError;
use super::models::AnalysisPayload;

#[cfg(debug_assertions)]
fn log_fetch(stage: &str, kind: ViewKind, detail: &str) {
    // Lightweight request trace, mirrors the [i18n] render traces.
    println!("[fetch] {stage} view={} {detail}", kind.tag());
}

/// Fetch one view's dataset: a single GET, no timeout, no retry.
///
/// The three failure modes (transport, status, decode) all come back as
/// [`LoadError`]; callers decide what to do with the previous state.
pub async fn fetch_view(
    config: &ApiConfig,
    analysis_id: i64,
    kind: ViewKind,
) -> Result<AnalysisPayload, LoadError> {
    let url = resolve_url(config, analysis_id, kind);

    #[cfg(debug_assertions)]
    log_fetch("start", kind, &format!("id={analysis_id} url={url}"));

    let response = reqwest::get(&url)
        .await
        .map_err(|err| LoadError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        #[cfg(debug_assertions)]
        log_fetch("failed", kind, &format!("status={}", status.as_u16()));
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|err| LoadError::Network(err.to_string()))?;

    let payload = AnalysisPayload::decode(kind, &body)?;

    #[cfg(debug_assertions)]
    log_fetch("done", kind, &format!("id={analysis_id}"));

    Ok(payload)
}
