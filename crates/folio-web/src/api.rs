//! API client for the optional site server

use folio_core::SiteConfig;
use gloo_net::http::Request;

/// Fetch the effective site config from `folio serve`.
///
/// Fails when the page is served by something else (e.g. `trunk serve`);
/// callers keep the compiled-in defaults in that case.
pub async fn fetch_config() -> Result<SiteConfig, String> {
    let response = Request::get("/api/config")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let config = response
        .json::<SiteConfig>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
