//! Static site server using Axum

use axum::{Json, Router, extract::State, response::Html, routing::get};
use folio_core::SiteConfig;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::warn;

/// Shared, read-only server state
#[derive(Clone)]
pub struct SiteState {
    pub config: Arc<SiteConfig>,
    pub dist: PathBuf,
}

impl SiteState {
    pub fn new(config: SiteConfig, dist: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(config),
            dist: dist.into(),
        }
    }

    /// Whether `trunk build` output is present
    pub fn is_built(&self) -> bool {
        is_built(&self.dist)
    }
}

fn is_built(dist: &Path) -> bool {
    dist.join("index.html").is_file()
}

/// Create the web router
///
/// Serves the built site from `dist` with an `index.html` fallback for
/// unknown paths. Without a build, every page request gets setup
/// instructions instead.
pub fn create_router(state: SiteState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/config", get(config_handler));

    let router = if state.is_built() {
        let index = state.dist.join("index.html");
        router.fallback_service(ServeDir::new(&state.dist).fallback(ServeFile::new(index)))
    } else {
        warn!(dist = %state.dist.display(), "site not built, serving setup page");
        router.fallback(placeholder_handler)
    };

    router.layer(cors).with_state(state)
}

async fn health_handler(State(state): State<SiteState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "site_built": state.is_built(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn config_handler(State(state): State<SiteState>) -> Json<SiteConfig> {
    Json(SiteConfig::clone(&state.config))
}

async fn placeholder_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>folio - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 2rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #333;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>folio - Build Required</h1>
        <p>The Leptos WASM site needs to be compiled before it can be served.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build site: <code>cd crates/folio-web &amp;&amp; trunk build --release</code></li>
                <li>Restart server: <code>cargo run -- serve</code></li>
            </ol>
        </div>

        <p>API endpoints: <code>/api/health</code>, <code>/api/config</code></p>
    </div>
</body>
</html>"#,
    )
}
