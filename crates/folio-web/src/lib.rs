//! folio-web - Portfolio site for folio using Leptos, plus an Axum server

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod scroll;
pub mod sections;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;

#[cfg(feature = "ssr")]
pub use router::{create_router, SiteState};

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(state: SiteState, port: u16) -> anyhow::Result<()> {
    use anyhow::Context;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    let router = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
