//! HTTP surface of the icon registry
//!
//! Routes, relative to the mount point:
//! - `GET /` lists icon groups
//! - `GET /by-value?values=...` resolves icons by stored value
//!
//! `GET /health` is served at the top level regardless of the mount point.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod params;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use log::info;
use std::sync::Arc;

use crate::icons::IconRegistry;
pub use error::ApiError;
pub use logging::RequestLogger;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<IconRegistry>,
    /// Token used when the incoming request carries none
    pub default_token: Option<String>,
    pub logger: RequestLogger,
}

impl AppState {
    pub fn new(registry: IconRegistry, default_token: Option<String>, logger: RequestLogger) -> Self {
        Self {
            registry: Arc::new(registry),
            default_token,
            logger,
        }
    }
}

/// Build the router with icon routes under `mount`.
///
/// Each route answers with and without a trailing slash, so both
/// `/custom-svg-icons` and `/custom-svg-icons/` list the icon groups.
pub fn router(state: AppState, mount: &str) -> Router {
    let mount = normalize_mount(mount);
    let lookup = format!("{}/by-value", mount);

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route(&format!("{}/", mount), get(handlers::list_icon_groups))
        .route(&lookup, get(handlers::icons_by_value))
        .route(&format!("{}/", lookup), get(handlers::icons_by_value));

    if !mount.is_empty() {
        app = app.route(&mount, get(handlers::list_icon_groups));
    }

    app.with_state(state)
}

/// `"custom-svg-icons/"` becomes `"/custom-svg-icons"`, `"/"` becomes `""`
pub fn normalize_mount(mount: &str) -> String {
    let trimmed = mount.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Bind and serve until Ctrl-C
pub async fn serve(state: AppState, bind: &str, mount: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    info!(
        "Icon registry listening on http://{}{}",
        listener.local_addr().context("Failed to read bound address")?,
        normalize_mount(mount)
    );

    axum::serve(listener, router(state, mount))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down icon registry");
        })
        .await
        .context("HTTP server terminated unexpectedly")
}
