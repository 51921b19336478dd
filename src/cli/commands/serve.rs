use anyhow::Result;
use clap::Args;
use log::info;

use custom_svg_icons::api::DirectusClient;
use custom_svg_icons::config::Config;
use custom_svg_icons::server::{self, AppState, RequestLogger};

#[derive(Args)]
pub struct ServeCommands {
    /// Address to listen on, e.g. 0.0.0.0:8056
    #[arg(short, long)]
    pub bind: Option<String>,
    /// Path prefix for the icon routes
    #[arg(short, long)]
    pub mount: Option<String>,
}

pub async fn handle_serve_command(config: Config, args: ServeCommands) -> Result<()> {
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let mount = args.mount.unwrap_or_else(|| config.server.mount.clone());

    info!(
        "Serving icons from folder '{}' on {}",
        config.icons.root_folder, config.host.url
    );

    let registry = DirectusClient::new(config.host.url.clone())?.into_registry(config.registry_settings());
    let state = AppState::new(
        registry,
        config.host.token.clone(),
        RequestLogger::new(config.server.request_logging),
    );

    server::serve(state, &bind, &mount).await
}
