use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

mod cli;

use cli::commands::{
    handle_config_command, handle_kebab_command, handle_list_command, handle_lookup_command, handle_render_command,
    handle_serve_command,
};
use cli::{Cli, Commands};
use custom_svg_icons::config::Config;
use custom_svg_icons::icons::DisplayOptions;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists, before RUST_LOG is read
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    config.apply_process_env();
    if let Some(host) = cli.host {
        config.host.url = host;
    }
    debug!("Effective host url: {}", config.host.url);

    info!("Starting custom-svg-icons");

    match cli.command {
        Commands::Serve(args) => handle_serve_command(config, args).await,
        Commands::List(args) => handle_list_command(&config, args).await,
        Commands::Lookup { values } => handle_lookup_command(&config, values).await,
        Commands::Render {
            value,
            background_color,
            border_color,
            padding,
        } => {
            let options = DisplayOptions {
                background_color,
                border_color,
                padding,
            };
            handle_render_command(&config, value, options).await
        }
        Commands::Kebab { text } => {
            handle_kebab_command(&text);
            Ok(())
        }
        Commands::Config(args) => handle_config_command(&config, &config_path, args),
    }
}

fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        // Truncate on each run
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
