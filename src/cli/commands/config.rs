use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::Path;

use custom_svg_icons::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_config_command(config: &Config, path: &Path, args: ConfigCommands) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => {
            let mut shown = config.clone();
            if shown.host.token.is_some() {
                shown.host.token = Some("********".to_string());
            }
            print!("{}", toml::to_string_pretty(&shown)?);
        }
        ConfigSubcommands::Path => {
            println!("{}", path.display());
        }
        ConfigSubcommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            config.save_to(path)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
    }
    Ok(())
}
