use super::commands::{ConfigCommands, IconCommands, ServeCommands};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "custom-svg-icons")]
#[command(about = "Serve custom SVG icons stored in a headless CMS folder tree")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Host platform URL, overriding config and environment
    #[arg(long, global = true)]
    pub host: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP icon service
    Serve(ServeCommands),
    /// List icon groups once and print them
    List(IconCommands),
    /// Resolve icons by their stored value and print them as JSON
    Lookup {
        /// Values to resolve; comma separated lists are accepted too
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Resolve one icon and print it wrapped in inline styling
    Render {
        /// Stored icon value
        value: String,
        #[arg(long)]
        background_color: Option<String>,
        #[arg(long)]
        border_color: Option<String>,
        /// CSS padding, e.g. 4px
        #[arg(long)]
        padding: Option<String>,
    },
    /// Print the kebab-case identifier derived from a title
    Kebab {
        text: String,
    },
    /// Configuration management
    Config(ConfigCommands),
}
