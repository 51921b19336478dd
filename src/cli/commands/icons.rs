//! One-shot icon commands running the registry outside the HTTP server

use anyhow::Result;
use clap::Args;
use colored::*;
use log::info;

use custom_svg_icons::api::DirectusClient;
use custom_svg_icons::config::Config;
use custom_svg_icons::icons::{
    Accountability, DisplayOptions, IconListing, IconRegistry, IconsByValue, filter_groups, render_icon, to_kebab_case,
};

#[derive(Args)]
pub struct IconCommands {
    /// Only show icons matching this term
    #[arg(short, long)]
    pub search: Option<String>,
    /// Print the raw JSON body instead of a summary
    #[arg(long)]
    pub json: bool,
}

fn registry_and_context(config: &Config) -> Result<(IconRegistry, Accountability)> {
    let registry = DirectusClient::new(config.host.url.clone())?.into_registry(config.registry_settings());
    Ok((registry, Accountability::system(config.host.token.clone())))
}

pub async fn handle_list_command(config: &Config, args: IconCommands) -> Result<()> {
    let (registry, ctx) = registry_and_context(config)?;
    let mut listing = registry.list_icon_groups(&ctx).await?;

    if let Some(term) = args.search.as_deref() {
        listing.icon_groups = filter_groups(&listing.icon_groups, term);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    print_listing(&listing);
    Ok(())
}

fn print_listing(listing: &IconListing) {
    if let Some(error) = &listing.error {
        println!("{} {}", "!".yellow().bold(), error.yellow());
        return;
    }

    for group in &listing.icon_groups {
        println!("{} ({})", group.name.bold().cyan(), group.icons.len());
        for icon in &group.icons {
            println!(
                "  {:<32} {} {}",
                icon.label,
                icon.value.green(),
                format!("[{} bytes]", icon.svg.len()).dimmed()
            );
        }
    }
    println!();
    println!(
        "{} icons in {} groups",
        listing.icon_count().to_string().bold(),
        listing.icon_groups.len().to_string().bold()
    );
}

pub async fn handle_lookup_command(config: &Config, values: Vec<String>) -> Result<()> {
    let values: Vec<String> = values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        anyhow::bail!("Provide at least one non-empty value to look up");
    }

    let (registry, ctx) = registry_and_context(config)?;
    let icons = registry.icons_by_value(&ctx, &values).await?;

    for missing in values.iter().filter(|value| !icons.contains_key(*value)) {
        eprintln!("{} no icon resolves to '{}'", "!".yellow().bold(), missing);
    }

    println!("{}", serde_json::to_string_pretty(&IconsByValue { icons })?);
    Ok(())
}

pub async fn handle_render_command(config: &Config, value: String, options: DisplayOptions) -> Result<()> {
    let (registry, ctx) = registry_and_context(config)?;
    let icons = registry.icons_by_value(&ctx, std::slice::from_ref(&value)).await?;

    match render_icon(icons.get(&value), &options) {
        Some(html) => println!("{}", html),
        None => info!("No icon resolves to '{}', nothing rendered", value),
    }
    Ok(())
}

pub fn handle_kebab_command(text: &str) {
    println!("{}", to_kebab_case(text));
}
