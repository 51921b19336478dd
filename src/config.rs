use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::icons::{DEFAULT_ROOT_FOLDER, RegistrySettings, SVG_CONTENT_TYPE};

pub const ENV_HOST_URL: &str = "DIRECTUS_URL";
pub const ENV_HOST_TOKEN: &str = "DIRECTUS_TOKEN";
pub const ENV_BIND: &str = "ICONS_BIND";
pub const ENV_ROOT_FOLDER: &str = "ICONS_ROOT_FOLDER";

/// Connection to the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_host_url")]
    pub url: String,
    /// Static token used when a request carries no credentials of its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Path prefix the icon routes are nested under
    #[serde(default = "default_mount")]
    pub mount: String,
    #[serde(default = "default_request_logging")]
    pub request_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsConfig {
    #[serde(default = "default_root_folder")]
    pub root_folder: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

fn default_host_url() -> String {
    "http://localhost:8055".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8056".to_string()
}

fn default_mount() -> String {
    "/custom-svg-icons".to_string()
}

fn default_request_logging() -> bool {
    true
}

fn default_root_folder() -> String {
    DEFAULT_ROOT_FOLDER.to_string()
}

fn default_content_type() -> String {
    SVG_CONTENT_TYPE.to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            url: default_host_url(),
            token: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            mount: default_mount(),
            request_logging: default_request_logging(),
        }
    }
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            root_folder: default_root_folder(),
            content_type: default_content_type(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("custom-svg-icons")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".custom-svg-icons")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config for host {}", config.host.url);
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Apply environment overrides, reading variables through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(ENV_HOST_URL) {
            debug!("{} overrides host url", ENV_HOST_URL);
            self.host.url = url;
        }
        if let Some(token) = lookup(ENV_HOST_TOKEN) {
            debug!("{} overrides host token", ENV_HOST_TOKEN);
            self.host.token = Some(token);
        }
        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind = bind;
        }
        if let Some(root_folder) = lookup(ENV_ROOT_FOLDER) {
            self.icons.root_folder = root_folder;
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    pub fn registry_settings(&self) -> RegistrySettings {
        RegistrySettings {
            root_folder: self.icons.root_folder.clone(),
            content_type: self.icons.content_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host.url, "http://localhost:8055");
        assert_eq!(config.host.token, None);
        assert_eq!(config.server.bind, "127.0.0.1:8056");
        assert_eq!(config.server.mount, "/custom-svg-icons");
        assert_eq!(config.registry_settings(), RegistrySettings::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [host]
            token = "static"

            [icons]
            root_folder = "Brand Icons"
            "#,
        )
        .unwrap();

        assert_eq!(config.host.url, "http://localhost:8055");
        assert_eq!(config.host.token.as_deref(), Some("static"));
        assert_eq!(config.icons.root_folder, "Brand Icons");
        assert_eq!(config.icons.content_type, "image/svg+xml");
        assert!(config.server.request_logging);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_HOST_URL, "https://cms.example.com"),
            (ENV_HOST_TOKEN, "secret"),
            (ENV_BIND, "   "),
        ]);

        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.host.url, "https://cms.example.com");
        assert_eq!(config.host.token.as_deref(), Some("secret"));
        assert_eq!(config.server.bind, "127.0.0.1:8056");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.server.mount = "/icons".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
