use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PORT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub photos_dir: String,
    pub reports_file: Option<String>,
    #[serde(default)]
    pub auto_open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            photos_dir: "photos".to_string(),
            reports_file: None,
            auto_open_browser: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parses the `key = value` config format. Unknown keys and values
    /// that fail to parse are ignored and the default is kept.
    pub fn parse(content: &str) -> Self {
        let mut settings = Settings::default();
        let mut config_map = HashMap::new();

        for line in content.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        if let Some(port_str) = config_map.get("port") {
            if let Ok(port) = port_str.parse::<u16>() {
                settings.port = port;
            }
        }
        if let Some(photos_dir) = config_map.get("photos_dir") {
            settings.photos_dir = photos_dir.trim_matches('"').to_string();
        }
        if let Some(reports_file) = config_map.get("reports_file") {
            settings.reports_file = Some(reports_file.trim_matches('"').to_string());
        }
        if let Some(auto_open_str) = config_map.get("auto_open_browser") {
            if let Ok(auto_open) = auto_open_str.parse::<bool>() {
                settings.auto_open_browser = auto_open;
            }
        }

        settings
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Creating config directory")?;
        }
        std::fs::write(&config_path, self.render()).context("Failed to write config file")?;
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut content = String::new();
        content.push_str("# PotholeMap Configuration File\n");
        content.push_str(&format!("port = {}\n", self.port));
        content.push_str(&format!("photos_dir = \"{}\"\n", self.photos_dir));
        if let Some(ref reports_file) = self.reports_file {
            content.push_str(&format!("reports_file = \"{}\"\n", reports_file));
        }
        content.push_str(&format!("auto_open_browser = {}\n", self.auto_open_browser));
        content
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("pothole-map.ini");
        path
    }
}
