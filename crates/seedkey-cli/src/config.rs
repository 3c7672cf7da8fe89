//! CLI configuration management.
//!
//! Handles the SS58 prefix, default key pair type, keystore location, etc.

use anyhow::Context;
use seedkey_types::{Address, KeyPairType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// SS58 prefix used to render addresses
    pub ss58_prefix: u8,
    /// Key pair type when none is given on the command line
    pub default_algorithm: KeyPairType,
    /// Where keystore backups are written
    pub keystore_dir: PathBuf,
    /// Genesis hash recorded in new accounts outside development mode
    pub genesis_hash: Option<String>,
    /// Offer the development seed
    pub is_development: bool,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ss58_prefix: Address::DEFAULT_PREFIX,
            default_algorithm: KeyPairType::default(),
            keystore_dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".seedkey")
                .join("keystore"),
            genesis_hash: None,
            is_development: false,
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or the default location.
    ///
    /// A missing file is created with default values.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            let config: CliConfig = toml::from_str(&contents)
                .with_context(|| format!("parsing {}", config_path.display()))?;
            config.check()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(&config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get configuration file path.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".seedkey").join("config.toml"))
    }

    /// Update one field from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "ss58_prefix" | "prefix" => self.ss58_prefix = value.parse()?,
            "default_algorithm" | "algorithm" => self.default_algorithm = value.parse()?,
            "keystore_dir" => self.keystore_dir = PathBuf::from(value),
            "genesis_hash" => {
                self.genesis_hash = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "is_development" | "dev" => self.is_development = value.parse()?,
            "log_level" => self.log_level = value.to_string(),
            "json_logs" => self.json_logs = value.parse()?,
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        self.check()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.ss58_prefix > Address::MAX_SIMPLE_PREFIX {
            anyhow::bail!(
                "ss58_prefix {} is out of range (0..={})",
                self.ss58_prefix,
                Address::MAX_SIMPLE_PREFIX
            );
        }
        Ok(())
    }
}
