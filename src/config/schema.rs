use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

// ── Remote store ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the contact-management backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for the backend, if it requires one
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ── Notifications ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Milliseconds a notification stays visible before auto-dismissing
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u64,
}

fn default_auto_dismiss_ms() -> u64 {
    3000
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let tagsmith_dir = home.join(".tagsmith");
        let config_path = tagsmith_dir.join("config.toml");

        if !tagsmith_dir.exists() {
            fs::create_dir_all(&tagsmith_dir).context("Failed to create .tagsmith directory")?;
        }

        Self::load_or_init_at(&config_path)
    }

    /// Load from an explicit path, writing defaults there if absent.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents =
                fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            // Set computed paths that are skipped during serialization
            config.config_path = config_path.to_path_buf();
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            Ok(config)
        }
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.store.base_url.is_empty(),
            "store.base_url must not be empty"
        );
        anyhow::ensure!(
            self.store.timeout_secs > 0,
            "store.timeout_secs must be positive"
        );
        anyhow::ensure!(
            self.notify.auto_dismiss_ms > 0,
            "notify.auto_dismiss_ms must be positive"
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
