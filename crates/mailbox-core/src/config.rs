//! Mailbox configuration.
//!
//! Read once at startup from `<config dir>/mailbox/config.json`, or from the
//! file named by `MAILBOX_CONFIG`. Every field is optional in the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::is_valid_email;
use crate::sample::OWNER_ADDRESS;
use crate::store::DEFAULT_LABELS;
use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MAILBOX_CONFIG";

/// Startup settings for a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailboxConfig {
    /// Address used as the sender for composed mail.
    pub owner_address: String,
    /// Label vocabulary offered in the label menu.
    pub labels: Vec<String>,
    /// Whether the mailbox starts in dark mode.
    pub dark_mode: bool,
    /// Whether to fill the mailbox with the demonstration emails.
    pub seed_sample_data: bool,
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self {
            owner_address: OWNER_ADDRESS.to_string(),
            labels: DEFAULT_LABELS.iter().map(ToString::to_string).collect(),
            dark_mode: false,
            seed_sample_data: true,
        }
    }
}

impl MailboxConfig {
    /// Where the config file lives: `MAILBOX_CONFIG` if set, otherwise the
    /// platform config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailbox")
            .join("config.json")
    }

    /// Parse and validate configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!("Config loaded from {:?}", path);
        Ok(config)
    }

    /// Load from [`default_path`](Self::default_path), falling back to
    /// defaults when the file is missing or broken.
    #[must_use]
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Check the values make sense.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for an invalid owner address or a blank or
    /// repeated label.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_email(&self.owner_address) {
            return Err(Error::Config(format!(
                "owner_address is not a valid email address: {:?}",
                self.owner_address
            )));
        }
        for (i, label) in self.labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(Error::Config("labels must not be blank".to_string()));
            }
            if self.labels[..i].contains(label) {
                return Err(Error::Config(format!("duplicate label: {label}")));
            }
        }
        Ok(())
    }
}
