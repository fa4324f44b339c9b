use crate::fetcher::TransportOptions;
use crate::link::{LinkTemplate, DEFAULT_LINK_DATE_FORMAT, DEFAULT_LINK_PREFIX};
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TOKEN_ENV: &str = "EGNYTE_TOKEN";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("link_prefix {0:?} is not an http(s) URL")]
    BadLinkPrefix(String),
    #[error("link_date_format {0:?} is not a valid date format")]
    BadDateFormat(String),
}

/// Global configuration loaded from `~/.config/rlreport/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RlConfig {
    /// Everything in the report link before the date.
    pub link_prefix: String,
    /// chrono format of the date embedded in the link.
    pub link_date_format: String,
    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Where reports are saved when no explicit path is given (None = current dir).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Connect timeout in seconds (None = curl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no deadline).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

impl Default for RlConfig {
    fn default() -> Self {
        Self {
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            link_date_format: DEFAULT_LINK_DATE_FORMAT.to_string(),
            token_env: default_token_env(),
            download_dir: None,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl RlConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme_ok = url::Url::parse(&self.link_prefix)
            .map(|u| matches!(u.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !scheme_ok {
            return Err(ConfigError::BadLinkPrefix(self.link_prefix.clone()));
        }
        // Time and offset fields parse fine but cannot render for a date, so render one.
        let mut rendered = String::new();
        let bad_format = self.link_date_format.trim().is_empty()
            || StrftimeItems::new(&self.link_date_format).any(|item| matches!(item, Item::Error))
            || write!(rendered, "{}", NaiveDate::MIN.format(&self.link_date_format)).is_err();
        if bad_format {
            return Err(ConfigError::BadDateFormat(self.link_date_format.clone()));
        }
        Ok(())
    }

    pub fn link_template(&self) -> LinkTemplate {
        LinkTemplate {
            prefix: self.link_prefix.clone(),
            date_format: self.link_date_format.clone(),
        }
    }

    pub fn transport(&self) -> TransportOptions {
        TransportOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rlreport")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RlConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<RlConfig> {
    if !path.exists() {
        let default_cfg = RlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
