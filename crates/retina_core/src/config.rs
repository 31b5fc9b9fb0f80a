//! Where the prediction service lives and how to talk to it.

use anyhow::{Context, Result, bail};
use directories_next::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8001";
pub const ENDPOINT_ENV: &str = "RETINASCAN_ENDPOINT";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const PREDICT_PATH: &str = "predict-image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service; `/predict-image` is appended.
    pub endpoint: Url,
    /// `None` waits indefinitely, like the browser client did.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            ..Self::default()
        })
    }

    /// Loads defaults, then the per-user config file, then the environment.
    pub fn load() -> Result<Self> {
        let path = default_config_path();
        Self::load_from(path.as_deref(), std::env::var(ENDPOINT_ENV).ok())
    }

    pub fn load_from(path: Option<&Path>, env_endpoint: Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(path) = path
            && path.exists()
        {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            cfg = Self::from_toml_str(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?;
            tracing::info!("config loaded from {}", path.display());
        }
        if let Some(raw) = env_endpoint.filter(|v| !v.trim().is_empty()) {
            match parse_endpoint(&raw) {
                Ok(endpoint) => cfg.endpoint = endpoint,
                Err(e) => tracing::warn!("{ENDPOINT_ENV} ignored: {e:#}"),
            }
        }
        Ok(cfg)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(raw)?;
        let mut cfg = Self::default();
        if let Some(endpoint) = file.endpoint {
            cfg.endpoint = parse_endpoint(&endpoint)?;
        }
        cfg.request_timeout_secs = file.request_timeout_secs;
        Ok(cfg)
    }

    pub fn predict_url(&self) -> Result<Url> {
        let mut base = self.endpoint.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(PREDICT_PATH)?)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "retinascan", "RetinaScan")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("not a URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("endpoint must be http or https, got {}", url.scheme());
    }
    Ok(url)
}
