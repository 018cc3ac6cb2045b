use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::headers::{RequestHeaders, DEFAULT_USER_AGENT};

pub const DEFAULT_PAGE_URL: &str = "https://example.com/archives";
pub const DEFAULT_EXTENSION: &str = ".bakent_fronted";
pub const DEFAULT_DOWNLOAD_DIR: &str = "archivos";

/// Run configuration, loaded from `~/.config/pagegrab/config.toml`.
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    /// Page whose links are scanned.
    pub page_url: String,
    /// URL that relative links are resolved against. None = each page's own URL.
    pub base_url: Option<String>,
    /// Literal, case-sensitive suffix a link must end with (e.g. ".iso").
    pub extension: String,
    /// Where downloaded files are written; created if missing.
    pub download_dir: PathBuf,
    /// Sent as `User-Agent` unless `headers` sets one.
    pub user_agent: String,
    /// Per-request time limit in seconds. None = curl's defaults.
    pub timeout_secs: Option<u64>,
    /// Extra request headers. Kept last: it serializes as a TOML table.
    pub headers: BTreeMap<String, String>,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            base_url: None,
            extension: DEFAULT_EXTENSION.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            headers: BTreeMap::new(),
        }
    }
}

impl GrabConfig {
    /// Header set for the transport: `User-Agent` from `user_agent`,
    /// overridden by an explicit entry in `headers`.
    pub fn request_headers(&self) -> RequestHeaders {
        let mut map = BTreeMap::new();
        map.insert("User-Agent".to_string(), self.user_agent.clone());
        for (k, v) in &self.headers {
            if k.eq_ignore_ascii_case("user-agent") {
                map.remove("User-Agent");
            }
            map.insert(k.clone(), v.clone());
        }
        RequestHeaders::from_map(map)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<GrabConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: GrabConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
