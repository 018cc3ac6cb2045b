//! CLI for pagegrab.

mod grab;

use anyhow::{bail, Result};
use clap::Parser;
use pagegrab_core::config::{self, GrabConfig};
use pagegrab_core::headers::parse_header_line;
use std::path::PathBuf;

pub use grab::{run_grab, summary_line};

/// Download every file of a given extension linked from a web page.
///
/// Values not given on the command line come from
/// `~/.config/pagegrab/config.toml` (created with defaults on first run).
#[derive(Debug, Parser)]
#[command(name = "pagegrab")]
#[command(about = "Download every file of a given extension linked from a web page", long_about = None)]
pub struct Cli {
    /// Page(s) to scan for links. Several pages are processed in order.
    #[arg(value_name = "PAGE_URL")]
    pub pages: Vec<String>,

    /// Suffix a link must end with, matched literally and case-sensitively (e.g. ".iso").
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Directory to save files into (created if missing).
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// URL that relative links are resolved against (default: each page's own URL).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// User-Agent sent with every request.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Extra request header, repeatable.
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let base = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init().unwrap_or_else(|e| {
                tracing::warn!("config unavailable, using defaults: {:#}", e);
                GrabConfig::default()
            }),
        };
        let cfg = cli.apply(base)?;
        tracing::debug!("effective config: {:?}", cfg);

        let pages = cli.page_urls(&cfg);
        run_grab(&cfg, &pages)?;
        Ok(())
    }

    /// Layers command-line values over `cfg`.
    pub fn apply(&self, mut cfg: GrabConfig) -> Result<GrabConfig> {
        if let Some(first) = self.pages.first() {
            cfg.page_url = first.clone();
        }
        if let Some(ext) = &self.extension {
            cfg.extension = ext.clone();
        }
        if let Some(dir) = &self.download_dir {
            cfg.download_dir = dir.clone();
        }
        if let Some(base) = &self.base_url {
            cfg.base_url = Some(base.clone());
        }
        if let Some(ua) = &self.user_agent {
            cfg.user_agent = ua.clone();
        }
        for line in &self.headers {
            match parse_header_line(line) {
                Some((name, value)) => {
                    cfg.headers.insert(name, value);
                }
                None => bail!("invalid --header {:?}: expected \"Name: value\"", line),
            }
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = Some(secs);
        }
        Ok(cfg)
    }

    /// Pages to process: those given on the command line, else the configured one.
    pub fn page_urls(&self, cfg: &GrabConfig) -> Vec<String> {
        if self.pages.is_empty() {
            vec![cfg.page_url.clone()]
        } else {
            self.pages.clone()
        }
    }
}
