//! Application settings: built-in defaults, then an optional RON file, then CLI flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use launchpad_core::{LaunchId, Route};
use launchpad_engine::ClientSettings;
use launchpad_logging::{LogDestination, DEFAULT_LOG_FILE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "launchpad.ron";

const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Parser)]
#[command(name = "launchpad", about = "Browse spaceflight launches in the terminal")]
pub struct Cli {
    /// GraphQL endpoint to query.
    #[arg(long)]
    pub endpoint: Option<String>,
    /// RON settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Open this launch instead of the list.
    #[arg(long)]
    pub launch: Option<String>,
    /// Seconds between background slides.
    #[arg(long)]
    pub slide_interval: Option<u64>,
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct FileConfig {
    endpoint: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    max_response_bytes: Option<u64>,
    slide_interval_secs: Option<u64>,
    log: Option<LogTarget>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub start_route: Route,
    pub slide_interval: Duration,
    pub log: LogDestination,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid endpoint {endpoint:?}: {message}")]
    Endpoint { endpoint: String, message: String },
    #[error("launch id must not be empty")]
    EmptyLaunchId,
    #[error("slide interval must be at least one second")]
    SlideInterval,
}

pub fn load(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => read_file(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_file(path)?
            } else {
                FileConfig::default()
            }
        }
    };
    resolve(cli, file)
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn resolve(cli: &Cli, file: FileConfig) -> Result<AppConfig, ConfigError> {
    let defaults = ClientSettings::default();

    let endpoint = cli
        .endpoint
        .clone()
        .or(file.endpoint)
        .unwrap_or(defaults.endpoint);
    if let Err(err) = url::Url::parse(&endpoint) {
        return Err(ConfigError::Endpoint {
            endpoint,
            message: err.to_string(),
        });
    }

    let client = ClientSettings {
        endpoint,
        connect_timeout: file
            .connect_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout),
        request_timeout: file
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        max_bytes: file.max_response_bytes.unwrap_or(defaults.max_bytes),
    };

    let start_route = match cli.launch.as_deref().map(str::trim) {
        Some("") => return Err(ConfigError::EmptyLaunchId),
        Some(id) => Route::Launch(LaunchId::new(id)),
        None => Route::List,
    };

    let slide_interval = match cli.slide_interval.or(file.slide_interval_secs) {
        Some(0) => return Err(ConfigError::SlideInterval),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_SLIDE_INTERVAL,
    };

    let log_file = file
        .log_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    // The terminal is the UI, so logs go to a file unless asked otherwise.
    let log = match cli.log.or(file.log).unwrap_or(LogTarget::File) {
        LogTarget::Off => LogDestination::Off,
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::File => LogDestination::File(log_file),
        LogTarget::Both => LogDestination::Both(log_file),
    };

    Ok(AppConfig {
        client,
        start_route,
        slide_interval,
        log,
    })
}
