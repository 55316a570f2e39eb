//! Runtime settings for the `hawks` binary.
//!
//! Settings are layered: command-line flags win over `HAWKS_*` environment
//! variables, which win over the TOML config file, which wins over the
//! built-in defaults.
//!
//! # Example
//!
//! ```toml
//! gateway_url = "http://localhost:8080/hawks"
//! timeout_secs = 10
//!
//! [server]
//! bind = "127.0.0.1"
//! port = 3000
//!
//! [log]
//! json = false
//! ```

use std::path::Path;
use std::time::Duration;

use hawks_gateway::DEFAULT_GATEWAY_URL;
use serde::Deserialize;

/// Config file read from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "hawks.toml";

pub(crate) const DEFAULT_BIND: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: u16 = 3000;

// ── File format ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub(crate) gateway_url: Option<String>,
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) server: ServerSection,
    #[serde(default)]
    pub(crate) log: LogSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ServerSection {
    pub(crate) bind: Option<String>,
    pub(crate) port: Option<u16>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LogSection {
    pub(crate) json: Option<bool>,
}

// ── Resolved settings ────────────────────────────────────────────────────────

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub(crate) gateway_url: Option<String>,
    pub(crate) timeout_secs: Option<u64>,
    pub(crate) bind: Option<String>,
    pub(crate) port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) gateway_url: String,
    /// `None` waits on the catalog service indefinitely.
    pub(crate) timeout: Option<Duration>,
    pub(crate) bind: String,
    pub(crate) port: u16,
    pub(crate) log_json: bool,
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<FileConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

/// Load settings from `config_path` (or `./hawks.toml` if it exists), the
/// process environment and `overrides`.
pub(crate) fn load(config_path: Option<&Path>, overrides: &Overrides) -> Result<Settings, String> {
    let file = match config_path {
        Some(path) => read_config_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            read_config_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => FileConfig::default(),
    };
    resolve(&file, |key| std::env::var(key).ok(), overrides)
}

/// Merge the layers. `env` looks up one environment variable.
pub(crate) fn resolve(
    file: &FileConfig,
    env: impl Fn(&str) -> Option<String>,
    overrides: &Overrides,
) -> Result<Settings, String> {
    let env_gateway = env("HAWKS_GATEWAY_URL").filter(|v| !v.is_empty());
    let env_timeout = parse_env(&env, "HAWKS_TIMEOUT_SECS")?;
    let env_bind = env("HAWKS_BIND").filter(|v| !v.is_empty());
    let env_port = parse_env(&env, "HAWKS_PORT")?;
    let env_json = parse_env(&env, "HAWKS_LOG_JSON")?;

    let gateway_url = overrides
        .gateway_url
        .clone()
        .or(env_gateway)
        .or_else(|| file.gateway_url.clone())
        .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());

    if !(gateway_url.starts_with("http://") || gateway_url.starts_with("https://")) {
        return Err(format!(
            "gateway url '{}' must start with http:// or https://",
            gateway_url
        ));
    }

    let timeout = overrides
        .timeout_secs
        .or(env_timeout)
        .or(file.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    Ok(Settings {
        gateway_url,
        timeout,
        bind: overrides
            .bind
            .clone()
            .or(env_bind)
            .or_else(|| file.server.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string()),
        port: overrides
            .port
            .or(env_port)
            .or(file.server.port)
            .unwrap_or(DEFAULT_PORT),
        log_json: env_json.or(file.log.json).unwrap_or(false),
    })
}

fn parse_env<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("invalid {} '{}': {}", key, raw, e)),
        None => Ok(None),
    }
}
