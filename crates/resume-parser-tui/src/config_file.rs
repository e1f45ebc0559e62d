use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use resume_parser_core::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

pub const ENDPOINT_ENV: &str = "RESUME_PARSER_ENDPOINT";
pub const TIMEOUT_ENV: &str = "RESUME_PARSER_TIMEOUT";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub service: Option<ServiceConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub directory: Option<String>,
}

/// Platform config directory path: `<config_dir>/resume-parser/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("resume-parser").join("config.toml"))
}

/// Load config by cascading CWD `.resume-parser.toml` over platform config.
/// CWD values override platform values. An explicit `--config` file replaces
/// both.
pub fn load_config(explicit: Option<&Path>) -> ConfigFile {
    if let Some(path) = explicit {
        return load_from_path(path).unwrap_or_default();
    }

    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".resume-parser.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            // Logging isn't up yet; the file is simply skipped.
            eprintln!("ignoring {}: {}", path.display(), e);
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        service: Some(ServiceConfig {
            endpoint: overlay
                .service
                .as_ref()
                .and_then(|s| s.endpoint.clone())
                .or_else(|| base.service.as_ref().and_then(|s| s.endpoint.clone())),
            timeout_secs: overlay
                .service
                .as_ref()
                .and_then(|s| s.timeout_secs)
                .or_else(|| base.service.as_ref().and_then(|s| s.timeout_secs)),
        }),
        logging: Some(LoggingConfig {
            level: overlay
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .or_else(|| base.logging.as_ref().and_then(|l| l.level.clone())),
            directory: overlay
                .logging
                .as_ref()
                .and_then(|l| l.directory.clone())
                .or_else(|| base.logging.as_ref().and_then(|l| l.directory.clone())),
        }),
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout: Duration,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

/// Resolve settings from CLI > environment > config file > defaults.
///
/// `env` looks up a variable by name so tests don't touch the process
/// environment.
pub fn resolve(
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    file: &ConfigFile,
) -> Settings {
    let service = file.service.clone().unwrap_or_default();
    let logging = file.logging.clone().unwrap_or_default();

    let endpoint = non_blank(cli.endpoint.clone())
        .or_else(|| non_blank(env(ENDPOINT_ENV)))
        .or_else(|| non_blank(service.endpoint))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let timeout_secs = cli
        .timeout_secs
        .or_else(|| env(TIMEOUT_ENV).and_then(|v| v.trim().parse().ok()))
        .or(service.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
        .max(1);

    let log_level = non_blank(cli.log_level.clone())
        .or_else(|| non_blank(logging.level))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Settings {
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
        log_level,
        log_dir: non_blank(logging.directory).map(PathBuf::from),
    }
}

/// An empty or whitespace-only value counts as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
