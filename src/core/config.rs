//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gradebook/config.toml`. If missing on first run, a
//! commented-out default is generated so operators can discover all options.
//! None of it is about roster contents: records are never written to disk.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::roster::IdScheme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GradebookConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    pub id_scheme: Option<IdScheme>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub id_scheme: Option<IdScheme>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "gradebook.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub id_scheme: IdScheme,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Diagnostics
// ============================================================================

/// Messages raised while loading and resolving config.
///
/// Config is read before the logger exists (the log file and level are
/// themselves config), so nothing here logs directly. `main` calls
/// [`Diagnostics::replay`] once `WriteLogger` is up.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Send everything collected so far to the logger.
    pub fn replay(&self) {
        for note in &self.notes {
            info!("{note}");
        }
        for warning in &self.warnings {
            warn!("{warning}");
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gradebook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gradebook").join("config.toml"))
}

/// Load config from `~/.gradebook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GradebookConfig::default()`.
pub fn load_config(diag: &mut Diagnostics) -> Result<GradebookConfig, ConfigError> {
    match config_path() {
        Some(path) => {
            if !path.exists() {
                diag.note(format!(
                    "No config file found, generating default at {}",
                    path.display()
                ));
                generate_default_config(&path, diag);
                return Ok(GradebookConfig::default());
            }
            load_config_from(&path, diag)
        }
        None => {
            diag.warn("Could not determine home directory, using default config");
            Ok(GradebookConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(
    path: &Path,
    diag: &mut Diagnostics,
) -> Result<GradebookConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GradebookConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    diag.note(format!("Loaded config from {}", path.display()));
    diag.note(format!("Config: {config:?}"));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, diag: &mut Diagnostics) {
    let default_content = r#"# Gradebook Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"           # "off", "error", "warn", "info", "debug", "trace"
# log_file = "gradebook.log"   # Or set GRADEBOOK_LOG_FILE

# [roster]
# id_scheme = "count"          # "count": id = number of students + 1 (ids can repeat after a delete)
#                              # "monotonic": id = highest id handed out + 1
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            diag.warn(format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        diag.warn(format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &GradebookConfig,
    cli: &CliOverrides,
    diag: &mut Diagnostics,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("GRADEBOOK_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| parse_log_level(&level, diag))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("GRADEBOOK_LOG_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Id scheme: CLI → env → config → default
    let id_scheme = cli
        .id_scheme
        .or_else(|| {
            std::env::var("GRADEBOOK_ID_SCHEME")
                .ok()
                .and_then(|s| parse_id_scheme(&s, diag))
        })
        .or(config.roster.id_scheme)
        .unwrap_or_default();

    ResolvedConfig {
        log_level,
        log_file,
        id_scheme,
    }
}

fn parse_log_level(level: &str, diag: &mut Diagnostics) -> Option<LevelFilter> {
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            diag.warn(format!("Unknown log level {level:?}, using default"));
            None
        }
    }
}

fn parse_id_scheme(scheme: &str, diag: &mut Diagnostics) -> Option<IdScheme> {
    match scheme.trim().to_ascii_lowercase().as_str() {
        "count" => Some(IdScheme::Count),
        "monotonic" => Some(IdScheme::Monotonic),
        other => {
            diag.warn(format!("Unknown id scheme {other:?}, ignoring"));
            None
        }
    }
}
