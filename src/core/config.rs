//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Theme;
use crate::core::typing::TypingConfig;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub typing: TypingSection,
    #[serde(default)]
    pub counters: CountersSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub content_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypingSection {
    pub phrases: Option<Vec<String>>,
    pub typing_interval_ms: Option<u64>,
    pub deleting_interval_ms: Option<u64>,
    pub pause_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountersSection {
    pub duration_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 80;
pub const DEFAULT_DELETING_INTERVAL_MS: u64 = 40;
pub const DEFAULT_PAUSE_MS: u64 = 1800;
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 1500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Theme from config/env/CLI. Saved prefs override this at startup.
    pub theme: Option<Theme>,
    /// Absolute path of the content file, if one was configured.
    pub content_file: Option<PathBuf>,
    /// Hero phrases. `None` means "derive from content".
    pub phrases: Option<Vec<String>>,
    pub typing: TypingConfig,
    pub counter_duration: Duration,
}

/// Values from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub content_file: Option<PathBuf>,
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
// Loading
// ============================================================================

/// Returns `~/.folio/`.
pub fn folio_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio"))
}

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    folio_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "dark" or "light" (or FOLIO_THEME)
# content_file = "me.toml"           # Path relative to ~/.folio/ (or FOLIO_CONTENT_FILE)

# [typing]
# phrases = ["Ruby on Rails team building", "platform engineering"]
# typing_interval_ms = 80            # Or FOLIO_TYPING_INTERVAL_MS
# deleting_interval_ms = 40
# pause_ms = 1800

# [counters]
# duration_ms = 1500
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {name}={raw:?}: {e}");
            None
        }
    }
}

fn env_theme() -> Option<Theme> {
    let raw = std::env::var("FOLIO_THEME").ok()?;
    let theme = Theme::parse(&raw);
    if theme.is_none() {
        warn!("Ignoring FOLIO_THEME={raw:?}: expected \"dark\" or \"light\"");
    }
    theme
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Interval values are passed through as-is; zero values are rejected later
/// when the typing effect is built.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Theme: CLI → env → config
    let theme = cli.theme.or_else(env_theme).or(config.general.theme);

    // Content file: CLI → env → config (config paths are relative to ~/.folio/)
    let content_file = cli
        .content_file
        .clone()
        .or_else(|| std::env::var("FOLIO_CONTENT_FILE").ok().map(PathBuf::from))
        .or_else(|| {
            config.general.content_file.as_ref().map(|f| {
                let p = PathBuf::from(f);
                if p.is_absolute() {
                    p
                } else {
                    folio_dir().map(|d| d.join(&p)).unwrap_or(p)
                }
            })
        });

    // Typing interval: env → config → default
    let typing_ms = env_u64("FOLIO_TYPING_INTERVAL_MS")
        .or(config.typing.typing_interval_ms)
        .unwrap_or(DEFAULT_TYPING_INTERVAL_MS);

    ResolvedConfig {
        theme,
        content_file,
        // An empty list means "not set": fall back to the content's phrases.
        phrases: config.typing.phrases.clone().filter(|p| !p.is_empty()),
        typing: TypingConfig::from_millis(
            typing_ms,
            config
                .typing
                .deleting_interval_ms
                .unwrap_or(DEFAULT_DELETING_INTERVAL_MS),
            config.typing.pause_ms.unwrap_or(DEFAULT_PAUSE_MS),
        ),
        counter_duration: Duration::from_millis(
            config
                .counters
                .duration_ms
                .unwrap_or(DEFAULT_COUNTER_DURATION_MS),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FolioConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.typing.phrases.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FolioConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(
            resolved.typing.deleting_interval,
            Duration::from_millis(DEFAULT_DELETING_INTERVAL_MS)
        );
        assert_eq!(resolved.typing.pause, Duration::from_millis(DEFAULT_PAUSE_MS));
        assert_eq!(
            resolved.counter_duration,
            Duration::from_millis(DEFAULT_COUNTER_DURATION_MS)
        );
        assert!(resolved.phrases.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FolioConfig {
            typing: TypingSection {
                phrases: Some(vec!["Go".to_string(), "Rust".to_string()]),
                typing_interval_ms: None,
                deleting_interval_ms: Some(10),
                pause_ms: Some(100),
            },
            counters: CountersSection {
                duration_ms: Some(250),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.phrases.as_deref().map(|p| p.len()), Some(2));
        assert_eq!(resolved.typing.deleting_interval, Duration::from_millis(10));
        assert_eq!(resolved.typing.pause, Duration::from_millis(100));
        assert_eq!(resolved.counter_duration, Duration::from_millis(250));
    }

    #[test]
    fn test_resolve_empty_phrase_list_is_unset() {
        let config: FolioConfig = toml::from_str("[typing]\nphrases = []\n").unwrap();
        assert_eq!(config.typing.phrases, Some(Vec::new()));
        assert!(resolve(&config, &CliOverrides::default()).phrases.is_none());
    }

    #[test]
    fn test_resolve_cli_theme_wins() {
        let config = FolioConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            theme: Some(Theme::Dark),
            ..Default::default()
        };
        assert_eq!(resolve(&config, &cli).theme, Some(Theme::Dark));
    }

    #[test]
    fn test_resolve_cli_content_file_wins() {
        let config = FolioConfig {
            general: GeneralConfig {
                content_file: Some("/etc/other.toml".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            content_file: Some(PathBuf::from("/tmp/me.toml")),
            ..Default::default()
        };
        assert_eq!(
            resolve(&config, &cli).content_file,
            Some(PathBuf::from("/tmp/me.toml"))
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
theme = "light"
content_file = "me.toml"

[typing]
phrases = ["Go", "Rust"]
typing_interval_ms = 10
deleting_interval_ms = 10
pause_ms = 100

[counters]
duration_ms = 900
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Light));
        assert_eq!(config.general.content_file.as_deref(), Some("me.toml"));
        assert_eq!(
            config.typing.phrases,
            Some(vec!["Go".to_string(), "Rust".to_string()])
        );
        assert_eq!(config.typing.pause_ms, Some(100));
        assert_eq!(config.counters.duration_ms, Some(900));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[typing]
pause_ms = 500
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.typing.pause_ms, Some(500));
        assert!(config.typing.phrases.is_none());
        assert!(config.general.theme.is_none());
        assert!(config.counters.duration_ms.is_none());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let toml_str = r#"
[general]
theme = "sepia"
"#;
        assert!(toml::from_str::<FolioConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/folio/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
    }
}
