//! Configuration
//!
//! Loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/bracketty/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! A missing config file is fine. A file that exists but cannot be read or
//! parsed is an error, so a typo never silently falls back to defaults.

use crate::error::ConfigError;
use crate::trace::Mode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_INPUT: &str = "([])";
pub const DEFAULT_PRESETS: [&str; 7] = ["()", "()[]{}", "(]", "([])", "([)]", "{[()]}", "((()))"];
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Mode the visualizer starts in
    pub mode: Mode,

    /// Auto-play period
    pub play_interval: Duration,

    /// Input shown when no string is given on the command line
    pub initial_input: String,

    /// Inputs cycled through with the preset key
    pub presets: Vec<String>,

    /// Directory for the log file
    pub log_dir: PathBuf,

    /// Default tracing filter level
    pub log_level: String,

    pub explain: ExplainConfig,
}

/// Settings for the explanation fetcher
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainConfig {
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    pub api_key: Option<String>,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Stack,
            play_interval: crate::replay::DEFAULT_PLAY_INTERVAL,
            initial_input: DEFAULT_INPUT.to_string(),
            presets: DEFAULT_PRESETS.iter().map(|p| p.to_string()).collect(),
            log_dir: PathBuf::from("./logs"),
            log_level: "info".to_string(),
            explain: ExplainConfig::default(),
        }
    }
}

/// Config file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    mode: Option<Mode>,
    play_interval_ms: Option<u64>,
    initial_input: Option<String>,
    presets: Option<Vec<String>>,
    log_dir: Option<String>,
    log_level: Option<String>,

    /// Optional [explain] section
    explain: Option<FileExplainConfig>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FileExplainConfig {
    api_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
    api_key: Option<String>,
}

/// Snapshot of the environment variables the config reads
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub mode: Option<String>,
    pub play_interval_ms: Option<String>,
    pub log_dir: Option<String>,
    pub log_level: Option<String>,
    pub api_key: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            mode: var("BRACKETTY_MODE"),
            play_interval_ms: var("BRACKETTY_PLAY_INTERVAL_MS"),
            log_dir: var("BRACKETTY_LOG_DIR"),
            log_level: var("BRACKETTY_LOG_LEVEL"),
            api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
        }
    }
}

impl Config {
    /// ~/.config/bracketty/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("bracketty").join("config.toml"))
    }

    /// Load file config (if any) and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, EnvOverrides::from_env())
    }

    /// Parse a config document with explicit overrides, ignoring the process environment
    pub fn from_toml_str(contents: &str, env: EnvOverrides) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        Self::merge(file, env)
    }

    fn merge(file: FileConfig, env: EnvOverrides) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let mode = match env.mode {
            Some(raw) => raw.parse::<Mode>()?,
            None => file.mode.unwrap_or(defaults.mode),
        };

        let play_interval = match env.play_interval_ms {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "play_interval_ms".to_string(),
                    value: raw.clone(),
                })?;
                Duration::from_millis(ms)
            }
            None => file
                .play_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.play_interval),
        };
        if play_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "play_interval_ms".to_string(),
                value: "0".to_string(),
            });
        }

        let initial_input = file.initial_input.unwrap_or(defaults.initial_input);
        check_brackets("initial_input", &initial_input)?;

        let presets = match file.presets {
            Some(presets) if !presets.is_empty() => presets,
            _ => defaults.presets,
        };
        for preset in &presets {
            check_brackets("presets", preset)?;
        }

        let log_dir = env
            .log_dir
            .or(file.log_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_level = env
            .log_level
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        let file_explain = file.explain.unwrap_or_default();
        let explain = ExplainConfig {
            api_url: file_explain.api_url.unwrap_or(defaults.explain.api_url),
            model: file_explain.model.unwrap_or(defaults.explain.model),
            timeout: file_explain
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.explain.timeout),
            api_key: env.api_key.or(file_explain.api_key),
        };

        Ok(Self {
            mode,
            play_interval,
            initial_input,
            presets,
            log_dir,
            log_level,
            explain,
        })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn check_brackets(key: &str, value: &str) -> Result<(), ConfigError> {
    crate::trace::parse_brackets(value)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("", EnvOverrides::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.presets.len(), 7);
        assert_eq!(config.play_interval, Duration::from_millis(800));
    }

    #[test]
    fn test_file_values() {
        let toml = r#"
            mode = "queue"
            play_interval_ms = 250
            initial_input = "{[]}"
            presets = ["()", "(("]

            [explain]
            model = "gemini-test"
            timeout_secs = 5
            api_key = "from-file"
        "#;
        let config = Config::from_toml_str(toml, EnvOverrides::default()).unwrap();
        assert_eq!(config.mode, Mode::Queue);
        assert_eq!(config.play_interval, Duration::from_millis(250));
        assert_eq!(config.initial_input, "{[]}");
        assert_eq!(config.presets, vec!["()", "(("]);
        assert_eq!(config.explain.model, "gemini-test");
        assert_eq!(config.explain.timeout, Duration::from_secs(5));
        assert_eq!(config.explain.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.explain.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let env = EnvOverrides {
            mode: Some("stack".to_string()),
            play_interval_ms: Some("100".to_string()),
            log_dir: Some("/tmp/bt".to_string()),
            log_level: Some("debug".to_string()),
            api_key: Some("from-env".to_string()),
        };
        let toml = r#"
            mode = "queue"
            log_level = "warn"
            [explain]
            api_key = "from-file"
        "#;
        let config = Config::from_toml_str(toml, env).unwrap();
        assert_eq!(config.mode, Mode::Stack);
        assert_eq!(config.play_interval, Duration::from_millis(100));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bt"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.explain.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_mode = Config::from_toml_str(r#"mode = "deque""#, EnvOverrides::default());
        assert!(matches!(bad_mode, Err(ConfigError::Parse(_))));

        let bad_preset = Config::from_toml_str(r#"presets = ["(a)"]"#, EnvOverrides::default());
        assert!(matches!(bad_preset, Err(ConfigError::InvalidValue { .. })));

        let zero = Config::from_toml_str("play_interval_ms = 0", EnvOverrides::default());
        assert!(matches!(zero, Err(ConfigError::InvalidValue { .. })));

        let env = EnvOverrides {
            play_interval_ms: Some("soon".to_string()),
            ..EnvOverrides::default()
        };
        assert!(Config::from_toml_str("", env).is_err());

        let unknown = Config::from_toml_str("colour = 3", EnvOverrides::default());
        assert!(matches!(unknown, Err(ConfigError::Parse(_))));
    }
}
