//! # Configuration
//!
//! TOML file (default `config/sentiment.toml`, or `SENTIMENT_CONFIG_PATH`)
//! with environment overrides:
//!
//! - `SENTIMENT_MAX_INPUT_BYTES`: request size cap
//! - `SENTIMENT_LEXICON_PATH`: JSON valence overrides merged onto the embedded lexicon
//! - `SENTIMENT_LOG_JSON`: `1`/`true` for JSON log lines
//!
//! A missing file means built-in defaults; a malformed file is an error.
//! Unparsable override values are ignored.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use std::sync::Arc;

use crate::analyze::{AnalyzerOptions, SentimentAnalyzer};
use crate::lexicon::Lexicon;
use crate::scorer::Vader;

pub const DEFAULT_CONFIG_PATH: &str = "config/sentiment.toml";
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

pub const ENV_CONFIG_PATH: &str = "SENTIMENT_CONFIG_PATH";
pub const ENV_MAX_INPUT_BYTES: &str = "SENTIMENT_MAX_INPUT_BYTES";
pub const ENV_LEXICON_PATH: &str = "SENTIMENT_LEXICON_PATH";
pub const ENV_LOG_JSON: &str = "SENTIMENT_LOG_JSON";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// UI assets served for any non-API path.
    pub static_dir: PathBuf,
    pub max_input_bytes: usize,
    pub cors_permissive: bool,
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            cors_permissive: true,
            metrics_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub include_preprocessed: bool,
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_preprocessed: true,
            lexicon_path: None,
        }
    }
}

impl AnalysisConfig {
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            include_preprocessed: self.include_preprocessed,
        }
    }

    /// Analyzer over the embedded lexicon, with `lexicon_path` merged on top when set.
    pub fn build_analyzer(&self) -> anyhow::Result<SentimentAnalyzer> {
        let lexicon = match &self.lexicon_path {
            Some(path) => Arc::new(Lexicon::with_overrides(path)?),
            None => Lexicon::embedded(),
        };
        Ok(SentimentAnalyzer::with_scorer(Vader::with_lexicon(lexicon))
            .options(self.analyzer_options()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Resolve the path from env (or default), load, apply env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env();
        Ok(cfg.sanitized())
    }

    /// Load a file; a missing file yields defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {}", path.display(), e))
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(toml_str)?;
        Ok(cfg.sanitized())
    }

    fn apply_env(&mut self) {
        if let Some(n) = parse_usize_env(std::env::var(ENV_MAX_INPUT_BYTES).ok()) {
            self.server.max_input_bytes = n;
        }
        if let Ok(p) = std::env::var(ENV_LEXICON_PATH) {
            if !p.trim().is_empty() {
                self.analysis.lexicon_path = Some(PathBuf::from(p.trim()));
            }
        }
        if let Some(b) = parse_bool_env(std::env::var(ENV_LOG_JSON).ok()) {
            self.logging.json = b;
        }
    }

    fn sanitized(mut self) -> Self {
        if self.server.max_input_bytes == 0 {
            self.server.max_input_bytes = DEFAULT_MAX_INPUT_BYTES;
        }
        if self.logging.filter.trim().is_empty() {
            self.logging.filter = LoggingConfig::default().filter;
        }
        self
    }
}

fn parse_usize_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}

fn parse_bool_env(raw: Option<String>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.analysis.include_preprocessed);
        assert_eq!(cfg.server.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
[server]
max_input_bytes = 2048

[analysis]
include_preprocessed = false
"#,
        )
        .unwrap();
        assert_eq!(cfg.server.max_input_bytes, 2048);
        assert!(cfg.server.cors_permissive);
        assert!(!cfg.analysis.include_preprocessed);
        assert_eq!(cfg.logging.filter, "info");
    }

    #[test]
    fn zero_limit_falls_back_to_default() {
        let cfg = AppConfig::from_toml_str("[server]\nmax_input_bytes = 0\n").unwrap();
        assert_eq!(cfg.server.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[server\nmax_input_bytes = ").is_err());
        assert!(AppConfig::from_toml_str("[server]\nmax_input_bytes = \"big\"").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = AppConfig::load_from("/no/such/dir/sentiment.toml").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn build_analyzer_honours_options() {
        let cfg = AnalysisConfig {
            include_preprocessed: false,
            lexicon_path: None,
        };
        let report = cfg.build_analyzer().unwrap().analyze("Great day!").unwrap();
        assert!(report.preprocessed_text.is_empty());
    }

    #[test]
    fn build_analyzer_fails_on_missing_lexicon_file() {
        let cfg = AnalysisConfig {
            include_preprocessed: true,
            lexicon_path: Some(PathBuf::from("/no/such/lexicon.json")),
        };
        assert!(cfg.build_analyzer().is_err());
    }

    #[test]
    fn env_value_parsing() {
        assert_eq!(parse_usize_env(Some(" 4096 ".into())), Some(4096));
        assert_eq!(parse_usize_env(Some("0".into())), None);
        assert_eq!(parse_usize_env(Some("lots".into())), None);
        assert_eq!(parse_bool_env(Some("TRUE".into())), Some(true));
        assert_eq!(parse_bool_env(Some("0".into())), Some(false));
        assert_eq!(parse_bool_env(Some("maybe".into())), None);
        assert_eq!(parse_bool_env(None), None);
    }
}
