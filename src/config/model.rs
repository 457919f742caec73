//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::quiz::settings::QuizLimits;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the question set comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File path, `http(s)://` URL, or `builtin`.
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
    #[serde(default = "default_max_question_count")]
    pub max_question_count: usize,
    #[serde(default = "default_true")]
    pub timed: bool,
}

impl QuizConfig {
    pub fn limits(&self) -> QuizLimits {
        let max = self.max_question_count.max(1);
        QuizLimits {
            default_question_count: self.default_question_count.clamp(1, max),
            max_question_count: max,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_question_count: default_question_count(),
            max_question_count: default_max_question_count(),
            timed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_explanations: true,
        }
    }
}

/// Diagnostic log settings. The log goes to a file because the terminal
/// belongs to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_location() -> String {
    "questions.json".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_question_count() -> usize {
    10
}
fn default_max_question_count() -> usize {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/crabquiz/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, resolve_source};

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.source.location, "questions.json");
        assert_eq!(cfg.source.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.quiz.limits(), QuizLimits::default());
        assert!(cfg.quiz.timed);
        assert!(cfg.ui.show_explanations);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse_config(
            r#"
            [source]
            location = "https://example.com/scrum.json"

            [quiz]
            default_question_count = 80
            max_question_count = 40
            timed = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.source.location, "https://example.com/scrum.json");
        assert_eq!(cfg.source.timeout_secs, 10);
        assert_eq!(
            cfg.quiz.limits(),
            QuizLimits {
                default_question_count: 40,
                max_question_count: 40
            }
        );
        assert!(!cfg.quiz.timed);
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(parse_config("[quiz]\ntimed = \"yes\"").is_err());
    }

    #[test]
    fn test_argument_wins_over_config() {
        let cfg = AppConfig::default();
        assert_eq!(resolve_source(&cfg, Some("other.json".into())), "other.json");
    }
}
