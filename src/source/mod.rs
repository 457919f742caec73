//! Question-set loading.
//!
//! A question set is a JSON array of question records, read either from a
//! local file or with a single HTTP GET. Loading happens once per attempt;
//! a failed attempt is reported, never retried here.

use crate::quiz::fallback;
use crate::quiz::model::{Question, QuestionRecord};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionSource {
    Url(String),
    File(PathBuf),
    Builtin,
}

impl QuestionSource {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.eq_ignore_ascii_case("builtin") {
            QuestionSource::Builtin
        } else if location.starts_with("http://") || location.starts_with("https://") {
            QuestionSource::Url(location.to_string())
        } else {
            QuestionSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Url(url) => write!(f, "{}", url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
            QuestionSource::Builtin => write!(f, "built-in questions"),
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid question set: {0}")]
    Schema(String),
}

/// Parses and validates a question-set document.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(LoadError::Schema("expected a JSON array of questions".into()));
    };
    if items.is_empty() {
        return Err(LoadError::Schema("question set is empty".into()));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let record: QuestionRecord = serde_json::from_value(item)
                .map_err(|e| LoadError::Schema(format!("question #{}: {}", i + 1, e)))?;
            Question::try_from(record).map_err(LoadError::Schema)
        })
        .collect()
}

/// Loads the question set from `source`.
pub async fn load(source: &QuestionSource, timeout: Duration) -> Result<Vec<Question>, LoadError> {
    match source {
        QuestionSource::Builtin => Ok(fallback::questions()),
        QuestionSource::File(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
            parse_questions(&text)
        }
        QuestionSource::Url(url) => {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status));
            }
            let text = response.text().await?;
            parse_questions(&text)
        }
    }
}
