//! Question and answer records.
//!
//! Questions arrive as loosely-shaped JSON records (nullable image fields,
//! correctness flags encoded as `0`/`1`). [`QuestionRecord`] mirrors that wire
//! shape; converting it into a [`Question`] validates the invariants the quiz
//! relies on and folds the image fields into a single `Option<Image>`.

use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Selection key of an answer. Unique within a question, not globally.
pub type AnswerValue = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub value: AnswerValue,
    pub title: String,
    pub correct: bool,
}

/// Illustration attached to a question. Dimensions are optional hints.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub rank: i64,
    pub prompt: String,
    pub image: Option<Image>,
    pub multiple: bool,
    pub favorite: bool,
    pub explanation: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn correct_values(&self) -> impl Iterator<Item = AnswerValue> + '_ {
        self.answers.iter().filter(|a| a.correct).map(|a| a.value)
    }

    pub fn has_answer(&self, value: AnswerValue) -> bool {
        self.answers.iter().any(|a| a.value == value)
    }

    /// Prompt text used for duplicate detection: trimmed and case-folded.
    pub fn normalized_prompt(&self) -> String {
        self.prompt.trim().to_lowercase()
    }
}

/// Wire shape of a question as found in a question-set document.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: i64,
    #[serde(default)]
    pub rank: i64,
    pub question: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub img_width: Option<u32>,
    #[serde(default)]
    pub img_height: Option<u32>,
    #[serde(default, deserialize_with = "flag")]
    pub favorite: bool,
    #[serde(default, deserialize_with = "flag")]
    pub multiple: bool,
    #[serde(default)]
    pub explanation: String,
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRecord {
    pub value: AnswerValue,
    pub title: String,
    #[serde(default, deserialize_with = "flag")]
    pub correct: bool,
}

/// Accepts `true`/`false` as well as numeric `0`/`1` flags.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(n) => Ok(n != 0),
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        if record.answers.is_empty() {
            return Err(format!("question {} has no answers", record.id));
        }

        let mut seen = HashSet::new();
        for answer in &record.answers {
            if !seen.insert(answer.value) {
                return Err(format!(
                    "question {} has duplicate answer value {}",
                    record.id, answer.value
                ));
            }
        }

        let correct = record.answers.iter().filter(|a| a.correct).count();
        if correct == 0 {
            return Err(format!("question {} has no correct answer", record.id));
        }
        if !record.multiple && correct > 1 {
            return Err(format!(
                "question {} is single-select but marks {} answers correct",
                record.id, correct
            ));
        }

        let image = record
            .img_url
            .filter(|url| !url.trim().is_empty())
            .map(|url| Image {
                url,
                width: record.img_width,
                height: record.img_height,
            });

        Ok(Question {
            id: record.id,
            rank: record.rank,
            prompt: record.question,
            image,
            multiple: record.multiple,
            favorite: record.favorite,
            explanation: record.explanation,
            answers: record
                .answers
                .into_iter()
                .map(|a| Answer {
                    value: a.value,
                    title: a.title,
                    correct: a.correct,
                })
                .collect(),
        })
    }
}
