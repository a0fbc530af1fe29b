use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Full-width delimiter between an option's label letter and its text,
/// e.g. `"A、正确"`.
pub const OPTION_DELIMITER: char = '、';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    SingleChoice,
    Judgment,
    ShortAnswer,
}

/// One labeled choice, parsed from the `"A、text"` encoding used by the
/// question bank. Parsing happens once at bank ingest; everything downstream
/// works on the structured fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct ChoiceOption {
    pub label: String,
    pub text: String,
}

impl ChoiceOption {
    pub fn new(label: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            text: text.to_string(),
        }
    }

    /// Splits on the first `、`. A missing delimiter degrades to the whole
    /// string as the label with empty text, which simply fails to match
    /// anything during evaluation.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(OPTION_DELIMITER) {
            Some((label, text)) => Self::new(label, text),
            None => Self::new(raw, ""),
        }
    }

    /// The label letter, trimmed and upper-cased for comparison.
    pub fn letter(&self) -> String {
        self.label.trim().to_uppercase()
    }

    /// Substring check across the whole option, used for judgment questions
    /// whose canonical answer is the word itself.
    pub fn contains(&self, needle: &str) -> bool {
        self.label.contains(needle) || self.text.contains(needle)
    }
}

impl From<String> for ChoiceOption {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}{}{}", self.label, OPTION_DELIMITER, self.text)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub correct_answer: String,
    pub category: String,
    #[serde(default)]
    pub mnemonic: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// The durable progress ledger. Field names match the JSON blob written by
/// earlier versions of the app, so stored progress stays readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProgress {
    pub answered: HashMap<String, bool>,
    pub correct: HashMap<String, bool>,
    #[serde(rename = "wrongIds")]
    pub wrong_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Home,
    PracticeAll,
    PracticeChoice,
    PracticeJudgment,
    ReviewErrors,
    Flashcards,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Home,
    Quiz,
    QuizQuitConfirm,
    Flashcards,
    Summary,
}
