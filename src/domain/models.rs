use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// How a question is answered, which also selects the input view used
/// to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multi,
    Scale,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Relationship,
    LoveLanguage,
    Budget,
    Additional,
}

impl Section {
    /// Human-readable heading shown above the question.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Relationship => "Relationship & Personality",
            Section::LoveLanguage => "Love Language",
            Section::Budget => "Monthly Budget",
            Section::Additional => "Additional Information",
        }
    }
}

/// A single questionnaire entry. Loaded once from static data and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub section: Section,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub max_selections: Option<usize>,
}

/// A recorded answer, tagged by shape rather than by question so the
/// stored JSON stays a plain string, string list, or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Selections(Vec<String>),
    Scale(u32),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Answer::Selections(values) => Some(values),
            _ => None,
        }
    }
}

/// Answers keyed by question id.
pub type AnswerMap = BTreeMap<String, Answer>;

/// In-memory record of onboarding progress: where the user is, what they
/// have answered, and whether the flow has been completed and saved.
///
/// The index is clamped on both ends; completion is never reached by
/// running the index past the last question.
///
/// # Examples
///
/// ```
/// use hint::domain::Session;
///
/// let mut session = Session::default();
/// session.previous_question();
/// assert_eq!(session.current_index, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub current_index: usize,
    pub answers: AnswerMap,
    pub completed: bool,
}

impl Session {
    /// Inserts or overwrites the answer for a question. No validation
    /// happens here; gating is the caller's concern.
    pub fn update_answer(&mut self, question_id: &str, answer: Answer) {
        self.answers.insert(question_id.to_string(), answer);
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Advances to the next question, clamped at the last index.
    pub fn next_question(&mut self, question_count: usize) {
        if self.current_index + 1 < question_count {
            self.current_index += 1;
        }
    }

    /// Steps back one question, clamped at zero.
    pub fn previous_question(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Returns the session to its initial state. Durable storage is
    /// cleared by the caller before invoking this.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}
