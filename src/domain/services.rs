//! Navigation gating and selection rules for the questionnaire.

use super::models::{Answer, Question, QuestionType};

/// Decides whether forward navigation is permitted from a question.
///
/// Pure function of the question and its current answer. Non-required
/// questions always pass. Required text needs non-blank content,
/// required multi-choice needs at least one selection, and required
/// single-choice or scale questions need any recorded answer.
///
/// # Examples
///
/// ```
/// use hint::domain::{can_proceed, Answer, Question, QuestionType, Section};
///
/// let question = Question {
///     id: "notes".to_string(),
///     section: Section::Additional,
///     prompt: "Anything else?".to_string(),
///     kind: QuestionType::Text,
///     options: Vec::new(),
///     required: true,
///     placeholder: None,
///     max_selections: None,
/// };
///
/// assert!(!can_proceed(&question, Some(&Answer::Text("   ".to_string()))));
/// assert!(can_proceed(&question, Some(&Answer::Text("ok".to_string()))));
/// ```
pub fn can_proceed(question: &Question, answer: Option<&Answer>) -> bool {
    if !question.required {
        return true;
    }

    match question.kind {
        QuestionType::Text => {
            matches!(answer, Some(Answer::Text(value)) if !value.trim().is_empty())
        }
        QuestionType::Multi => {
            matches!(answer, Some(Answer::Selections(values)) if !values.is_empty())
        }
        QuestionType::Single | QuestionType::Scale => answer.is_some(),
    }
}

/// Toggles an option within a multi-choice selection.
///
/// Selecting an already-selected option removes it. Selecting a new
/// option appends it, unless the selection limit is reached, in which
/// case the oldest selection is dropped first so the newest choice
/// always lands.
pub fn toggle_selection(
    current: &[String],
    option: &str,
    max_selections: Option<usize>,
) -> Vec<String> {
    if current.iter().any(|value| value == option) {
        return current
            .iter()
            .filter(|value| value.as_str() != option)
            .cloned()
            .collect();
    }

    let mut updated: Vec<String> = current.to_vec();
    if let Some(limit) = max_selections {
        if updated.len() >= limit && !updated.is_empty() {
            updated.remove(0);
        }
    }
    updated.push(option.to_string());
    updated
}
