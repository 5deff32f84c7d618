//! The static question catalog.
//!
//! Questions ship as a JSON data file embedded into the binary, parsed
//! and validated once at startup. The catalog is read-only afterwards.

use std::collections::HashSet;

use super::errors::{DomainError, DomainResult};
use super::models::{Question, QuestionType};

const BUILTIN_QUESTIONS: &str = include_str!("../../data/onboarding_questions.json");

/// An ordered, validated list of questions.
///
/// Construction guarantees the invariants the rest of the application
/// relies on: at least one question, unique ids, options present for
/// choice questions, and positive selection limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Loads the catalog shipped with the application.
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let questions: Vec<Question> =
            serde_json::from_str(raw).map_err(|e| DomainError::CatalogParse(e.to_string()))?;
        Self::new(questions)
    }

    pub fn new(questions: Vec<Question>) -> DomainResult<Self> {
        if questions.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(DomainError::DuplicateQuestionId(question.id.clone()));
            }
            if matches!(question.kind, QuestionType::Single | QuestionType::Multi)
                && question.options.is_empty()
            {
                return Err(DomainError::MissingOptions(question.id.clone()));
            }
            if question.max_selections == Some(0) {
                return Err(DomainError::InvalidSelectionLimit(question.id.clone()));
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Index of the final question. The catalog is never empty, so this
    /// cannot underflow.
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;

    fn question(id: &str, kind: QuestionType, options: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            section: Section::Relationship,
            prompt: format!("Question {}", id),
            kind,
            options: options.iter().map(|o| o.to_string()).collect(),
            required: true,
            placeholder: None,
            max_selections: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 1);
        assert_eq!(catalog.last_index(), catalog.len() - 1);

        // Every choice question ships with options.
        for q in catalog.questions() {
            if matches!(q.kind, QuestionType::Single | QuestionType::Multi) {
                assert!(!q.options.is_empty(), "question {} has no options", q.id);
            }
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(DomainError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            question("q1", QuestionType::Single, &["A"]),
            question("q1", QuestionType::Text, &[]),
        ]);
        assert_eq!(
            result,
            Err(DomainError::DuplicateQuestionId("q1".to_string()))
        );
    }

    #[test]
    fn test_choice_question_without_options_rejected() {
        let result = Catalog::new(vec![question("q1", QuestionType::Multi, &[])]);
        assert_eq!(result, Err(DomainError::MissingOptions("q1".to_string())));
    }

    #[test]
    fn test_zero_selection_limit_rejected() {
        let mut q = question("q1", QuestionType::Multi, &["A", "B"]);
        q.max_selections = Some(0);
        let result = Catalog::new(vec![q]);
        assert_eq!(
            result,
            Err(DomainError::InvalidSelectionLimit("q1".to_string()))
        );
    }

    #[test]
    fn test_text_question_without_options_allowed() {
        let catalog = Catalog::new(vec![question("q1", QuestionType::Text, &[])]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().id, "q1");
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Catalog::from_json("not json");
        assert!(matches!(result, Err(DomainError::CatalogParse(_))));
    }
}
