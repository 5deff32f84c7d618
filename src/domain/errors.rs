#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    CatalogParse(String),
    EmptyCatalog,
    DuplicateQuestionId(String),
    MissingOptions(String),
    InvalidSelectionLimit(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::CatalogParse(msg) => {
                write!(f, "Invalid question data: {}", msg)
            }
            DomainError::EmptyCatalog => {
                write!(f, "Question catalog is empty")
            }
            DomainError::DuplicateQuestionId(id) => {
                write!(f, "Duplicate question id: {}", id)
            }
            DomainError::MissingOptions(id) => {
                write!(f, "Question has no options: {}", id)
            }
            DomainError::InvalidSelectionLimit(id) => {
                write!(f, "Selection limit must be positive: {}", id)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
