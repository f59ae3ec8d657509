#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    TaskNotFound(u64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::TaskNotFound(id) => {
                write!(f, "No task with id {}", id)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
