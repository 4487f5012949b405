use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("image id must not be empty")]
    EmptyImageId,
    #[error("image uri must not be empty (id={0})")]
    EmptyUri(String),
    #[error("duplicate image id: {0}")]
    DuplicateImageId(String),
}
