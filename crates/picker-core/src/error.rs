use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Selection is read-only: it mirrors an externally owned list")]
    ReadOnlySelection,
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),
    #[error("Duplicate group id: {0}")]
    DuplicateGroup(String),
    #[error("Group id `{0}` is reserved for the default group")]
    ReservedGroupId(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
