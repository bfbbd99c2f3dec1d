use crate::location::LocationId;

/// Alias for `Result<T, WmError>`.
pub type WmResult<T> = Result<T, WmError>;

/// Errors that can occur when assembling a world graph.
#[derive(Debug, thiserror::Error)]
pub enum WmError {
    /// A location was added with an empty identifier.
    #[error("location identifier must not be empty")]
    EmptyId,

    /// A location with the same identifier already exists in the graph.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(LocationId),

    /// A JSON snapshot could not be read or written.
    #[error("invalid world snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
