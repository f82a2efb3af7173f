use thiserror::Error;

/// Errors emitted while reading or validating the profile file.
#[derive(Debug, Error)]
pub(crate) enum ProfileError {
    /// Filesystem operation failed.
    #[error("profile IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("profile JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
