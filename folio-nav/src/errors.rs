use thiserror::Error;

/// Errors raised at the navigation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A panel key did not match any known panel.
    #[error("unknown panel key: {key:?}")]
    UnknownPanel { key: String },
}
