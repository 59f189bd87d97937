use std::path::PathBuf;

/// Errors surfaced by the waitlist page logic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("email address is empty")]
    EmptyEmail,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("counter needs at least one step")]
    InvalidCounter,

    #[error("no FAQ entry at index {index} (page has {len})")]
    UnknownFaqEntry { index: usize, len: usize },

    #[error("failed to load config from {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
