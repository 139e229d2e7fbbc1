use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("auth provider failed: {0}")]
    Provider(String),
}
