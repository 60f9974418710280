use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name and at least one surname must be supplied (got {found} token(s))")]
    InsufficientTokens { found: usize },
}
