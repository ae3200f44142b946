use thiserror::Error;

/// Configuration errors raised while loading or building credentials.
///
/// All of these are fatal: no request is attempted once one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A credential was supplied but is empty.
    #[error("Empty credential: {0}")]
    EmptyCredential(&'static str),
}
