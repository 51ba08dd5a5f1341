use thiserror::Error;

/// The only message a user ever sees for a failed sign-in.
pub const SIGN_IN_FAILED: &str = "Failed to sign in. Please try again.";

#[derive(Debug, Error)]
pub enum SignInError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("CSRF token unavailable: {0}")]
    Csrf(String),

    #[error("Sign-in rejected: {0}")]
    Rejected(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SignInError {
    /// Every failure collapses into one retryable, user-facing message.
    pub fn user_message(&self) -> &'static str {
        SIGN_IN_FAILED
    }
}

pub type SignInResult<T> = Result<T, SignInError>;
