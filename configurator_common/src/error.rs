//! Error types.

use thiserror::Error;

/// Reasons the configure step cannot be shown.
///
/// Guard errors are resolved locally by redirecting; they are never shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// A value the previous wizard step should have stored is absent or empty.
    #[error("session value `{key}` is missing")]
    MissingSessionData { key: String },
}

/// Failure loading a [`WizardConfig`](crate::WizardConfig) override.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configurator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route `{0}` must start with '/'")]
    InvalidRoute(String),
    #[error("default step must be at least 1, got {0}")]
    InvalidDefaultStep(u8),
    #[error("store key for {0} must not be empty")]
    EmptyStoreKey(&'static str),
}
