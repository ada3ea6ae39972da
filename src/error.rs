//! Error types for smoke runs.

/// Result type for smoke runs.
pub type Result<T> = std::result::Result<T, SmokeError>;

/// Failure text used when an assertion carries no message.
pub const DEFAULT_ASSERTION_MESSAGE: &str = "Assertion failed";

/// Errors that abort a smoke run.
///
/// Every variant is fatal: the runner stops at the first one and reports
/// its display text verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    #[error("{0}")]
    Assertion(String),

    #[error(transparent)]
    ModuleLoad(#[from] ModuleLoadError),

    #[error("Console write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Build an assertion failure, falling back to the default text.
    pub fn assertion(message: Option<&str>) -> Self {
        SmokeError::Assertion(message.unwrap_or(DEFAULT_ASSERTION_MESSAGE).to_string())
    }
}

/// Errors that can occur while loading a named module.
#[derive(Debug, thiserror::Error)]
pub enum ModuleLoadError {
    #[error("Cannot find module '{0}'")]
    NotFound(String),

    #[error("Module '{module}' failed to initialize: {message}")]
    Init { module: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_uses_message_verbatim() {
        let err = SmokeError::assertion(Some("Math works"));
        assert_eq!(err.to_string(), "Math works");
    }

    #[test]
    fn test_assertion_defaults_message() {
        let err = SmokeError::assertion(None);
        assert_eq!(err.to_string(), DEFAULT_ASSERTION_MESSAGE);
    }

    #[test]
    fn test_module_load_error_is_transparent() {
        let err: SmokeError = ModuleLoadError::NotFound("server".to_string()).into();
        assert_eq!(err.to_string(), "Cannot find module 'server'");
        assert!(matches!(err, SmokeError::ModuleLoad(_)));
    }
}
