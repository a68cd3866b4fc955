use thiserror::Error;

/// Application-level error type.
/// Scorers return `Result<T, AppError>` only where input can be rejected;
/// `main` converts everything into `anyhow::Error` at the boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Stable machine-readable code, mirrored into structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = AppError::Validation("satisfaction_level out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: satisfaction_level out of range"
        );
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_serde_error_converts() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: AppError = serde_err.into();
        assert_eq!(err.code(), "SERIALIZATION_ERROR");
    }
}
