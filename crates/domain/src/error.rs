//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GpioHubError`]
//! via `#[from]`.

/// Top-level error for every fallible gpiohub operation.
#[derive(Debug, thiserror::Error)]
pub enum GpioHubError {
    /// Input did not satisfy a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The backing registry failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a device creation request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent or blank.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: GpioHubError = ValidationError::MissingField("gpio").into();
        assert!(matches!(
            err,
            GpioHubError::Validation(ValidationError::MissingField("gpio"))
        ));
    }

    #[test]
    fn should_name_the_missing_field_in_message() {
        let err = ValidationError::MissingField("name");
        assert_eq!(err.to_string(), "missing required field `name`");
    }
}
