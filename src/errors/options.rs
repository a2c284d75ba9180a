use super::envelope::FieldErrors;

/// Boxed error type accepted as an envelope cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One caller-supplied input to the envelope builder.
///
/// The builder folds an ordered sequence of these, keeping the first option
/// seen per category and ignoring everything past the fourth position.
#[derive(Debug)]
pub enum ErrorOption {
    /// Application-specific error code
    Code(u32),
    /// User-facing status message
    Message(String),
    /// Underlying error, kept for diagnostics only
    Cause(BoxError),
    /// Per-field validation errors
    FieldErrors(FieldErrors),
}

impl ErrorOption {
    pub fn with_code(code: u32) -> Self {
        Self::Code(code)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn with_cause<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Cause(Box::new(cause))
    }

    pub fn with_field_errors(errors: FieldErrors) -> Self {
        Self::FieldErrors(errors)
    }
}
