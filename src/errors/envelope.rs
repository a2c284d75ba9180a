use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::options::{BoxError, ErrorOption};

/// Per-field validation errors: field name to ordered error messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Fallback message used when no cause and no message are available.
const GENERIC_MESSAGE: &str = "Oops! Something went wrong";

/// Sentinel default cause used when the caller supplies no error of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("internal server error")]
pub struct InternalServerError;

/// Canonical error record rendered as the JSON error body.
///
/// Constructed fresh per failed request, either from a loose option sequence
/// ([`ErrorEnvelope::from_options`]) or with all fields known up front
/// ([`ErrorEnvelope::new`]). The serialized shape carries `code`, `message`,
/// `errors`, `timestamp` and `path`; `cause` and `http_status` are internal.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Low-level runtime error, diagnostic only
    #[serde(skip)]
    pub cause: Option<BoxError>,
    /// HTTP response status code
    #[serde(skip)]
    pub http_status: u16,
    /// Application-specific error code
    pub code: u32,
    /// User-level status message
    pub message: String,
    /// Form input field errors
    pub errors: FieldErrors,
    pub timestamp: DateTime<Utc>,
    pub path: String,
}

impl ErrorEnvelope {
    /// Build an envelope from a loose, ordered option sequence.
    ///
    /// At most the first four options are considered; within those, the first
    /// option per category wins and later duplicates are silently ignored.
    /// An empty sequence produces the sentinel internal-server-error envelope.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ErrorOption>,
    {
        let mut code: Option<u32> = None;
        let mut message: Option<String> = None;
        let mut cause: Option<BoxError> = None;
        let mut errors: Option<FieldErrors> = None;

        for option in options.into_iter().take(4) {
            match option {
                ErrorOption::Code(c) => {
                    if code.is_none() {
                        code = Some(c);
                    }
                }
                ErrorOption::Message(m) => {
                    if message.is_none() {
                        message = Some(m);
                    }
                }
                ErrorOption::Cause(e) => {
                    if cause.is_none() {
                        cause = Some(e);
                    }
                }
                ErrorOption::FieldErrors(f) => {
                    if errors.is_none() {
                        errors = Some(f);
                    }
                }
            }
        }

        let code = match code {
            Some(c) if c != 0 => c,
            _ => 500,
        };
        let cause = cause.unwrap_or_else(|| Box::new(InternalServerError));
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => {
                if cause.downcast_ref::<InternalServerError>().is_some() {
                    GENERIC_MESSAGE.to_string()
                } else {
                    cause.to_string()
                }
            }
        };

        Self {
            cause: Some(cause),
            http_status: 0,
            code,
            message,
            errors: errors.unwrap_or_default(),
            timestamp: Utc::now(),
            path: String::new(),
        }
    }

    /// Build an envelope with every field known up front.
    ///
    /// `http_status` outside [400, 599] is coerced to 500; no other
    /// defaulting happens here (it is applied by [`ErrorEnvelope::render`]).
    pub fn new(
        http_status: u16,
        cause: Option<BoxError>,
        code: u32,
        message: impl Into<String>,
        errors: Option<FieldErrors>,
        path: impl Into<String>,
    ) -> Self {
        let http_status = if (400..600).contains(&http_status) {
            http_status
        } else {
            500
        };
        Self {
            cause,
            http_status,
            code,
            message: message.into(),
            errors: errors.unwrap_or_default(),
            timestamp: Utc::now(),
            path: path.into(),
        }
    }

    fn resolved_code(&self) -> u32 {
        if self.code != 0 {
            self.code
        } else if self.http_status != 0 {
            u32::from(self.http_status)
        } else {
            500
        }
    }

    fn resolved_message(&self) -> String {
        if !self.message.is_empty() {
            return self.message.clone();
        }
        match &self.cause {
            Some(cause) if cause.downcast_ref::<InternalServerError>().is_none() => {
                cause.to_string()
            }
            _ => GENERIC_MESSAGE.to_string(),
        }
    }

    /// Render the envelope as the wire-format JSON error document.
    ///
    /// Produces exactly the keys `code`, `message`, `errors` and `path`, with
    /// defaults resolved regardless of how the envelope was constructed. Note
    /// that `timestamp` is deliberately absent here even though the serde
    /// shape includes it.
    pub fn render(&self) -> Map<String, Value> {
        let mut response = Map::new();
        response.insert("code".to_string(), json!(self.resolved_code()));
        response.insert("message".to_string(), json!(self.resolved_message()));
        response.insert("errors".to_string(), json!(self.errors));
        response.insert("path".to_string(), json!(self.path));
        response
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.resolved_code(), self.resolved_message())
    }
}

impl std::error::Error for ErrorEnvelope {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
