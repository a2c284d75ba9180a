//! Request-body decoding with structured malformed-request errors.

use axum::{
    body::to_bytes,
    extract::Request,
    http::{header, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::errors::ErrorOption;

/// Upper bound on accepted request bodies.
const MAX_BODY_BYTES: usize = 1_048_576;

/// Structured decode failure, suitable for direct use as builder inputs.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct MalformedRequest {
    pub status: StatusCode,
    pub message: String,
}

impl MalformedRequest {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Envelope-builder options carrying this failure's code and message.
    pub fn options(&self) -> Vec<ErrorOption> {
        vec![
            ErrorOption::with_code(u32::from(self.status.as_u16())),
            ErrorOption::with_message(self.message.clone()),
        ]
    }
}

/// Parse the request body as JSON into `T`.
///
/// Enforces an `application/json` content type when the header is present
/// and caps the body at 1 MiB. Malformed input is reported as a
/// [`MalformedRequest`] with a status and message ready for the envelope
/// builder.
pub async fn decode_json<T: DeserializeOwned>(request: Request) -> Result<T, MalformedRequest> {
    if let Some(content_type) = request.headers().get(header::CONTENT_TYPE) {
        let is_json = content_type
            .to_str()
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Err(MalformedRequest::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Content-Type header is not application/json",
            ));
        }
    }

    let body = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| {
            MalformedRequest::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Request body must not be larger than {} bytes", MAX_BODY_BYTES),
            )
        })?;

    if body.is_empty() {
        return Err(MalformedRequest::new(
            StatusCode::BAD_REQUEST,
            "Request body must not be empty",
        ));
    }

    serde_json::from_slice(&body).map_err(|err| classify(&err))
}

fn classify(err: &serde_json::Error) -> MalformedRequest {
    if err.is_eof() {
        MalformedRequest::new(
            StatusCode::BAD_REQUEST,
            "Request body contains badly-formed JSON",
        )
    } else if err.is_syntax() {
        MalformedRequest::new(
            StatusCode::BAD_REQUEST,
            format!(
                "Request body contains badly-formed JSON (at line {} column {})",
                err.line(),
                err.column()
            ),
        )
    } else {
        MalformedRequest::new(
            StatusCode::BAD_REQUEST,
            format!("Request body contains an invalid value: {err}"),
        )
    }
}
