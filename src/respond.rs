//! Response helpers: JSON payloads, JSON error envelopes, empty replies.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{ErrorEnvelope, ErrorOption};

/// Serialize `payload` as the JSON response body with the given status.
pub fn respond_json<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// Build an error envelope from `options` and write it as the JSON error
/// response.
///
/// The envelope's path is taken from the inbound request URI and its HTTP
/// status from `status`, overriding anything inferred during the build.
pub fn respond_json_error<I>(uri: &Uri, status: StatusCode, options: I) -> Response
where
    I: IntoIterator<Item = ErrorOption>,
{
    let mut envelope = ErrorEnvelope::from_options(options);
    envelope.path = uri.to_string();
    envelope.http_status = status.as_u16();
    respond_json(status, envelope)
}

/// Write an HTTP 204 with an empty body.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
