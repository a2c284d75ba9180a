use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::decode::decode_json;
use crate::errors::{ErrorOption, FieldErrors};
use crate::respond::{no_content, respond_json, respond_json_error};

/// Demo resource used by the example routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
}

pub async fn get_profile() -> Response {
    respond_json(
        StatusCode::OK,
        Profile {
            name: "Example Name".to_string(),
        },
    )
}

pub async fn create_profile(uri: Uri, request: Request) -> Response {
    let profile: Profile = match decode_json(request).await {
        Ok(profile) => profile,
        Err(err) => {
            warn!(path = %uri, status = %err.status, "Rejected request body: {}", err);
            return respond_json_error(&uri, err.status, err.options());
        }
    };

    if profile.name.trim().is_empty() {
        let mut field_errors = FieldErrors::new();
        field_errors.insert("name".to_string(), vec!["name is required".to_string()]);
        return respond_json_error(
            &uri,
            StatusCode::BAD_REQUEST,
            [
                ErrorOption::with_code(400),
                ErrorOption::with_message("Invalid Request"),
                ErrorOption::with_field_errors(field_errors),
            ],
        );
    }

    respond_json(StatusCode::OK, profile)
}

pub async fn delete_profile() -> Response {
    no_content()
}

/// Fallback for unknown routes, answered with an error envelope.
pub async fn not_found(uri: Uri) -> Response {
    respond_json_error(
        &uri,
        StatusCode::NOT_FOUND,
        [
            ErrorOption::with_code(404),
            ErrorOption::with_message("resource not found"),
        ],
    )
}
