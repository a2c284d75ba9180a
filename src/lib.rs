//! Helpers that standardize JSON error responses and JSON body decoding
//! for axum request handlers.
//!
//! A handler that hits a failure passes loose inputs (code, message, cause,
//! field errors) to [`errors::ErrorEnvelope::from_options`]; the resulting
//! envelope is written out by [`respond::respond_json_error`] as one
//! consistent wire-format error document. [`decode::decode_json`] covers the
//! inbound side, turning malformed request bodies into errors the same
//! builder understands.

pub mod api;
pub mod config;
pub mod decode;
pub mod errors;
pub mod respond;

pub use decode::{decode_json, MalformedRequest};
pub use errors::{ErrorEnvelope, ErrorOption, FieldErrors, InternalServerError};
pub use respond::{no_content, respond_json, respond_json_error};
