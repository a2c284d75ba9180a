//! Canonical JSON error envelopes for API responses

pub mod envelope;
pub mod options;

pub use envelope::{ErrorEnvelope, FieldErrors, InternalServerError};
pub use options::{BoxError, ErrorOption};
