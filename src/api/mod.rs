//! Example HTTP surface wired through the response helpers

pub mod handlers;
pub mod routes;
