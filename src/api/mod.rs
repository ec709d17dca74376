//! REST API layer for HTTP request/response handling.
//!
//! Translates query strings into service calls and formats JSON responses.
//!
//! # Modules
//!
//! - [`dto`] - Query and response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
