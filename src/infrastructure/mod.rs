//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`upstream`] - Wikimedia pageviews client and in-memory fixtures

pub mod upstream;
