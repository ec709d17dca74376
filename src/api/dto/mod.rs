//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization and validator for query checks.

pub mod health;
pub mod pageviews;
