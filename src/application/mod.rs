//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by walking day ranges over the
//! repository traits and reducing the results. HTTP handlers and the CLI
//! both go through this layer.
//!
//! # Available Services
//!
//! - [`services::pageview_service::PageviewService`] - Range aggregation and per-endpoint reductions

pub mod services;
