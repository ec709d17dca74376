//! Domain layer containing pageview entities and data access contracts.
//!
//! Nothing here depends on HTTP or on a specific upstream client.
//!
//! # Architecture
//!
//! - [`entities`] - Dates, pageview records and aggregates
//! - [`repositories`] - The upstream data source trait
//!
//! # Request Flow
//!
//! 1. An HTTP handler validates query parameters into [`entities::DateKey`] values
//! 2. [`crate::application::services::PageviewService`] walks the day range
//! 3. Each day is fetched via [`repositories::PageviewRepository`]
//! 4. Records are folded into an [`entities::ViewAggregate`] and reduced per endpoint

pub mod entities;
pub mod repositories;
