//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::upstream`. Mock implementations are generated via
//! `mockall` for testing.

pub mod pageview_repository;

pub use pageview_repository::PageviewRepository;

#[cfg(test)]
pub use pageview_repository::MockPageviewRepository;
