//! Pure domain logic for the courtside team builder.
//!
//! Nothing in this crate touches the database or HTTP. Every evaluator takes
//! the catalog (or a slice of it) as an explicit argument so callers can hand
//! in the shared, immutable catalog loaded at startup or a synthetic one in
//! tests.

pub mod catalog;
pub mod error;
pub mod recommendation;
pub mod stats;
pub mod synergy;
pub mod team;
pub mod team_validation;
pub mod types;
