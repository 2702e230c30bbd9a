//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database columns
//! - A conversion into the typed `courtside_core` record
//! - `Deserialize` create/update DTOs where the table is writable over HTTP

pub mod character;
pub mod item;
pub mod synergy;
pub mod team;
