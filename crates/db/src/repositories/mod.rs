//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Catalog repositories return the
//! typed `courtside_core` records directly.

pub mod character_repo;
pub mod item_repo;
pub mod synergy_repo;
pub mod team_repo;

pub use character_repo::CharacterRepo;
pub use item_repo::ItemRepo;
pub use synergy_repo::SynergyRepo;
pub use team_repo::TeamRepo;
