pub mod character;
pub mod item;
pub mod recommendation;
pub mod synergy;
pub mod team;
