//! Simulation constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Runtime-tunable values are mirrored in `SimConfig`; these are its defaults.

mod animation;
mod combat;
mod dungeon;
mod enemies;
mod gameplay;

pub use animation::*;
pub use combat::*;
pub use dungeon::*;
pub use enemies::*;
pub use gameplay::*;
