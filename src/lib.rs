//! Simulation core of a top-down dungeon crawler.
//!
//! Owns the actor registry, the per-frame update pipeline and the lazily
//! generated room grid. Drawing, key polling and audio live outside; they
//! talk to the core through `FrameInput`, `FrameReport` and the render
//! snapshot in `systems::rendering`.

pub mod components;
pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod engine;
pub mod events;
pub mod frames;
pub mod input;
pub mod registry;
pub mod spawning;
pub mod systems;
