//! Game engine - owns all game state and provides a clean API to the application shell.
//!
//! The engine handles:
//! - Game state (registry, dungeon, tuning, rng)
//! - The per-frame simulation step
//! - Room transitions and containment
//!
//! The application shell only handles:
//! - Producing a `FrameInput` each frame
//! - Reacting to the `FrameReport` (sound, HUD, logging)
//! - Rendering what `systems::collect_renderables` returns

mod autopilot;
mod game_state;
pub mod room_transition;
mod simulation;

pub use autopilot::Autopilot;
pub use game_state::GameState;
pub use room_transition::Boundary;
pub use simulation::{step_frame, FrameReport};
