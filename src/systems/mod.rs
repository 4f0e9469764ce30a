//! Game systems organized by domain.
//!
//! Each submodule is one stage of the frame step:
//! - `player_input`: Input to player velocity and slice spawns
//! - `ai`: Behavior steering
//! - `animation`: Animation timers, iframes and motion integration
//! - `combat`: Pairwise collision, damage and knockback
//! - `lifecycle`: Removal of flagged actors and room-clear gating
//! - `rendering`: Snapshot handed to the renderer

pub mod ai;
pub mod animation;
pub mod combat;
pub mod lifecycle;
pub mod player_input;
pub mod rendering;

// Re-export commonly used items
pub use ai::run_behaviors;
pub use animation::{update_actor, update_actors};
pub use combat::{overlaps, resolve_collisions};
pub use lifecycle::sweep;
pub use player_input::apply_player_input;
pub use rendering::{collect_renderables, room_view, HeartRow, RenderActor, RoomView};
