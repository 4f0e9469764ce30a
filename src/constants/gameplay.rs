//! Core gameplay constants (player stats, registry sizing).

/// Player's starting and maximum health (two points per heart)
pub const PLAYER_STARTING_HEALTH: i32 = 6;
/// Player walking speed (world units per second)
pub const PLAYER_SPEED: f32 = 60.0;
/// Distance from the player at which a slice appears
pub const SLICE_REACH: f32 = 16.0;

/// Number of actor slots in the registry
pub const ACTOR_CAPACITY: usize = 64;

/// Seconds between autopilot slices
pub const AUTOPILOT_SLICE_COOLDOWN: f32 = 0.3;
/// Autopilot slices an enemy once it is this close
pub const AUTOPILOT_STRIKE_RANGE: f32 = 24.0;
