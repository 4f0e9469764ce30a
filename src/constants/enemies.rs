//! Enemy stats and spawning constants.

// SKELETON
/// Skeleton health
pub const SKELETON_HEALTH: i32 = 3;
/// Skeleton pursuit speed (world units per second)
pub const SKELETON_SPEED: f32 = 30.0;

/// Fewest monsters seeded into a freshly generated room
pub const MIN_ROOM_MONSTERS: u32 = 1;
/// Most monsters seeded into a freshly generated room
pub const MAX_ROOM_MONSTERS: u32 = 4;
