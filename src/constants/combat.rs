//! Collision and combat constants.

/// Width of one tile in world units
pub const TILE_WIDTH: f32 = 16.0;
/// Height of one tile in world units
pub const TILE_HEIGHT: f32 = 24.0;
/// Every actor collides as a circle of this radius
pub const COLLISION_RADIUS: f32 = TILE_WIDTH / 2.0;
/// Speed added along the hit direction when an actor is struck
pub const KNOCKBACK_SPEED: f32 = 120.0;
/// Seconds of collision immunity granted after a non-lethal hit
pub const IFRAME_DURATION: f32 = 0.4;
/// Damage dealt by a player slice
pub const SLICE_DAMAGE: i32 = 1;
/// Contact damage dealt by enemies
pub const ENEMY_CONTACT_DAMAGE: i32 = 1;
