//! Room and dungeon layout constants.
//!
//! All rooms share one fixed layout inside the 320x180 render target.
//! Positions are actor anchors (collision centres).

/// Render target width
pub const SCREEN_WIDTH: f32 = 320.0;
/// Render target height
pub const SCREEN_HEIGHT: f32 = 180.0;

/// Dungeon grid width in rooms
pub const DUNGEON_WIDTH: usize = 5;
/// Dungeon grid height in rooms
pub const DUNGEON_HEIGHT: usize = 5;
/// Grid cell of the starting room (column, row)
pub const START_ROOM: (usize, usize) = (2, 2);

/// Interior playable rectangle (min corner)
pub const ROOM_INTERIOR_MIN: (f32, f32) = (24.0, 72.0);
/// Interior playable rectangle (max corner)
pub const ROOM_INTERIOR_MAX: (f32, f32) = (296.0, 144.0);

/// Door hitboxes as (min_x, min_y, max_x, max_y), one wall tile each
pub const NORTH_DOOR_HITBOX: (f32, f32, f32, f32) = (152.0, 48.0, 168.0, 72.0);
pub const SOUTH_DOOR_HITBOX: (f32, f32, f32, f32) = (152.0, 144.0, 168.0, 168.0);
pub const WEST_DOOR_HITBOX: (f32, f32, f32, f32) = (8.0, 96.0, 24.0, 120.0);
pub const EAST_DOOR_HITBOX: (f32, f32, f32, f32) = (296.0, 96.0, 312.0, 120.0);

/// Distance inside the interior edge where an entering player is placed
pub const ENTRY_OFFSET: f32 = 12.0;

/// Fixed monster spawn points; a room with n monsters uses the first n
pub const MONSTER_SPAWN_POINTS: [(f32, f32); 4] = [
    (80.0, 90.0),
    (240.0, 126.0),
    (240.0, 90.0),
    (80.0, 126.0),
];
