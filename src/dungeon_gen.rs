use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Axis-aligned rectangle in world units (inclusive bounds)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_tuple((min_x, min_y, max_x, max_y): (f32, f32, f32, f32)) -> Self {
        Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Closest point inside the rectangle
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// The interior rectangle every room shares
pub fn room_interior() -> Rect {
    Rect::new(Vec2::from(ROOM_INTERIOR_MIN), Vec2::from(ROOM_INTERIOR_MAX))
}

/// Compass direction of a door or a room transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Order in which the extra forced door of a new room is tried
    pub const FORCED_DOOR_PRIORITY: [Direction; 4] =
        [Direction::West, Direction::East, Direction::South, Direction::North];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Grid step (column, row); north is one row up
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Wall tile the player must reach to walk through this door
    pub fn door_hitbox(&self) -> Rect {
        Rect::from_tuple(match self {
            Direction::North => NORTH_DOOR_HITBOX,
            Direction::South => SOUTH_DOOR_HITBOX,
            Direction::East => EAST_DOOR_HITBOX,
            Direction::West => WEST_DOOR_HITBOX,
        })
    }

    /// Where a player arrives after walking through this door: just inside
    /// the opposite wall of the next room.
    pub fn entry_position(&self) -> Vec2 {
        let interior = room_interior();
        let center = interior.center();
        match self {
            Direction::North => Vec2::new(center.x, interior.max.y - ENTRY_OFFSET),
            Direction::South => Vec2::new(center.x, interior.min.y + ENTRY_OFFSET),
            Direction::East => Vec2::new(interior.min.x + ENTRY_OFFSET, center.y),
            Direction::West => Vec2::new(interior.max.x - ENTRY_OFFSET, center.y),
        }
    }
}

/// Grid cell of a room (column, row)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomIndex {
    pub x: usize,
    pub y: usize,
}

impl RoomIndex {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One cell of the dungeon: its doors and its monster gate
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Room {
    pub door_north: bool,
    pub door_south: bool,
    pub door_east: bool,
    pub door_west: bool,
    /// Monsters still alive that belong to this room
    pub remaining_monsters: u32,
    /// Set once, when the last monster dies
    pub doors_opened: bool,
}

impl Room {
    pub fn has_door(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.door_north,
            Direction::South => self.door_south,
            Direction::East => self.door_east,
            Direction::West => self.door_west,
        }
    }

    pub fn set_door(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.door_north = true,
            Direction::South => self.door_south = true,
            Direction::East => self.door_east = true,
            Direction::West => self.door_west = true,
        }
    }

    pub fn door_count(&self) -> usize {
        Direction::ALL.iter().filter(|d| self.has_door(**d)).count()
    }

    /// Count one monster death. Returns true only on the death that opens
    /// the doors; never goes below zero and never re-opens.
    pub fn record_monster_death(&mut self) -> bool {
        if self.remaining_monsters == 0 {
            return false;
        }
        self.remaining_monsters -= 1;
        if self.remaining_monsters == 0 && !self.doors_opened {
            self.doors_opened = true;
            return true;
        }
        false
    }
}

/// Fixed grid of lazily generated rooms
pub struct Dungeon {
    width: usize,
    height: usize,
    rooms: Vec<Option<Room>>,
    pub current_room: RoomIndex,
}

impl Dungeon {
    /// Create a dungeon whose starting room is already generated, open and
    /// empty, with doors north and west where the grid allows.
    pub fn new(width: usize, height: usize, start: RoomIndex) -> Self {
        let mut dungeon = Self {
            width,
            height,
            rooms: vec![None; width * height],
            current_room: start,
        };

        let mut room = Room {
            doors_opened: true,
            ..Room::default()
        };
        for direction in [Direction::North, Direction::West] {
            if dungeon.neighbor(start, direction).is_some() {
                room.set_door(direction);
            }
        }
        dungeon.place(start, room);
        dungeon
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn get_index(&self, index: RoomIndex) -> Option<usize> {
        if index.x >= self.width || index.y >= self.height {
            return None;
        }
        Some(index.y * self.width + index.x)
    }

    /// Adjacent cell in a direction, or `None` past the grid edge
    pub fn neighbor(&self, index: RoomIndex, direction: Direction) -> Option<RoomIndex> {
        let (dx, dy) = direction.offset();
        let x = index.x.checked_add_signed(dx)?;
        let y = index.y.checked_add_signed(dy)?;
        let next = RoomIndex::new(x, y);
        self.get_index(next).map(|_| next)
    }

    pub fn room(&self, index: RoomIndex) -> Option<&Room> {
        self.rooms.get(self.get_index(index)?)?.as_ref()
    }

    pub fn room_mut(&mut self, index: RoomIndex) -> Option<&mut Room> {
        let i = self.get_index(index)?;
        self.rooms.get_mut(i)?.as_mut()
    }

    pub fn is_generated(&self, index: RoomIndex) -> bool {
        self.room(index).is_some()
    }

    pub fn current(&self) -> Option<&Room> {
        self.room(self.current_room)
    }

    pub fn current_mut(&mut self) -> Option<&mut Room> {
        self.room_mut(self.current_room)
    }

    pub fn generated_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_some()).count()
    }

    fn place(&mut self, index: RoomIndex, room: Room) {
        if let Some(i) = self.get_index(index) {
            self.rooms[i] = Some(room);
        }
    }

    /// Generate the room at `index`, entered through its `back` wall.
    ///
    /// The room gets a door back toward the room the player left, plus one
    /// forced door: the first of west, east, south, north that is not the
    /// back door and stays inside the grid. Doors start closed. Returns
    /// `None` if `index` is outside the grid or already generated.
    pub fn generate_room(&mut self, index: RoomIndex, back: Direction, monsters: u32) -> Option<&Room> {
        self.get_index(index)?;
        if self.is_generated(index) {
            return None;
        }

        let mut room = Room {
            remaining_monsters: monsters,
            doors_opened: monsters == 0,
            ..Room::default()
        };

        if self.neighbor(index, back).is_some() {
            room.set_door(back);
        }

        let forced = Direction::FORCED_DOOR_PRIORITY
            .into_iter()
            .filter(|d| *d != back)
            .find(|d| self.neighbor(index, *d).is_some());
        if let Some(direction) = forced {
            room.set_door(direction);
        }

        self.place(index, room);
        self.room(index)
    }
}

/// Roll how many monsters a new room holds
pub fn roll_monster_count(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}
