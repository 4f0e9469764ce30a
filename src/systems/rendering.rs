//! Presentation snapshot and HUD data.
//!
//! The simulation never draws. These types are what a renderer reads each
//! frame; nothing here is read back by the core.

use glam::{Vec2, Vec3};

use crate::components::{Actor, Archetype};
use crate::constants::*;
use crate::dungeon_gen::{Direction, Dungeon, RoomIndex};
use crate::frames::{FrameTables, SourceRect};
use crate::registry::{ActorId, ActorRegistry};

/// Actor ready for rendering with all visual state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderActor {
    pub id: ActorId,
    pub archetype: Archetype,
    pub position: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub frame: usize,
    /// Sheet region for `frame`
    pub source: Option<SourceRect>,
    pub tint: Vec3,
    /// Where to draw the shadow, if the actor casts one
    pub shadow: Option<Vec2>,
}

/// Door layout of the room the player is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomView {
    pub index: RoomIndex,
    pub door_north: bool,
    pub door_south: bool,
    pub door_east: bool,
    pub door_west: bool,
    pub doors_opened: bool,
}

impl RoomView {
    pub fn has_door(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.door_north,
            Direction::South => self.door_south,
            Direction::East => self.door_east,
            Direction::West => self.door_west,
        }
    }
}

/// Tint to draw this frame. Invulnerable actors blink between the flash tint
/// and their own.
pub fn display_tint(actor: &Actor) -> Vec3 {
    if !actor.is_invulnerable() {
        return actor.tint;
    }
    let phase = (actor.iframe_time_remaining / IFRAME_FLASH_PERIOD) as u32;
    if phase % 2 == 0 {
        Vec3::from(IFRAME_FLASH_TINT)
    } else {
        actor.tint
    }
}

/// Collect actors that should be drawn, in slot order.
/// Actors awaiting removal are left out.
pub fn collect_renderables(registry: &ActorRegistry, frames: &FrameTables) -> Vec<RenderActor> {
    puffin::profile_function!();

    registry
        .iter()
        .filter(|(_, actor)| !actor.should_be_freed)
        .map(|(id, actor)| RenderActor {
            id,
            archetype: actor.archetype,
            position: actor.position,
            origin: actor.origin,
            rotation: actor.rotation,
            frame: actor.animation.current_frame,
            source: frames.get(actor.archetype).frame(actor.animation.current_frame).copied(),
            tint: display_tint(actor),
            shadow: actor.has_shadow.then(|| actor.position + actor.shadow_offset),
        })
        .collect()
}

/// Snapshot of the current room, or `None` if it was never generated
pub fn room_view(dungeon: &Dungeon) -> Option<RoomView> {
    let room = dungeon.current()?;
    Some(RoomView {
        index: dungeon.current_room,
        door_north: room.door_north,
        door_south: room.door_south,
        door_east: room.door_east,
        door_west: room.door_west,
        doors_opened: room.doors_opened,
    })
}

/// Heart row for the health HUD: each heart is two hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRow {
    pub full: u32,
    pub half: u32,
    pub empty: u32,
}

impl HeartRow {
    pub fn from_health(hp: i32, hp_max: i32) -> Self {
        let hp = hp.max(0) as u32;
        let hearts = hp_max.max(0) as u32 / 2;
        let full = hp / 2;
        let half = hp % 2;
        Self {
            full,
            half,
            empty: hearts.saturating_sub(full + half),
        }
    }

    pub fn total(&self) -> u32 {
        self.full + self.half + self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DUNGEON_HEIGHT, DUNGEON_WIDTH};

    #[test]
    fn test_heart_row() {
        assert_eq!(HeartRow::from_health(6, 6), HeartRow { full: 3, half: 0, empty: 0 });
        assert_eq!(HeartRow::from_health(3, 6), HeartRow { full: 1, half: 1, empty: 1 });
        assert_eq!(HeartRow::from_health(0, 6), HeartRow { full: 0, half: 0, empty: 3 });
        assert_eq!(HeartRow::from_health(-2, 6).total(), 3);
    }

    #[test]
    fn test_flash_alternates_while_invulnerable() {
        let mut actor = Actor::new(Archetype::Player, Vec2::ZERO);
        assert_eq!(display_tint(&actor), Vec3::ONE);

        actor.iframe_time_remaining = 0.05;
        assert_eq!(display_tint(&actor), Vec3::from(IFRAME_FLASH_TINT));

        actor.iframe_time_remaining = 0.1;
        assert_eq!(display_tint(&actor), Vec3::ONE);
    }

    #[test]
    fn test_flagged_actors_are_not_drawn() {
        let frames = FrameTables::builtin();
        let mut registry = ActorRegistry::with_capacity(4);
        let mut shadowed = Actor::new(Archetype::Skeleton, Vec2::new(40.0, 80.0));
        shadowed.has_shadow = true;
        shadowed.shadow_offset = Vec2::new(0.0, SHADOW_OFFSET_Y);
        let kept = registry.spawn(shadowed).unwrap();
        let mut gone = Actor::new(Archetype::Slice, Vec2::ZERO);
        gone.should_be_freed = true;
        registry.spawn(gone).unwrap();

        let drawn = collect_renderables(&registry, &frames);

        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].id, kept);
        assert_eq!(drawn[0].shadow, Some(Vec2::new(40.0, 80.0 + SHADOW_OFFSET_Y)));
        assert!(drawn[0].source.is_some());
    }

    #[test]
    fn test_room_view_of_start_room() {
        let dungeon = Dungeon::new(DUNGEON_WIDTH, DUNGEON_HEIGHT, RoomIndex::new(2, 2));
        let view = room_view(&dungeon).unwrap();
        assert!(view.has_door(Direction::North));
        assert!(view.has_door(Direction::West));
        assert!(!view.has_door(Direction::South));
        assert!(view.doors_opened);
    }
}
