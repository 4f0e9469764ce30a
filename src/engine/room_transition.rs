//! Room-to-room transitions and wall containment.
//!
//! Runs after motion. A player standing in an open door's hitbox moves to the
//! neighbouring room (generating it on first visit); a player anywhere else
//! outside the interior is pushed back. Every actor ends the step inside the
//! interior rectangle.

use crate::dungeon_gen::{room_interior, roll_monster_count, Direction, RoomIndex};
use crate::events::GameEvent;
use crate::spawning;

use super::game_state::GameState;

/// Outcome of the boundary check for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Player is inside the interior (or absent)
    Inside,
    /// Player walked into a wall or a closed door and was pushed back
    Blocked,
    /// Player walked through a door into another room
    Entered(Direction),
}

/// Check the player against the room walls, then clamp every actor to the
/// interior. `dt` is this frame's step, used to undo blocked motion.
pub fn handle_room_boundary(state: &mut GameState, dt: f32) -> Boundary {
    puffin::profile_function!();

    let boundary = check_player(state, dt);
    contain_actors(state);
    boundary
}

fn check_player(state: &mut GameState, dt: f32) -> Boundary {
    let Some(player_id) = state.player else {
        return Boundary::Inside;
    };
    let Some(player) = state.registry.get(player_id) else {
        return Boundary::Inside;
    };
    let position = player.position;
    if room_interior().contains(position) {
        return Boundary::Inside;
    }

    if let Some(direction) = open_door_at(state, position) {
        enter_room(state, direction);
        return Boundary::Entered(direction);
    }

    if let Some(player) = state.registry.get_mut(player_id) {
        player.position -= player.velocity * dt;
    }
    Boundary::Blocked
}

/// Door of the current room whose hitbox holds `position`, if it can be used
fn open_door_at(state: &GameState, position: glam::Vec2) -> Option<Direction> {
    let room = state.dungeon.current()?;
    if !room.doors_opened {
        return None;
    }
    Direction::ALL.into_iter().find(|d| {
        room.has_door(*d)
            && d.door_hitbox().contains(position)
            && state.dungeon.neighbor(state.dungeon.current_room, *d).is_some()
    })
}

fn enter_room(state: &mut GameState, direction: Direction) {
    let Some(next) = state.dungeon.neighbor(state.dungeon.current_room, direction) else {
        return;
    };
    let back = direction.opposite();

    // Everything but the player stays behind
    for (id, actor) in state.registry.iter_mut() {
        if Some(id) != state.player {
            actor.should_be_freed = true;
        }
    }

    if state.dungeon.is_generated(next) {
        // Rooms generated from another side may lack the door we came through
        if let Some(room) = state.dungeon.room_mut(next) {
            room.set_door(back);
        }
    } else {
        generate_and_populate(state, next, back);
    }

    state.dungeon.current_room = next;
    if let Some(player) = state.player.and_then(|id| state.registry.get_mut(id)) {
        player.position = direction.entry_position();
    }

    tracing::debug!(x = next.x, y = next.y, via = ?direction, "room entered");
    state.events.push(GameEvent::RoomEntered {
        room: next,
        via: direction,
    });
}

/// First visit: lay out the doors and spawn the room's monsters. The monster
/// count is whatever actually fit in the registry.
fn generate_and_populate(state: &mut GameState, index: RoomIndex, back: Direction) {
    let rolled = roll_monster_count(
        &mut state.rng,
        state.config.min_room_monsters,
        state.config.max_room_monsters,
    );
    if state.dungeon.generate_room(index, back, rolled).is_none() {
        return;
    }

    let spawned = spawning::spawn_room_monsters(
        &mut state.registry,
        index,
        rolled,
        &state.config,
        &state.frames,
    );
    let monsters = spawned.len() as u32;
    if let Some(room) = state.dungeon.room_mut(index) {
        room.remaining_monsters = monsters;
        room.doors_opened = monsters == 0;
    }

    tracing::debug!(x = index.x, y = index.y, rolled, monsters, "room generated");
    state.events.push(GameEvent::RoomGenerated {
        room: index,
        monsters,
    });
}

fn contain_actors(state: &mut GameState) {
    let interior = room_interior();
    for (_id, actor) in state.registry.iter_mut() {
        actor.position = interior.clamp(actor.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Actor, Archetype};
    use crate::config::SimConfig;
    use crate::constants::*;
    use crate::frames::FrameTables;
    use glam::Vec2;

    fn seeded_state() -> GameState {
        let config = SimConfig {
            seed: Some(7),
            ..SimConfig::default()
        };
        GameState::new(config, FrameTables::builtin())
    }

    fn move_player(state: &mut GameState, position: Vec2, velocity: Vec2) {
        let player = state.registry.get_mut(state.player.unwrap()).unwrap();
        player.position = position;
        player.velocity = velocity;
    }

    #[test]
    fn test_north_door_enters_room_above() {
        let mut state = seeded_state();
        move_player(&mut state, Direction::North.door_hitbox().center(), Vec2::new(0.0, -60.0));

        let boundary = handle_room_boundary(&mut state, 0.016);

        assert_eq!(boundary, Boundary::Entered(Direction::North));
        assert_eq!(state.dungeon.current_room, RoomIndex::new(2, 1));
        let room = state.dungeon.current().unwrap();
        assert!(room.door_south);
        // West is the first forced-door candidate and is inside the grid
        assert!(room.door_west);
        assert_eq!(room.door_count(), 2);
        assert!(room.remaining_monsters >= MIN_ROOM_MONSTERS);
        assert!(room.remaining_monsters <= MAX_ROOM_MONSTERS);
        assert!(!room.doors_opened);

        let position = state.player_position().unwrap();
        let interior = room_interior();
        assert_eq!(position, Vec2::new(interior.center().x, interior.max.y - ENTRY_OFFSET));

        let monsters = state.registry.iter().filter(|(_, a)| a.ai.is_some()).count();
        assert_eq!(monsters as u32, room.remaining_monsters);
    }

    #[test]
    fn test_transition_flags_everything_but_the_player() {
        let mut state = seeded_state();
        let slice = state.registry.spawn(Actor::new(Archetype::Slice, Vec2::new(100.0, 100.0))).unwrap();
        move_player(&mut state, Direction::West.door_hitbox().center(), Vec2::ZERO);

        handle_room_boundary(&mut state, 0.016);

        assert!(state.registry.get(slice).unwrap().should_be_freed);
        let player = state.registry.get(state.player.unwrap()).unwrap();
        assert!(!player.should_be_freed);
        // New monsters are not flagged
        assert!(state
            .registry
            .iter()
            .filter(|(_, a)| a.ai.is_some())
            .all(|(_, a)| !a.should_be_freed));
    }

    #[test]
    fn test_closed_doors_block_the_player() {
        let mut state = seeded_state();
        move_player(&mut state, Direction::North.door_hitbox().center(), Vec2::ZERO);
        handle_room_boundary(&mut state, 0.016);
        let room = state.dungeon.current_room;

        // Walk back into the south door while the monsters are alive
        let start = Vec2::new(160.0, 143.0);
        let velocity = Vec2::new(0.0, 60.0);
        move_player(&mut state, start + velocity * 0.05, velocity);

        let boundary = handle_room_boundary(&mut state, 0.05);

        assert_eq!(boundary, Boundary::Blocked);
        assert_eq!(state.dungeon.current_room, room);
        assert_eq!(state.player_position().unwrap(), start);
    }

    #[test]
    fn test_wall_without_door_blocks_and_clamps() {
        let mut state = seeded_state();
        // East wall of the start room has no door
        move_player(&mut state, Direction::East.door_hitbox().center(), Vec2::new(500.0, 0.0));

        let boundary = handle_room_boundary(&mut state, 0.05);

        assert_eq!(boundary, Boundary::Blocked);
        assert_eq!(state.dungeon.current_room, RoomIndex::new(2, 2));
        assert!(room_interior().contains(state.player_position().unwrap()));
    }

    #[test]
    fn test_other_actors_are_clamped_to_interior() {
        let mut state = seeded_state();
        let enemy = state.registry.spawn(Actor::new(Archetype::Skeleton, Vec2::new(400.0, -30.0))).unwrap();

        handle_room_boundary(&mut state, 0.016);

        let interior = room_interior();
        let position = state.registry.get(enemy).unwrap().position;
        assert!(interior.contains(position));
        assert_eq!(position, Vec2::new(interior.max.x, interior.min.y));
    }

    #[test]
    fn test_returning_through_a_new_door_adds_the_back_door() {
        let mut state = seeded_state();
        let north = RoomIndex::new(2, 1);
        let north_west = RoomIndex::new(1, 1);
        // (1,1) generated from its south side, so it has south and west doors only
        state.dungeon.generate_room(north_west, Direction::South, 0);
        state.dungeon.generate_room(north, Direction::South, 0);
        state.dungeon.current_room = north;

        move_player(&mut state, Direction::West.door_hitbox().center(), Vec2::ZERO);
        let boundary = handle_room_boundary(&mut state, 0.016);

        assert_eq!(boundary, Boundary::Entered(Direction::West));
        assert_eq!(state.dungeon.current_room, north_west);
        assert!(state.dungeon.room(north_west).unwrap().door_east);
    }

    #[test]
    fn test_no_player_only_clamps() {
        let mut state = seeded_state();
        state.player = None;
        assert_eq!(handle_room_boundary(&mut state, 0.016), Boundary::Inside);
    }
}
