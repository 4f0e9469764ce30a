//! Scripted player used by the headless runner.
//!
//! Chases the nearest enemy and slices it when in range. Once the room is
//! clear it heads for a door, preferring rooms it has not seen yet.

use glam::Vec2;

use crate::constants::*;
use crate::dungeon_gen::{room_interior, Direction};
use crate::input::FrameInput;

use super::game_state::GameState;
use super::room_transition::Boundary;

/// Stand-in for a human at the keyboard
#[derive(Debug, Default)]
pub struct Autopilot {
    slice_cooldown: f32,
    /// Door we last came through, as seen from the new room
    entered_from: Option<Direction>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember which wall we arrived through so we don't walk straight back
    pub fn observe(&mut self, boundary: Boundary) {
        if let Boundary::Entered(direction) = boundary {
            self.entered_from = Some(direction.opposite());
        }
    }

    /// Decide this frame's input
    pub fn next_input(&mut self, state: &GameState, dt: f32) -> FrameInput {
        self.slice_cooldown -= dt;

        let Some(position) = state.player_position() else {
            return FrameInput::idle();
        };

        if let Some(enemy) = nearest_enemy(state, position) {
            let to_enemy = enemy - position;
            if to_enemy.length() <= AUTOPILOT_STRIKE_RANGE {
                if self.slice_cooldown <= 0.0 {
                    self.slice_cooldown = AUTOPILOT_SLICE_COOLDOWN;
                    return FrameInput::idle().with_action(enemy);
                }
                return FrameInput::idle();
            }
            return FrameInput::from_axes(to_enemy.x, to_enemy.y);
        }

        match self.pick_door(state) {
            Some(direction) => {
                let heading = door_heading(position, direction);
                FrameInput::from_axes(heading.x, heading.y)
            }
            None => FrameInput::idle(),
        }
    }

    fn pick_door(&self, state: &GameState) -> Option<Direction> {
        let room = state.dungeon.current()?;
        if !room.doors_opened {
            return None;
        }
        let here = state.dungeon.current_room;
        let doors: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| room.has_door(*d) && state.dungeon.neighbor(here, *d).is_some())
            .collect();

        let unexplored = doors.iter().copied().find(|d| {
            state
                .dungeon
                .neighbor(here, *d)
                .is_some_and(|next| !state.dungeon.is_generated(next))
        });
        unexplored
            .or_else(|| doors.iter().copied().find(|d| Some(*d) != self.entered_from))
            .or_else(|| doors.first().copied())
    }
}

fn nearest_enemy(state: &GameState, from: Vec2) -> Option<Vec2> {
    state
        .registry
        .iter()
        .filter(|(_, a)| a.ai.is_some() && !a.should_be_freed)
        .map(|(_, a)| a.position)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}

/// Line up in front of the door first, then walk through it
fn door_heading(position: Vec2, direction: Direction) -> Vec2 {
    let door = direction.door_hitbox().center();
    let approach = room_interior().clamp(door);
    let target = if position.distance(approach) > 2.0 { approach } else { door };
    target - position
}
