//! Game simulation - one fixed-order pass per rendered frame.
//!
//! input -> AI -> motion/animation -> room boundary -> collision -> sweep.
//! Collision and the sweep both depend on writes made earlier in the same
//! frame, so the order is part of the contract.

use crate::events::GameEvent;
use crate::input::FrameInput;
use crate::systems;

use super::game_state::GameState;
use super::room_transition::{handle_room_boundary, Boundary};

/// Everything a frame produced for the outside world
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Step actually simulated, after clamping
    pub dt: f32,
    pub boundary: Boundary,
    pub events: Vec<GameEvent>,
}

impl FrameReport {
    fn skipped() -> Self {
        Self {
            dt: 0.0,
            boundary: Boundary::Inside,
            events: Vec::new(),
        }
    }

    /// The one-shot audio cue: did a room open this frame?
    pub fn room_cleared(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::RoomCleared { .. }))
    }
}

/// Advance the simulation by one frame.
///
/// `dt` is clamped to the configured maximum step; a non-positive (or NaN)
/// `dt` simulates nothing.
pub fn step_frame(state: &mut GameState, input: &FrameInput, dt: f32) -> FrameReport {
    puffin::profile_function!();

    if dt.is_nan() || dt <= 0.0 {
        return FrameReport::skipped();
    }
    let dt = dt.min(state.config.max_frame_dt);

    systems::apply_player_input(&mut state.registry, state.player, input, &state.config, &state.frames);

    let target = state.player_position();
    systems::run_behaviors(&mut state.registry, target);

    systems::update_actors(&mut state.registry, dt);

    let boundary = handle_room_boundary(state, dt);

    systems::resolve_collisions(&mut state.registry, &state.config, &mut state.events);

    systems::sweep(&mut state.registry, &mut state.dungeon, &mut state.player, &mut state.events);

    state.frame += 1;

    FrameReport {
        dt,
        boundary,
        events: state.events.drain().collect(),
    }
}
