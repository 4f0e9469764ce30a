//! Player input interpretation.
//!
//! Turns the platform's `FrameInput` into player velocity and slice spawns.
//! A missing player ignores input entirely.

use crate::config::SimConfig;
use crate::frames::FrameTables;
use crate::input::FrameInput;
use crate::registry::{ActorId, ActorRegistry};
use crate::spawning;

/// Apply one frame of input to the player.
///
/// Movement sets velocity unless the player is reeling from a hit, so
/// knockback plays out the same way it does for pursuers. Returns the slice
/// spawned by the primary action, if any found a slot.
pub fn apply_player_input(
    registry: &mut ActorRegistry,
    player: Option<ActorId>,
    input: &FrameInput,
    config: &SimConfig,
    frames: &FrameTables,
) -> Option<ActorId> {
    puffin::profile_function!();

    let actor = registry.get_mut(player?)?;
    if !actor.is_invulnerable() {
        actor.velocity = input.movement * config.player_speed;
    }
    let from = actor.position;

    let target = input.primary_action?;
    registry.spawn(spawning::slice(from, target, frames))
}
