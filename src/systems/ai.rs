//! AI steering.
//!
//! Each behavior is a pure function from (self, target) to the velocity the
//! actor wants this frame. The player's position is the only target.

use glam::Vec2;

use crate::components::{Actor, Behavior};
use crate::registry::ActorRegistry;

impl Behavior {
    /// Velocity this behavior wants for `actor` given the target position
    pub fn steer(&self, actor: &Actor, target: Option<Vec2>) -> Vec2 {
        match self {
            Behavior::Pursue { speed } => pursue(actor, target, *speed),
        }
    }
}

/// Head straight for the target. Without a target, or while knocked back
/// (invulnerable), the current velocity is kept.
fn pursue(actor: &Actor, target: Option<Vec2>, speed: f32) -> Vec2 {
    let Some(target) = target else {
        return actor.velocity;
    };
    if actor.is_invulnerable() {
        return actor.velocity;
    }
    (target - actor.position).normalize_or_zero() * speed
}

/// Evaluate every actor's behavior once
pub fn run_behaviors(registry: &mut ActorRegistry, target: Option<Vec2>) {
    puffin::profile_function!();

    for (_id, actor) in registry.iter_mut() {
        if let Some(behavior) = actor.ai {
            actor.velocity = behavior.steer(actor, target);
        }
    }
}
