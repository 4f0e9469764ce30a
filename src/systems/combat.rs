//! Collision and combat resolution.
//!
//! Every ordered pair of live actors is tested once per frame. Whether a hit
//! lands depends only on the attacker's mask and the target's layer, so the
//! same two actors can trade hits within one scan.

use glam::Vec2;

use crate::config::SimConfig;
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::registry::{ActorId, ActorRegistry};

/// Circle overlap with the shared collision radius
pub fn overlaps(a: Vec2, b: Vec2) -> bool {
    a.distance(b) <= COLLISION_RADIUS * 2.0
}

/// Resolve all contact damage for this frame.
///
/// Actors already flagged for removal still take part until the sweep
/// releases them. Writes from earlier pairs are visible to later ones: a
/// target that survives a hit is invulnerable for the rest of the scan.
pub fn resolve_collisions(registry: &mut ActorRegistry, config: &SimConfig, events: &mut EventQueue) {
    puffin::profile_function!();

    let ids = registry.ids();
    for &us in &ids {
        for &them in &ids {
            if us == them {
                continue;
            }
            try_hit(registry, us, them, config, events);
        }
    }
}

fn try_hit(
    registry: &mut ActorRegistry,
    us: ActorId,
    them: ActorId,
    config: &SimConfig,
    events: &mut EventQueue,
) {
    let Some(attacker) = registry.get(us) else {
        return;
    };
    if attacker.is_invulnerable() {
        return;
    }
    let (from, mask, damage) = (attacker.position, attacker.collision_mask, attacker.collision_damage);

    let Some(target) = registry.get_mut(them) else {
        return;
    };
    if target.is_invulnerable() || !overlaps(from, target.position) {
        return;
    }
    if !mask.intersects(target.collision_layer) {
        return;
    }

    target.hp -= damage;
    target.velocity += (target.position - from).normalize_or_zero() * config.knockback_speed;

    let lethal = target.hp <= 0;
    if lethal {
        target.should_be_freed = true;
    } else {
        target.iframe_time_remaining = config.iframe_duration;
    }

    tracing::debug!(attacker = us.0, target = them.0, damage, hp = target.hp, "hit");
    events.push(GameEvent::ActorHit {
        attacker: us,
        target: them,
        damage,
        lethal,
    });
}
