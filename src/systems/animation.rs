//! Per-actor animation timers and motion integration.

use crate::components::Actor;
use crate::registry::ActorRegistry;

/// Advance one actor by `dt` seconds: animation, iframe countdown, then
/// position. Touches nothing but the actor itself.
pub fn update_actor(actor: &mut Actor, dt: f32) {
    let anim = &mut actor.animation;
    anim.time_until_next_frame -= dt;
    if anim.time_until_next_frame <= 0.0 {
        anim.current_frame = (anim.current_frame + 1) % anim.frame_count;
        if anim.current_frame == 0 && actor.free_on_anim_complete {
            actor.should_be_freed = true;
        }
        // Carry the overshoot into the next frame instead of resetting
        anim.time_until_next_frame += anim.time_per_frame;
    }

    if actor.iframe_time_remaining > 0.0 {
        actor.iframe_time_remaining -= dt;
    }

    actor.position += actor.velocity * dt;
}

/// Run `update_actor` over every live actor
pub fn update_actors(registry: &mut ActorRegistry, dt: f32) {
    puffin::profile_function!();

    for (_id, actor) in registry.iter_mut() {
        update_actor(actor, dt);
    }
}
