//! Data-driven actor spawning.
//!
//! Builds fully configured actors for each archetype. Callers insert them
//! into the registry; a full registry silently drops them.

use crate::components::{Actor, Animation, Archetype, Behavior, CollisionLayers};
use crate::config::SimConfig;
use crate::constants::*;
use crate::dungeon_gen::RoomIndex;
use crate::frames::FrameTables;
use crate::registry::{ActorId, ActorRegistry};
use glam::Vec2;

fn animation_for(frames: &FrameTables, archetype: Archetype) -> Animation {
    let table = frames.get(archetype);
    Animation::new(table.frame_count(), table.time_per_frame)
}

/// The player: collides as PLAYER, deals no contact damage
pub fn player(position: Vec2, config: &SimConfig, frames: &FrameTables) -> Actor {
    let mut actor = Actor::new(Archetype::Player, position);
    actor.origin = Vec2::new(TILE_WIDTH / 2.0, TILE_HEIGHT / 2.0);
    actor.animation = animation_for(frames, Archetype::Player);
    actor.has_shadow = true;
    actor.shadow_offset = Vec2::new(0.0, SHADOW_OFFSET_Y);
    actor.collision_layer = CollisionLayers::PLAYER;
    actor.hp = config.player_health;
    actor.hp_max = config.player_health;
    actor
}

/// A skeleton that walks at the player and hurts on contact
pub fn skeleton(position: Vec2, room: RoomIndex, config: &SimConfig, frames: &FrameTables) -> Actor {
    let mut actor = Actor::new(Archetype::Skeleton, position);
    actor.origin = Vec2::new(TILE_WIDTH / 2.0, TILE_HEIGHT / 2.0);
    actor.animation = animation_for(frames, Archetype::Skeleton);
    actor.has_shadow = true;
    actor.shadow_offset = Vec2::new(0.0, SHADOW_OFFSET_Y);
    actor.collision_layer = CollisionLayers::ENEMY;
    actor.collision_mask = CollisionLayers::PLAYER;
    actor.collision_damage = ENEMY_CONTACT_DAMAGE;
    actor.hp = config.enemy_health;
    actor.hp_max = config.enemy_health;
    actor.ai = Some(Behavior::Pursue {
        speed: config.enemy_speed,
    });
    actor.room = Some(room);
    actor
}

/// A slice swung from `from` toward `target`. Placed one reach away from the
/// swinger and removed once its animation plays through.
pub fn slice(from: Vec2, target: Vec2, frames: &FrameTables) -> Actor {
    let direction = (target - from).try_normalize().unwrap_or(Vec2::X);
    let mut actor = Actor::new(Archetype::Slice, from + direction * SLICE_REACH);
    actor.origin = Vec2::new(TILE_WIDTH / 2.0, TILE_HEIGHT / 2.0);
    actor.rotation = direction.y.atan2(direction.x);
    actor.animation = animation_for(frames, Archetype::Slice);
    actor.free_on_anim_complete = true;
    actor.collision_layer = CollisionLayers::PLAYER_ATTACK;
    actor.collision_mask = CollisionLayers::ENEMY;
    actor.collision_damage = SLICE_DAMAGE;
    actor
}

/// Spawn a room's monsters at the first `count` fixed spawn points.
/// Returns how many actually found a slot.
pub fn spawn_room_monsters(
    registry: &mut ActorRegistry,
    room: RoomIndex,
    count: u32,
    config: &SimConfig,
    frames: &FrameTables,
) -> Vec<ActorId> {
    MONSTER_SPAWN_POINTS
        .iter()
        .take(count as usize)
        .filter_map(|&point| registry.spawn(skeleton(Vec2::from(point), room, config, frames)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_faces_target() {
        let frames = FrameTables::builtin();
        let s = slice(Vec2::new(100.0, 100.0), Vec2::new(100.0, 50.0), &frames);
        assert_eq!(s.position, Vec2::new(100.0, 100.0 - SLICE_REACH));
        assert!((s.rotation + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(s.free_on_anim_complete);
        assert!(s.ai.is_none());
        assert_eq!(s.animation.frame_count, 3);
    }

    #[test]
    fn test_slice_on_top_of_target_still_spawns() {
        let frames = FrameTables::builtin();
        let s = slice(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), &frames);
        assert_eq!(s.position, Vec2::new(10.0 + SLICE_REACH, 10.0));
    }

    #[test]
    fn test_enemy_cannot_hit_enemy() {
        let frames = FrameTables::builtin();
        let config = SimConfig::default();
        let e = skeleton(Vec2::ZERO, RoomIndex::new(0, 0), &config, &frames);
        assert!(!e.collision_mask.intersects(e.collision_layer));
        let p = player(Vec2::ZERO, &config, &frames);
        assert!(e.collision_mask.intersects(p.collision_layer));
        assert!(p.collision_mask.is_empty());
        assert!(p.is_player());
    }

    #[test]
    fn test_spawn_room_monsters_uses_spawn_points() {
        let frames = FrameTables::builtin();
        let config = SimConfig::default();
        let mut registry = ActorRegistry::with_capacity(8);
        let ids = spawn_room_monsters(&mut registry, RoomIndex::new(1, 1), 3, &config, &frames);
        assert_eq!(ids.len(), 3);
        for (id, point) in ids.iter().zip(MONSTER_SPAWN_POINTS) {
            let actor = registry.get(*id).unwrap();
            assert_eq!(actor.position, Vec2::from(point));
            assert_eq!(actor.room, Some(RoomIndex::new(1, 1)));
        }
    }

    #[test]
    fn test_spawn_room_monsters_drops_when_full() {
        let frames = FrameTables::builtin();
        let config = SimConfig::default();
        let mut registry = ActorRegistry::with_capacity(2);
        let ids = spawn_room_monsters(&mut registry, RoomIndex::new(1, 1), 4, &config, &frames);
        assert_eq!(ids.len(), 2);
    }
}
