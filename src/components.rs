use bitflags::bitflags;
use glam::{Vec2, Vec3};

use crate::dungeon_gen::RoomIndex;

bitflags! {
    /// Collision categories. An actor's layer says what it is, its mask says
    /// what it can hit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionLayers: u8 {
        const PLAYER = 1 << 0;
        const ENEMY = 1 << 1;
        const PLAYER_ATTACK = 1 << 2;
    }
}

/// Which frame table and default stats an actor was spawned from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Player,
    Skeleton,
    Slice,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Player, Archetype::Skeleton, Archetype::Slice];

    /// Key used for this archetype in frame table files
    pub fn key(&self) -> &'static str {
        match self {
            Archetype::Player => "player",
            Archetype::Skeleton => "skeleton",
            Archetype::Slice => "slice",
        }
    }
}

/// Autonomous behavior attached to an actor. `None` on the actor means
/// manual or no control (the player, inert effects).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Walk straight at the player at a fixed speed
    Pursue { speed: f32 },
}

/// Looping sprite animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Number of frames in the cycle (>= 1)
    pub frame_count: usize,
    /// Index of the frame being shown (< frame_count)
    pub current_frame: usize,
    /// Seconds each frame is shown (> 0)
    pub time_per_frame: f32,
    /// Countdown to the next frame; may dip below zero before it wraps
    pub time_until_next_frame: f32,
}

impl Animation {
    pub fn new(frame_count: usize, time_per_frame: f32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current_frame: 0,
            time_per_frame,
            time_until_next_frame: time_per_frame,
        }
    }

    /// A single frame that never advances in a meaningful way
    pub fn still() -> Self {
        Self::new(1, crate::constants::DEFAULT_TIME_PER_FRAME)
    }
}

/// Mutable simulation state for one participant: the player, an enemy, or a
/// short-lived effect such as a slice.
#[derive(Debug, Clone)]
pub struct Actor {
    pub archetype: Archetype,

    pub position: Vec2,
    pub velocity: Vec2,

    // Presentation-adjacent
    pub origin: Vec2,
    pub rotation: f32,
    pub tint: Vec3,
    pub has_shadow: bool,
    pub shadow_offset: Vec2,

    pub animation: Animation,
    /// Finishing one animation cycle marks the actor for removal
    pub free_on_anim_complete: bool,
    /// Consumed once per frame by the lifecycle sweep
    pub should_be_freed: bool,

    pub collision_layer: CollisionLayers,
    pub collision_mask: CollisionLayers,
    pub collision_damage: i32,
    /// Seconds of collision immunity left; only `> 0` counts as active
    pub iframe_time_remaining: f32,

    pub hp: i32,
    pub hp_max: i32,

    pub ai: Option<Behavior>,
    /// Room whose monster count this actor belongs to
    pub room: Option<RoomIndex>,
}

impl Actor {
    pub fn new(archetype: Archetype, position: Vec2) -> Self {
        Self {
            archetype,
            position,
            velocity: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
            tint: Vec3::ONE,
            has_shadow: false,
            shadow_offset: Vec2::ZERO,
            animation: Animation::still(),
            free_on_anim_complete: false,
            should_be_freed: false,
            collision_layer: CollisionLayers::empty(),
            collision_mask: CollisionLayers::empty(),
            collision_damage: 0,
            iframe_time_remaining: 0.0,
            hp: 1,
            hp_max: 1,
            ai: None,
            room: None,
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.iframe_time_remaining > 0.0
    }

    pub fn is_player(&self) -> bool {
        self.collision_layer.contains(CollisionLayers::PLAYER)
    }

    /// Health as a fraction for HUD bars
    pub fn health_percentage(&self) -> f32 {
        if self.hp_max <= 0 {
            return 0.0;
        }
        (self.hp as f32 / self.hp_max as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_never_has_zero_frames() {
        let anim = Animation::new(0, 0.1);
        assert_eq!(anim.frame_count, 1);
        assert_eq!(anim.current_frame, 0);
    }

    #[test]
    fn test_iframes_only_count_when_positive() {
        let mut actor = Actor::new(Archetype::Skeleton, Vec2::ZERO);
        assert!(!actor.is_invulnerable());
        actor.iframe_time_remaining = -0.01;
        assert!(!actor.is_invulnerable());
        actor.iframe_time_remaining = 0.2;
        assert!(actor.is_invulnerable());
    }

    #[test]
    fn test_mask_and_layer_intersection() {
        let mask = CollisionLayers::ENEMY;
        assert!(mask.intersects(CollisionLayers::ENEMY | CollisionLayers::PLAYER));
        assert!(!mask.intersects(CollisionLayers::PLAYER_ATTACK));
    }

    #[test]
    fn test_health_percentage() {
        let mut actor = Actor::new(Archetype::Player, Vec2::ZERO);
        actor.hp = 3;
        actor.hp_max = 6;
        assert_eq!(actor.health_percentage(), 0.5);
        actor.hp = -2;
        assert_eq!(actor.health_percentage(), 0.0);
    }
}
