//! Core game state - owns the simulation data.

use crate::config::SimConfig;
use crate::constants::*;
use crate::dungeon_gen::{Dungeon, RoomIndex};
use crate::events::EventQueue;
use crate::frames::FrameTables;
use crate::registry::{ActorId, ActorRegistry};
use crate::spawning;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Core game state - owns all simulation data.
pub struct GameState {
    /// Every live actor
    pub registry: ActorRegistry,

    /// Room grid and the player's current room
    pub dungeon: Dungeon,

    /// Player handle; `None` once the player has died
    pub player: Option<ActorId>,

    pub config: SimConfig,
    pub frames: FrameTables,

    /// Drives monster counts for newly generated rooms
    pub rng: StdRng,

    /// Events pushed during the current frame
    pub events: EventQueue,

    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    /// Fresh game: the player stands in the middle of the open start room.
    pub fn new(config: SimConfig, frames: FrameTables) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = RoomIndex::new(START_ROOM.0, START_ROOM.1);
        let dungeon = Dungeon::new(DUNGEON_WIDTH, DUNGEON_HEIGHT, start);

        let mut registry = ActorRegistry::with_capacity(config.actor_capacity);
        let spawn_point = crate::dungeon_gen::room_interior().center();
        let player = registry.spawn(spawning::player(spawn_point, &config, &frames));

        tracing::debug!(capacity = config.actor_capacity, seed = ?config.seed, "game state created");

        Self {
            registry,
            dungeon,
            player,
            config,
            frames,
            rng,
            events: EventQueue::new(),
            frame: 0,
        }
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.registry.get(self.player?).map(|p| p.position)
    }

    /// True once the player has been removed
    pub fn is_game_over(&self) -> bool {
        self.player.is_none()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SimConfig::default(), FrameTables::builtin())
    }
}
