//! Game event system for decoupled communication between systems.
//!
//! Systems push events during a frame; the frame step drains them into its
//! report so audio, HUD and logging can react without tight coupling.

use glam::Vec2;

use crate::dungeon_gen::{Direction, RoomIndex};
use crate::registry::ActorId;

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// One actor struck another
    ActorHit {
        attacker: ActorId,
        target: ActorId,
        damage: i32,
        lethal: bool,
    },
    /// An actor carrying a behavior was removed
    EnemyDied {
        actor: ActorId,
        room: Option<RoomIndex>,
        position: Vec2,
    },
    /// Last monster in a room died and its doors opened. This is the audio cue.
    RoomCleared { room: RoomIndex },
    /// A room was generated for the first time
    RoomGenerated { room: RoomIndex, monsters: u32 },
    /// The player walked through a door
    RoomEntered { room: RoomIndex, via: Direction },
    /// The player was removed; the simulation is now player-less
    PlayerDied { position: Vec2 },
}

/// Simple event queue - events are pushed during update, drained at end of frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
