//! Fixed-capacity actor slot pool.
//!
//! Every live actor is owned by exactly one slot. Ids are slot indices and
//! stay valid until the slot is released by the lifecycle sweep. Spawning
//! always takes the lowest free slot; a full registry drops the spawn.

use std::collections::BTreeSet;

use crate::components::Actor;

/// Stable handle to an occupied registry slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub usize);

pub struct ActorRegistry {
    slots: Vec<Option<Actor>>,
    /// Free slot indices, ordered so the first one is the lowest
    free: BTreeSet<usize>,
}

impl ActorRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            free: (0..capacity).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Insert into the first empty slot. Returns `None` when every slot is
    /// taken; the actor is dropped and nothing else is reported.
    pub fn spawn(&mut self, actor: Actor) -> Option<ActorId> {
        let Some(index) = self.free.pop_first() else {
            tracing::debug!(archetype = ?actor.archetype, "registry full, spawn dropped");
            return None;
        };
        self.slots[index] = Some(actor);
        Some(ActorId(index))
    }

    /// Release a slot and hand back its actor
    pub fn despawn(&mut self, id: ActorId) -> Option<Actor> {
        let actor = self.slots.get_mut(id.0)?.take()?;
        self.free.insert(id.0);
        Some(actor)
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.slots.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of occupied slots in slot order
    pub fn ids(&self) -> Vec<ActorId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (ActorId(i), a)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut Actor)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|a| (ActorId(i), a)))
    }
}
