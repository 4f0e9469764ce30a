//! End-of-frame removal of flagged actors.

use crate::dungeon_gen::Dungeon;
use crate::events::{EventQueue, GameEvent};
use crate::registry::{ActorId, ActorRegistry};

/// Release every actor flagged `should_be_freed`.
///
/// Enemies (anything with a behavior) count against their room; the death
/// that empties a room opens its doors and emits `RoomCleared` once. Freeing
/// the player clears `player`, leaving a player-less simulation.
pub fn sweep(
    registry: &mut ActorRegistry,
    dungeon: &mut Dungeon,
    player: &mut Option<ActorId>,
    events: &mut EventQueue,
) {
    puffin::profile_function!();

    let flagged: Vec<ActorId> = registry
        .iter()
        .filter(|(_, actor)| actor.should_be_freed)
        .map(|(id, _)| id)
        .collect();

    for id in flagged {
        let Some(actor) = registry.despawn(id) else {
            continue;
        };

        if actor.ai.is_some() {
            if let Some(index) = actor.room {
                let cleared = dungeon
                    .room_mut(index)
                    .map(|room| room.record_monster_death())
                    .unwrap_or(false);
                if cleared {
                    tracing::info!(x = index.x, y = index.y, "room cleared");
                    events.push(GameEvent::RoomCleared { room: index });
                }
            }
            events.push(GameEvent::EnemyDied {
                actor: id,
                room: actor.room,
                position: actor.position,
            });
        }

        if *player == Some(id) {
            tracing::info!(x = actor.position.x, y = actor.position.y, "player died");
            *player = None;
            events.push(GameEvent::PlayerDied {
                position: actor.position,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Actor, Archetype, Behavior};
    use crate::constants::*;
    use crate::dungeon_gen::{Direction, RoomIndex};
    use glam::Vec2;

    fn monster(room: RoomIndex) -> Actor {
        let mut actor = Actor::new(Archetype::Skeleton, Vec2::new(100.0, 100.0));
        actor.ai = Some(Behavior::Pursue { speed: 30.0 });
        actor.room = Some(room);
        actor
    }

    fn dungeon_with_room(monsters: u32) -> (Dungeon, RoomIndex) {
        let mut dungeon = Dungeon::new(DUNGEON_WIDTH, DUNGEON_HEIGHT, RoomIndex::new(2, 2));
        let index = RoomIndex::new(2, 1);
        dungeon.generate_room(index, Direction::South, monsters);
        (dungeon, index)
    }

    #[test]
    fn test_unflagged_actors_survive() {
        let (mut dungeon, index) = dungeon_with_room(1);
        let mut registry = ActorRegistry::with_capacity(4);
        let id = registry.spawn(monster(index)).unwrap();
        let mut player = None;
        let mut events = EventQueue::new();

        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        assert!(registry.contains(id));
        assert!(events.is_empty());
    }

    #[test]
    fn test_enemy_death_decrements_room_once() {
        let (mut dungeon, index) = dungeon_with_room(2);
        let mut registry = ActorRegistry::with_capacity(4);
        let a = registry.spawn(monster(index)).unwrap();
        registry.spawn(monster(index)).unwrap();
        registry.get_mut(a).unwrap().should_be_freed = true;
        let mut player = None;
        let mut events = EventQueue::new();

        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        assert!(!registry.contains(a));
        let room = dungeon.room(index).unwrap();
        assert_eq!(room.remaining_monsters, 1);
        assert!(!room.doors_opened);
        let events: Vec<_> = events.drain().collect();
        assert!(matches!(events[..], [GameEvent::EnemyDied { .. }]));
    }

    #[test]
    fn test_last_death_clears_room_exactly_once() {
        let (mut dungeon, index) = dungeon_with_room(1);
        let mut registry = ActorRegistry::with_capacity(4);
        let mut player = None;
        let mut events = EventQueue::new();

        let a = registry.spawn(monster(index)).unwrap();
        registry.get_mut(a).unwrap().should_be_freed = true;
        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        let cleared = events
            .drain()
            .filter(|e| matches!(e, GameEvent::RoomCleared { .. }))
            .count();
        assert_eq!(cleared, 1);
        assert!(dungeon.room(index).unwrap().doors_opened);

        // A straggler attributed to the same room changes nothing
        let b = registry.spawn(monster(index)).unwrap();
        registry.get_mut(b).unwrap().should_be_freed = true;
        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        assert_eq!(dungeon.room(index).unwrap().remaining_monsters, 0);
        assert!(!events.drain().any(|e| matches!(e, GameEvent::RoomCleared { .. })));
    }

    #[test]
    fn test_effects_do_not_count_as_monsters() {
        let (mut dungeon, index) = dungeon_with_room(1);
        let mut registry = ActorRegistry::with_capacity(4);
        let mut slice = Actor::new(Archetype::Slice, Vec2::ZERO);
        slice.should_be_freed = true;
        let id = registry.spawn(slice).unwrap();
        let mut player = None;
        let mut events = EventQueue::new();

        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        assert!(!registry.contains(id));
        assert_eq!(dungeon.room(index).unwrap().remaining_monsters, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_player_death_clears_player() {
        let (mut dungeon, _) = dungeon_with_room(1);
        let mut registry = ActorRegistry::with_capacity(4);
        let mut actor = Actor::new(Archetype::Player, Vec2::new(50.0, 80.0));
        actor.should_be_freed = true;
        let id = registry.spawn(actor).unwrap();
        let mut player = Some(id);
        let mut events = EventQueue::new();

        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        assert_eq!(player, None);
        assert!(registry.is_empty());
        let events: Vec<_> = events.drain().collect();
        assert_eq!(
            events,
            vec![GameEvent::PlayerDied {
                position: Vec2::new(50.0, 80.0)
            }]
        );
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let (mut dungeon, index) = dungeon_with_room(1);
        let mut registry = ActorRegistry::with_capacity(1);
        let id = registry.spawn(monster(index)).unwrap();
        registry.get_mut(id).unwrap().should_be_freed = true;
        let mut player = None;
        let mut events = EventQueue::new();

        sweep(&mut registry, &mut dungeon, &mut player, &mut events);

        assert_eq!(registry.spawn(monster(index)), Some(id));
    }
}
