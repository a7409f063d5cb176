//! Entity identity and lifecycle.
//!
//! Entities are plain integer handles into a fixed universe of
//! [`MAX_ENTITIES`](crate::ecs::MAX_ENTITIES) slots. The [`Allocator`] owns
//! the pool of free ids, the optional name bound to each entity, and the
//! per-slot component mask table.
//!
//! # Id reuse
//!
//! Freed ids go to the back of a FIFO pool and are reused oldest-first. This
//! keeps allocate and free O(1) and deterministic, at the accepted cost that
//! a stale external handle to a freed id can alias a newly created entity.
//! There is no generation tag to detect staleness.

use std::collections::{HashMap, VecDeque};

use crate::ecs::{MAX_ENTITIES, component::Mask};

/// An entity identifier: an integer handle in `[0, MAX_ENTITIES)` that ties
/// together a row across every component store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(u32);

impl Entity {
    #[inline]
    pub(crate) const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id value.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Get the index of this entity if it were to live in indexable storage (e.g. Vec)
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Manages entity id allocation, name bindings, and the component mask table.
///
/// The mask table records, per entity slot, which component types the entity
/// currently holds. It is mutated only through the
/// [`World`](crate::ecs::World) facade and reset to all-zero when the slot is
/// freed.
pub struct Allocator {
    /// FIFO pool of free ids. The oldest-freed id is reused first.
    free: VecDeque<Entity>,

    /// One component mask per entity slot, live or not.
    masks: Vec<Mask>,

    /// Name bindings, kept as a bijection over named entities.
    names: HashMap<Entity, String>,
    by_name: HashMap<String, Entity>,

    /// Number of currently live entities.
    live: usize,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator {
    /// Create an allocator with every id in the free pool.
    pub fn new() -> Self {
        Self {
            free: (0..MAX_ENTITIES as u32).map(Entity::new).collect(),
            masks: vec![Mask::new(); MAX_ENTITIES],
            names: HashMap::new(),
            by_name: HashMap::new(),
            live: 0,
        }
    }

    /// Allocate the oldest-freed entity id.
    ///
    /// Panics when all `MAX_ENTITIES` slots are live.
    pub fn alloc(&mut self) -> Entity {
        let Some(entity) = self.free.pop_front() else {
            panic!("entity capacity exhausted ({MAX_ENTITIES} live)");
        };
        self.live += 1;
        log::trace!("allocated entity {}", entity.id());
        entity
    }

    /// Allocate an id and bind `name` to it.
    ///
    /// Panics if the name is already bound.
    pub fn alloc_named(&mut self, name: &str) -> Entity {
        assert!(
            !self.by_name.contains_key(name),
            "entity name {name:?} is already bound"
        );
        let entity = self.alloc();
        self.bind(entity, name);
        entity
    }

    /// Return an id to the free pool, reset its mask, and drop its name
    /// binding if present.
    pub fn free(&mut self, entity: Entity) {
        assert!(
            entity.index() < MAX_ENTITIES,
            "entity {entity:?} is out of range"
        );
        self.masks[entity.index()].clear();
        self.free.push_back(entity);
        self.live -= 1;
        if let Some(name) = self.names.remove(&entity) {
            self.by_name.remove(&name);
        }
        log::trace!("freed entity {}", entity.id());
    }

    /// Bind `name` to an entity. Rebinding a named entity replaces its
    /// previous name so the bijection stays intact.
    ///
    /// Panics if the name is already bound to another entity.
    pub fn set_name(&mut self, entity: Entity, name: &str) {
        assert!(
            !self.by_name.contains_key(name),
            "entity name {name:?} is already bound"
        );
        if let Some(old) = self.names.remove(&entity) {
            self.by_name.remove(&old);
        }
        self.bind(entity, name);
    }

    /// The name bound to an entity. Panics if the entity is unnamed.
    pub fn name(&self, entity: Entity) -> &str {
        self.names
            .get(&entity)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("entity {entity:?} has no name"))
    }

    /// The entity bound to `name`. Panics if the name is unknown.
    pub fn find(&self, name: &str) -> Entity {
        *self
            .by_name
            .get(name)
            .unwrap_or_else(|| panic!("no entity named {name:?}"))
    }

    /// Number of currently live entities.
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Current component mask of an entity slot.
    #[inline]
    pub(crate) fn mask(&self, entity: Entity) -> &Mask {
        &self.masks[entity.index()]
    }

    /// Overwrite the component mask of an entity slot.
    #[inline]
    pub(crate) fn set_mask(&mut self, entity: Entity, mask: Mask) {
        self.masks[entity.index()] = mask;
    }

    fn bind(&mut self, entity: Entity, name: &str) {
        self.by_name.insert(name.to_owned(), entity);
        self.names.insert(entity, name.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::component::Id;

    #[test]
    fn alloc_is_sequential_from_zero() {
        // Given
        let mut allocator = Allocator::new();

        // When
        let first = allocator.alloc();
        let second = allocator.alloc();

        // Then
        assert_eq!(first.id(), 0);
        assert_eq!(second.id(), 1);
        assert_eq!(allocator.live(), 2);
    }

    #[test]
    fn freed_ids_are_reused_oldest_first() {
        // Given
        let mut allocator = Allocator::new();
        let ids: Vec<Entity> = (0..4).map(|_| allocator.alloc()).collect();

        // When - free two ids, oldest-freed is ids[2]
        allocator.free(ids[2]);
        allocator.free(ids[0]);

        // Then - the rest of the seed pool drains before reuse
        for expected in 4..MAX_ENTITIES as u32 {
            assert_eq!(allocator.alloc().id(), expected);
        }
        assert_eq!(allocator.alloc(), ids[2]);
        assert_eq!(allocator.alloc(), ids[0]);
    }

    #[test]
    #[should_panic(expected = "entity capacity exhausted")]
    fn alloc_past_capacity_panics() {
        // Given
        let mut allocator = Allocator::new();
        for _ in 0..MAX_ENTITIES {
            allocator.alloc();
        }

        // When - one allocation too many
        allocator.alloc();
    }

    #[test]
    fn name_binding_round_trips() {
        // Given
        let mut allocator = Allocator::new();

        // When
        let player = allocator.alloc_named("player");

        // Then
        assert_eq!(allocator.name(player), "player");
        assert_eq!(allocator.find("player"), player);
    }

    #[test]
    #[should_panic(expected = "already bound")]
    fn duplicate_name_panics() {
        // Given
        let mut allocator = Allocator::new();
        allocator.alloc_named("player");

        // When - a second entity claims the same name
        allocator.alloc_named("player");
    }

    #[test]
    fn renaming_replaces_the_old_binding() {
        // Given
        let mut allocator = Allocator::new();
        let entity = allocator.alloc_named("old");

        // When
        allocator.set_name(entity, "new");

        // Then - the old name is available again
        assert_eq!(allocator.name(entity), "new");
        assert_eq!(allocator.find("new"), entity);
        let other = allocator.alloc_named("old");
        assert_ne!(other, entity);
    }

    #[test]
    #[should_panic(expected = "no entity named")]
    fn free_drops_the_name_binding() {
        // Given
        let mut allocator = Allocator::new();
        let entity = allocator.alloc_named("temp");

        // When
        allocator.free(entity);

        // Then
        allocator.find("temp");
    }

    #[test]
    fn free_resets_the_mask() {
        // Given
        let mut allocator = Allocator::new();
        let entity = allocator.alloc();
        let mut mask = Mask::new();
        mask.set(Id::new(3), true);
        allocator.set_mask(entity, mask);

        // When
        allocator.free(entity);

        // Then
        assert!(allocator.mask(entity).is_empty());
    }
}
