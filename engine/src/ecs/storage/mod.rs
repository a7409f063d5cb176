//! Dense per-type component storage.
//!
//! Each registered component type gets one [`SparseSet`]: a contiguous array
//! of values kept dense so iteration stays cache-friendly, plus two index
//! tables mapping entity to dense position and back. Insert appends; removal
//! swaps the last value into the freed slot and patches the index tables for
//! the displaced entity. Both are O(1); removal does not preserve dense
//! order.
//!
//! The [`AnyStore`] trait is the type-erased handle the component registry
//! holds for each store. It exposes only the tolerant destroy sweep and the
//! `Any` hooks used to recover the typed store.

use std::any::{Any, type_name};

use crate::ecs::{MAX_ENTITIES, component::Component, entity::Entity};

/// Type-erased view of a per-type store.
pub trait AnyStore {
    /// Drop the entity's value if it holds one. No-op when absent; invoked
    /// for every registered type when any entity is destroyed, so no store
    /// is left with orphaned data.
    fn entity_destroyed(&mut self, entity: Entity);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Dense storage for a single component type.
///
/// Holds at most one value per entity. The sparse table is a flat
/// `MAX_ENTITIES`-long array; capacity is fixed so no pointer chasing or
/// rehashing happens on the hot path.
pub struct SparseSet<C: Component> {
    /// Component values, dense in `[0, len)`.
    values: Vec<C>,

    /// Dense index to entity, parallel to `values`.
    entities: Vec<Entity>,

    /// Entity slot to dense index.
    sparse: Vec<Option<u32>>,
}

impl<C: Component> Default for SparseSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component> SparseSet<C> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            entities: Vec::new(),
            sparse: vec![None; MAX_ENTITIES],
        }
    }

    /// Number of entities currently holding this type.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the entity holds a value of this type.
    #[inline]
    pub fn has(&self, entity: Entity) -> bool {
        self.sparse[entity.index()].is_some()
    }

    /// Append a value at the next free dense slot.
    ///
    /// Panics if the entity already holds this type.
    pub fn insert(&mut self, entity: Entity, value: C) {
        assert!(
            !self.has(entity),
            "entity {:?} already holds a {}",
            entity,
            type_name::<C>()
        );
        self.sparse[entity.index()] = Some(self.values.len() as u32);
        self.entities.push(entity);
        self.values.push(value);
    }

    /// Swap-remove the entity's value and return it. The last dense element
    /// moves into the freed slot, so dense order is not preserved.
    ///
    /// Panics if the entity does not hold this type.
    pub fn remove(&mut self, entity: Entity) -> C {
        let index = self.index_of(entity);
        let value = self.values.swap_remove(index);
        self.entities.swap_remove(index);
        self.sparse[entity.index()] = None;
        // Patch the displaced entity, unless we removed the last element.
        if let Some(&moved) = self.entities.get(index) {
            self.sparse[moved.index()] = Some(index as u32);
        }
        value
    }

    /// Borrow the entity's value. Panics if absent.
    pub fn get(&self, entity: Entity) -> &C {
        let index = self.index_of(entity);
        &self.values[index]
    }

    /// Mutably borrow the entity's value. Panics if absent.
    pub fn get_mut(&mut self, entity: Entity) -> &mut C {
        let index = self.index_of(entity);
        &mut self.values[index]
    }

    /// Iterate `(entity, value)` pairs in dense storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &C)> {
        self.entities.iter().copied().zip(self.values.iter())
    }

    fn index_of(&self, entity: Entity) -> usize {
        self.sparse[entity.index()].unwrap_or_else(|| {
            panic!(
                "entity {:?} does not hold a {}",
                entity,
                type_name::<C>()
            )
        }) as usize
    }
}

impl<C: Component> AnyStore for SparseSet<C> {
    fn entity_destroyed(&mut self, entity: Entity) {
        if self.has(entity) {
            self.remove(entity);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(u32);
    impl Component for Health {}

    fn entity(id: u32) -> Entity {
        Entity::new(id)
    }

    #[test]
    fn insert_and_get() {
        // Given
        let mut store = SparseSet::new();

        // When
        store.insert(entity(7), Health(50));

        // Then
        assert!(store.has(entity(7)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(entity(7)).0, 50);
    }

    #[test]
    fn get_mut_updates_in_place() {
        // Given
        let mut store = SparseSet::new();
        store.insert(entity(0), Health(50));

        // When
        store.get_mut(entity(0)).0 = 75;

        // Then
        assert_eq!(store.get(entity(0)).0, 75);
    }

    #[test]
    #[should_panic(expected = "already holds")]
    fn double_insert_panics() {
        // Given
        let mut store = SparseSet::new();
        store.insert(entity(1), Health(10));

        // When
        store.insert(entity(1), Health(20));
    }

    #[test]
    #[should_panic(expected = "does not hold")]
    fn remove_of_absent_panics() {
        // Given
        let mut store: SparseSet<Health> = SparseSet::new();

        // When
        store.remove(entity(1));
    }

    #[test]
    fn swap_remove_fills_the_hole_with_the_last_entity() {
        // Given - five entities in dense order
        let mut store = SparseSet::new();
        for id in 0..5 {
            store.insert(entity(id), Health(id * 10));
        }

        // When - remove one from the middle
        let removed = store.remove(entity(2));

        // Then - size shrank, every survivor kept its value, and the last
        // entity now occupies the freed dense slot
        assert_eq!(removed.0, 20);
        assert_eq!(store.len(), 4);
        for id in [0, 1, 3, 4] {
            assert_eq!(store.get(entity(id)).0, id * 10);
        }
        let dense: Vec<Entity> = store.iter().map(|(e, _)| e).collect();
        assert_eq!(dense[2], entity(4));
    }

    #[test]
    fn remove_of_last_element_needs_no_patch() {
        // Given
        let mut store = SparseSet::new();
        store.insert(entity(0), Health(1));
        store.insert(entity(1), Health(2));

        // When
        store.remove(entity(1));

        // Then
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(entity(0)).0, 1);
        assert!(!store.has(entity(1)));
    }

    #[test]
    fn entity_destroyed_is_tolerant() {
        // Given
        let mut store = SparseSet::new();
        store.insert(entity(3), Health(30));

        // When - destroy twice, second is a no-op
        store.entity_destroyed(entity(3));
        store.entity_destroyed(entity(3));

        // Then
        assert!(store.is_empty());
    }
}
