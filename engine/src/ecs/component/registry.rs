use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::ecs::{
    MAX_COMPONENTS,
    component::{Component, Id},
    entity::Entity,
    storage::{AnyStore, SparseSet},
};

/// Registry of component types and their backing stores.
///
/// Assigns each type its [`Id`] at registration and owns one type-erased
/// [`SparseSet`] per registered type, indexed by that id. All registration
/// happens at startup, before any entity is created; everything after is a
/// lookup or a passthrough to the typed store.
pub struct Registry {
    /// Map from Rust type to component id.
    ids: HashMap<TypeId, Id>,

    /// One store per registered type, indexed by component id.
    stores: Vec<Box<dyn AnyStore>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            stores: Vec::new(),
        }
    }

    /// Register a component type and assign it the next unused id.
    ///
    /// Panics if the type is already registered or all `MAX_COMPONENTS` ids
    /// are taken.
    pub fn register<C: Component>(&mut self) -> Id {
        let type_id = TypeId::of::<C>();
        assert!(
            !self.ids.contains_key(&type_id),
            "component type {} is already registered",
            type_name::<C>()
        );
        assert!(
            self.stores.len() < MAX_COMPONENTS,
            "component type capacity exhausted ({MAX_COMPONENTS} types)"
        );

        let id = Id::from(self.stores.len());
        self.ids.insert(type_id, id);
        self.stores.push(Box::new(SparseSet::<C>::new()));
        log::debug!("registered component type {} as id {}", type_name::<C>(), id.index());
        id
    }

    /// The id assigned to a registered type. Panics if unregistered.
    pub fn id_of<C: Component>(&self) -> Id {
        *self
            .ids
            .get(&TypeId::of::<C>())
            .unwrap_or_else(|| panic!("component type {} is not registered", type_name::<C>()))
    }

    /// Number of registered component types.
    #[inline]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Store a value for the entity. Panics if the entity already holds one.
    pub fn insert<C: Component>(&mut self, entity: Entity, value: C) {
        self.store_mut::<C>().insert(entity, value);
    }

    /// Remove and return the entity's value. Panics if absent.
    pub fn remove<C: Component>(&mut self, entity: Entity) -> C {
        self.store_mut::<C>().remove(entity)
    }

    /// Whether the entity holds a value of this type.
    pub fn has<C: Component>(&self, entity: Entity) -> bool {
        self.store::<C>().has(entity)
    }

    /// Borrow the entity's value. Panics if absent.
    pub fn get<C: Component>(&self, entity: Entity) -> &C {
        self.store::<C>().get(entity)
    }

    /// Mutably borrow the entity's value. Panics if absent.
    pub fn get_mut<C: Component>(&mut self, entity: Entity) -> &mut C {
        self.store_mut::<C>().get_mut(entity)
    }

    /// Iterate `(entity, value)` pairs of one type in dense storage order.
    pub fn iter<C: Component>(&self) -> impl Iterator<Item = (Entity, &C)> {
        self.store::<C>().iter()
    }

    /// Sweep every store after an entity is destroyed. Stores that do not
    /// hold the entity treat this as a no-op.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for store in &mut self.stores {
            store.entity_destroyed(entity);
        }
    }

    fn store<C: Component>(&self) -> &SparseSet<C> {
        let id = self.id_of::<C>();
        self.stores[id.index()]
            .as_any()
            .downcast_ref::<SparseSet<C>>()
            .expect("store registered under a different type")
    }

    fn store_mut<C: Component>(&mut self) -> &mut SparseSet<C> {
        let id = self.id_of::<C>();
        self.stores[id.index()]
            .as_any_mut()
            .downcast_mut::<SparseSet<C>>()
            .expect("store registered under a different type")
    }
}
