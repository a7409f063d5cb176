//! The World is the facade over the whole runtime.
//!
//! A `World` owns the entity [`Allocator`](entity::Allocator), the component
//! [`Registry`](component::Registry), and the system
//! [`Registry`](system::Registry), and is the only place the three are wired
//! together. Every mutation goes through it under a strict ordering so that
//! hooks always observe a consistent view:
//!
//! - **add**: storage insert, then mask write, then notification - an added
//!   hook can already read the new value.
//! - **remove**: mask write, then notification, then storage removal - a
//!   removal hook can still read the last value.
//! - **destroy**: notification with the final mask first, then identity
//!   free, then the storage sweep.
//!
//! # Example
//!
//! ```ignore
//! use std::{cell::RefCell, rc::Rc};
//! use husk_engine::{components::Transform, ecs::{Mask, System, World}};
//!
//! struct Mover;
//! impl System for Mover {}
//!
//! let mut world = World::new();
//! let transform = world.register_component::<Transform>();
//! world.register_system(Rc::new(RefCell::new(Mover)), Mask::of([transform]));
//!
//! let player = world.create_entity_named("player");
//! assert!(world.system_members::<Mover>().contains(&player));
//! ```

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use log::debug;

use crate::{
    components::Transform,
    ecs::{
        component::{self, Component, Mask},
        entity::{self, Entity},
        system::{self, System},
    },
};

/// The central container for entities, component stores, and systems.
///
/// Capacities are fixed: [`MAX_ENTITIES`](crate::ecs::MAX_ENTITIES) live
/// entities and [`MAX_COMPONENTS`](crate::ecs::MAX_COMPONENTS) registered
/// types. All component types must be registered before the first entity is
/// created. Mutation entry points are non-reentrant: hooks fired during
/// notification must not mutate the world.
pub struct World {
    /// Entity identity, names, and the component mask table.
    entities: entity::Allocator,

    /// Component type ids and per-type stores.
    components: component::Registry,

    /// Registered systems with interest masks and membership sets.
    systems: system::Registry,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: entity::Allocator::new(),
            components: component::Registry::new(),
            systems: system::Registry::new(),
        }
    }

    // --- Entities ---

    /// Create an entity with a default [`Transform`] attached.
    ///
    /// Panics if entity capacity is exhausted or `Transform` is not
    /// registered.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.entities.alloc();
        debug!("created entity {}", entity.id());
        self.add_component(entity, Transform::default());
        entity
    }

    /// Create a named entity with a default [`Transform`] attached.
    ///
    /// Panics additionally if the name is already bound.
    pub fn create_entity_named(&mut self, name: &str) -> Entity {
        let entity = self.entities.alloc_named(name);
        debug!("created entity {} ({name:?})", entity.id());
        self.add_component(entity, Transform::default());
        entity
    }

    /// Destroy an entity: notify systems with its final mask, free the id
    /// (mask reset, name unbound), then sweep every component store.
    ///
    /// Notification precedes teardown so removal hooks can still read the
    /// entity's components.
    pub fn destroy_entity(&mut self, entity: Entity) {
        let final_mask = self.entities.mask(entity).clone();
        self.systems.entity_destroyed(entity, &final_mask);
        self.entities.free(entity);
        self.components.entity_destroyed(entity);
        debug!("destroyed entity {}", entity.id());
    }

    /// Bind a name to an entity. Panics on a duplicate name.
    pub fn set_entity_name(&mut self, entity: Entity, name: &str) {
        self.entities.set_name(entity, name);
    }

    /// The name bound to an entity. Panics if unnamed.
    pub fn entity_name(&self, entity: Entity) -> &str {
        self.entities.name(entity)
    }

    /// The entity bound to a name. Panics if unknown.
    pub fn find_entity(&self, name: &str) -> Entity {
        self.entities.find(name)
    }

    /// Number of currently live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.live()
    }

    // --- Component types ---

    /// Register a component type. Must happen before the first entity is
    /// created; panics on duplicate registration or type-capacity
    /// exhaustion.
    pub fn register_component<C: Component>(&mut self) -> component::Id {
        self.components.register::<C>()
    }

    /// The id of a registered component type. Panics if unregistered.
    pub fn component_id<C: Component>(&self) -> component::Id {
        self.components.id_of::<C>()
    }

    // --- Components ---

    /// Attach a component value to an entity.
    ///
    /// Storage is updated before the mask write and notification, so an
    /// added hook can already read the value. Panics if the type is
    /// unregistered or the entity already holds it.
    pub fn add_component<C: Component>(&mut self, entity: Entity, value: C) {
        let id = self.components.id_of::<C>();
        self.components.insert(entity, value);

        let old = self.entities.mask(entity).clone();
        let mut new = old.clone();
        new.set(id, true);
        self.entities.set_mask(entity, new.clone());

        self.systems.mask_changed(entity, &old, &new, id);
    }

    /// Detach a component from an entity and return its last value.
    ///
    /// The mask write and notification happen before storage removal, so a
    /// removal hook can still read the value. Panics if the type is
    /// unregistered or the entity does not hold it.
    pub fn remove_component<C: Component>(&mut self, entity: Entity) -> C {
        let id = self.components.id_of::<C>();
        let old = self.entities.mask(entity).clone();
        let mut new = old.clone();
        new.set(id, false);
        self.entities.set_mask(entity, new.clone());

        self.systems.mask_changed(entity, &old, &new, id);
        self.components.remove(entity)
    }

    /// Whether the entity holds a component of type `C`.
    pub fn has_component<C: Component>(&self, entity: Entity) -> bool {
        self.components.has::<C>(entity)
    }

    /// Borrow an entity's component. Panics if absent.
    pub fn get_component<C: Component>(&self, entity: Entity) -> &C {
        self.components.get(entity)
    }

    /// Mutably borrow an entity's component. Panics if absent.
    pub fn get_component_mut<C: Component>(&mut self, entity: Entity) -> &mut C {
        self.components.get_mut(entity)
    }

    /// Iterate every `(entity, value)` pair of type `C` in dense storage
    /// order.
    pub fn iter_components<C: Component>(&self) -> impl Iterator<Item = (Entity, &C)> {
        self.components.iter::<C>()
    }

    // --- Systems ---

    /// Register a caller-owned system with its permanent interest mask.
    /// Panics if a system of the same type is already registered.
    pub fn register_system<S: System + 'static>(&mut self, system: Rc<RefCell<S>>, interest: Mask) {
        self.systems.register(system, interest);
    }

    /// The entities system `S` is currently tracking: those holding at least
    /// one component in its interest mask. Panics if `S` is unregistered.
    pub fn system_members<S: System + 'static>(&self) -> &BTreeSet<Entity> {
        self.systems.members::<S>()
    }
}
