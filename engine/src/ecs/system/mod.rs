//! Systems and interest tracking.
//!
//! A system is an external logic unit that declares, once, a mask of the
//! component types it cares about. The [`Registry`] keeps one membership set
//! per system and maintains it incrementally on every single-bit mask
//! change, so no mutation ever requires a rescan. An entity joins the set
//! when it gains its first interesting component and leaves when it loses
//! its last one; in between, hooks fire per interesting bit.
//!
//! System instances stay owned by the caller; the registry holds a shared
//! `Rc<RefCell<dyn System>>` handle and only invokes the two optional hooks.
//! The per-tick iteration over a membership set is driven externally.
//!
//! # Reentrancy
//!
//! Hooks fire in the middle of a mutation, between the mask write and the
//! storage update. A hook must not add, remove, or destroy components on the
//! notifying world; doing so would corrupt the in-progress bookkeeping.

use std::{
    any::{TypeId, type_name},
    cell::RefCell,
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

use crate::ecs::{
    component::{self, Mask},
    entity::Entity,
};

/// External logic notified as entities gain and lose components it declared
/// interest in. Both hooks default to no-ops.
pub trait System {
    /// An interesting component was added to `entity`. When the component is
    /// the entity's first interesting one, this fires just before the entity
    /// enters the membership set.
    fn on_component_added(&mut self, entity: Entity, component: component::Id) {
        let _ = (entity, component);
    }

    /// An interesting component was removed from `entity` (or the entity was
    /// destroyed while holding it). Fires while the component's value is
    /// still readable from storage.
    fn on_component_removed(&mut self, entity: Entity, component: component::Id) {
        let _ = (entity, component);
    }
}

/// One registered system: the caller-owned instance, its permanent interest
/// mask, and its continuously correct membership set.
struct Entry {
    system: Rc<RefCell<dyn System>>,
    interest: Mask,
    members: BTreeSet<Entity>,
}

/// Registry of systems and their interest masks.
pub struct Registry {
    /// Map from system type to entry index; one registration per type.
    ids: HashMap<TypeId, usize>,
    entries: Vec<Entry>,
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
            entries: Vec::new(),
        }
    }

    /// Register a system with its permanent interest mask.
    ///
    /// Panics if a system of the same type is already registered.
    pub fn register<S: System + 'static>(&mut self, system: Rc<RefCell<S>>, interest: Mask) {
        let type_id = TypeId::of::<S>();
        assert!(
            !self.ids.contains_key(&type_id),
            "system {} is already registered",
            type_name::<S>()
        );
        self.ids.insert(type_id, self.entries.len());
        self.entries.push(Entry {
            system,
            interest,
            members: BTreeSet::new(),
        });
        log::debug!("registered system {}", type_name::<S>());
    }

    /// The membership set of system `S`: every entity currently holding at
    /// least one component in its interest mask. Panics if `S` is
    /// unregistered.
    pub fn members<S: System + 'static>(&self) -> &BTreeSet<Entity> {
        let index = *self
            .ids
            .get(&TypeId::of::<S>())
            .unwrap_or_else(|| panic!("system {} is not registered", type_name::<S>()));
        &self.entries[index].members
    }

    /// Diff a single-bit mask change against every system's interest and
    /// update hooks and membership accordingly.
    ///
    /// `old` and `new` must differ in exactly the bit `changed`. The add /
    /// remove decision compares the relevant masks as unsigned integers,
    /// which is only valid for a one-bit delta (see [`Mask::value_cmp`]).
    pub fn mask_changed(&mut self, entity: Entity, old: &Mask, new: &Mask, changed: component::Id) {
        for entry in &mut self.entries {
            let old_relevant = old.intersection(&entry.interest);
            let new_relevant = new.intersection(&entry.interest);

            match new_relevant.value_cmp(&old_relevant) {
                Ordering::Greater => {
                    // An interesting component was added.
                    entry.system.borrow_mut().on_component_added(entity, changed);
                    if old_relevant.is_empty() {
                        // First interesting component: the entity joins.
                        entry.members.insert(entity);
                    }
                }
                Ordering::Less => {
                    // An interesting component was removed.
                    entry
                        .system
                        .borrow_mut()
                        .on_component_removed(entity, changed);
                    if new_relevant.is_empty() {
                        // Last interesting component: the entity leaves.
                        entry.members.remove(&entity);
                    }
                }
                Ordering::Equal => {}
            }
        }
    }

    /// Final notification for a destroyed entity, before its storage is torn
    /// down. Every system whose interest intersects the entity's final mask
    /// gets `on_component_removed` per relevant bit, then loses the entity
    /// from membership.
    pub fn entity_destroyed(&mut self, entity: Entity, final_mask: &Mask) {
        for entry in &mut self.entries {
            let relevant = final_mask.intersection(&entry.interest);
            if relevant.is_empty() {
                continue;
            }
            {
                let mut system = entry.system.borrow_mut();
                for bit in relevant.ones() {
                    system.on_component_removed(entity, bit);
                }
            }
            entry.members.remove(&entity);
        }
    }
}
