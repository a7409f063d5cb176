//! The entity/component/system runtime.
//!
//! # Architecture
//!
//! The runtime is built from a handful of cooperating pieces, all owned by
//! the [`World`] facade:
//!
//! - **[`entity::Allocator`]**: FIFO identity pool, name bindings, and the
//!   per-slot component mask table.
//! - **[`component::Registry`]**: assigns each component type a stable small
//!   id (its mask bit) and owns one dense store per type.
//! - **[`storage::SparseSet`]**: per-type dense storage with O(1) insert and
//!   swap-based removal.
//! - **[`system::Registry`]**: registered systems, their interest masks, and
//!   their incrementally maintained membership sets.
//!
//! Mutations flow through the [`World`], which keeps the mask table and
//! every system's membership consistent after each single operation.
//!
//! The runtime is single-threaded and capacity-bounded: entity and component
//! type counts are fixed at [`MAX_ENTITIES`] and [`MAX_COMPONENTS`], and all
//! precondition violations fail fast with a panic rather than returning a
//! recoverable error.

pub mod component;
pub mod entity;
pub mod storage;
pub mod system;
pub mod world;

pub use component::{Component, Mask};
pub use entity::Entity;
pub use system::System;
pub use world::World;

/// Maximum number of simultaneously live entities. Allocation past this
/// bound is a fatal precondition failure.
pub const MAX_ENTITIES: usize = 4096;

/// Maximum number of registered component types. Also the width of every
/// component [`Mask`].
pub const MAX_COMPONENTS: usize = 32;
