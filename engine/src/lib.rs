//! husk_engine - a fixed-capacity entity/component/system runtime.
//!
//! The engine manages identity and lifecycle for a bounded universe of
//! entities, stores component payloads per entity in dense, cache-friendly
//! sparse sets, and keeps each registered system's set of matching entities
//! correct after every mutation without rescans.
//!
//! The [`ecs`] module holds the runtime itself; [`components`] holds the
//! built-in payload types consumed by external subsystems.

pub mod components;
pub mod ecs;

pub use ecs::{Component, Entity, Mask, System, World};
