//! Built-in payload component types.
//!
//! The runtime imposes no behavior on these: they are plain copyable values
//! registered and stored like any other component, consumed by external
//! render, physics, audio, and scripting subsystems. [`Transform`] is
//! special only in that the world attaches a default one to every created
//! entity.

use crate::ecs::component::Component;

/// Spatial placement. Attached to every entity on creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl Component for Transform {}

/// Visual appearance: opaque handles into external mesh and texture assets.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub mesh: u32,
    pub texture: u32,
}

impl Component for Renderable {}

/// Perspective camera parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Component for Camera {}

/// Light parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Component for Light {}

/// Physical body parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rigidbody {
    pub mass: f32,
    pub restitution: f32,
    pub is_static: bool,
}

impl Component for Rigidbody {}

/// Sphere collision volume.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SphereCollidable {
    pub center: [f32; 3],
    pub radius: f32,
}

impl Component for SphereCollidable {}

/// Axis-aligned box collision volume.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AabbCollidable {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Component for AabbCollidable {}

/// Capsule collision volume.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CapsuleCollidable {
    pub base: [f32; 3],
    pub tip: [f32; 3],
    pub radius: f32,
}

impl Component for CapsuleCollidable {}

/// Positional audio source: an opaque handle into external sound assets.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioEmitter {
    pub sound: u32,
    pub gain: f32,
    pub looping: bool,
}

impl Component for AudioEmitter {}

/// Audio listener orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioListener {
    pub forward: [f32; 3],
    pub up: [f32; 3],
}

impl Component for AudioListener {}

/// Script binding: an opaque handle into the external scripting subsystem.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Scriptable {
    pub script: u32,
}

impl Component for Scriptable {}
