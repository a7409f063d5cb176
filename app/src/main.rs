//! Demo scene driving the full husk_engine facade: component registration,
//! hook-bearing systems, entity naming, component churn, and destruction.

use std::{cell::RefCell, rc::Rc};

use husk_engine::{
    components::{AudioEmitter, Camera, Light, Renderable, Rigidbody, Scriptable, Transform},
    ecs::{Entity, Mask, System, World, component},
};

/// Draws everything that has a placement and an appearance.
#[derive(Default)]
struct RenderSystem {
    uploads: u32,
}

impl System for RenderSystem {
    fn on_component_added(&mut self, entity: Entity, component: component::Id) {
        self.uploads += 1;
        log::info!(
            "render: uploading resources for entity {} (component {})",
            entity.id(),
            component.index()
        );
    }

    fn on_component_removed(&mut self, entity: Entity, component: component::Id) {
        log::info!(
            "render: releasing resources for entity {} (component {})",
            entity.id(),
            component.index()
        );
    }
}

/// Steps everything that has a placement and a body.
#[derive(Default)]
struct PhysicsSystem;

impl System for PhysicsSystem {
    fn on_component_added(&mut self, entity: Entity, _component: component::Id) {
        log::info!("physics: tracking entity {}", entity.id());
    }

    fn on_component_removed(&mut self, entity: Entity, _component: component::Id) {
        log::info!("physics: dropping entity {}", entity.id());
    }
}

fn main() {
    env_logger::init();

    let mut world = World::new();

    // All component types register before the first entity exists.
    let transform = world.register_component::<Transform>();
    let renderable = world.register_component::<Renderable>();
    world.register_component::<Camera>();
    world.register_component::<Light>();
    let rigidbody = world.register_component::<Rigidbody>();
    world.register_component::<AudioEmitter>();
    world.register_component::<Scriptable>();

    let render = Rc::new(RefCell::new(RenderSystem::default()));
    let physics = Rc::new(RefCell::new(PhysicsSystem));
    world.register_system(render.clone(), Mask::of([transform, renderable]));
    world.register_system(physics, Mask::of([transform, rigidbody]));

    // A camera, a light, and a handful of crates.
    let camera = world.create_entity_named("main_camera");
    world.add_component(camera, Camera { fov: 70.0, near: 0.1, far: 200.0 });

    let sun = world.create_entity_named("sun");
    world.add_component(sun, Light { color: [1.0, 0.95, 0.8], intensity: 3.2 });

    for i in 0..4 {
        let crate_entity = world.create_entity_named(&format!("crate_{i}"));
        world.add_component(crate_entity, Renderable { mesh: 1, texture: 7 });
        world.add_component(
            crate_entity,
            Rigidbody { mass: 10.0, restitution: 0.3, is_static: false },
        );
        world.get_component_mut::<Transform>(crate_entity).position = [i as f32 * 2.0, 0.0, 0.0];
    }

    // Fake a render pass over the render system's membership.
    for &entity in world.system_members::<RenderSystem>() {
        let placement = world.get_component::<Transform>(entity);
        let appearance = world.get_component::<Renderable>(entity);
        println!(
            "draw {} mesh={} at {:?}",
            world.entity_name(entity),
            appearance.mesh,
            placement.position
        );
    }

    // Knock one crate out of the scene and freeze another.
    let broken = world.find_entity("crate_2");
    world.destroy_entity(broken);
    let frozen = world.find_entity("crate_3");
    world.remove_component::<Rigidbody>(frozen);

    println!(
        "{} entities live, {} renderable, {} uploads so far",
        world.entity_count(),
        world.system_members::<RenderSystem>().len(),
        render.borrow().uploads
    );
}
