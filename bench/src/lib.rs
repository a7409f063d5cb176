//! Shared fixtures for the husk_engine benchmarks.

use husk_engine::{
    components::{Renderable, Rigidbody, Transform},
    ecs::{Entity, World, component},
};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

/// Component ids of the fixture world, in registration order.
pub struct Ids {
    pub transform: component::Id,
    pub renderable: component::Id,
    pub rigidbody: component::Id,
}

/// A world with the benchmark component types registered.
pub fn fixture_world() -> (World, Ids) {
    let mut world = World::new();
    let ids = Ids {
        transform: world.register_component::<Transform>(),
        renderable: world.register_component::<Renderable>(),
        rigidbody: world.register_component::<Rigidbody>(),
    };
    (world, ids)
}

/// A fixture world populated with `count` entities holding a Renderable, in
/// a deterministic shuffled order for the removal benchmarks.
pub fn populated_world(count: usize) -> (World, Vec<Entity>) {
    let (mut world, _) = fixture_world();
    let mut entities: Vec<Entity> = (0..count)
        .map(|i| {
            let entity = world.create_entity();
            world.add_component(entity, Renderable { mesh: i as u32, texture: 0 });
            entity
        })
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    entities.shuffle(&mut rng);
    (world, entities)
}
