use crate::body::Body;
use crate::shape::Shape;
use crate::volume::SpawnVolume;
use ballroom_shared::config::SceneConfig;
use ballroom_shared::manifest::{BodyWire, SceneManifest, ShapeWire, MANIFEST_VERSION};
use ballroom_shared::vec3::{to_array, vec3, Vec3};

/// Flat-shaded room materials
pub const FLOOR_COLOR: u32 = 0x000000;
pub const WALL_COLOR: u32 = 0xffffff;

/// Static room fixtures: a 1m-scale box with the floor top at z = 0 and four
/// walls enclosing it.
pub fn build_room(first_id: u32) -> Vec<Body> {
    vec![
        Body::fixture(first_id, vec3(1.0, 1.0, 0.1), vec3(0.0, 0.0, -0.1), FLOOR_COLOR),
        Body::fixture(first_id + 1, vec3(1.2, 0.1, 1.0), vec3(0.0, 1.1, 0.9), WALL_COLOR),
        Body::fixture(first_id + 2, vec3(1.2, 0.1, 1.0), vec3(0.0, -1.1, 0.9), WALL_COLOR),
        Body::fixture(first_id + 3, vec3(0.1, 1.0, 1.0), vec3(1.1, 0.0, 0.9), WALL_COLOR),
        Body::fixture(first_id + 4, vec3(0.1, 1.0, 1.0), vec3(-1.1, 0.0, 0.9), WALL_COLOR),
    ]
}

/// Spawn region configured for the scene.
pub fn spawn_volume(scene: &SceneConfig) -> SpawnVolume {
    SpawnVolume::new(scene.spawn_min, scene.spawn_max)
}

/// Ground-truth manifest for the placed scene.
/// Bodies without an assigned position are skipped.
pub fn build_manifest(seed: u64, volume: &SpawnVolume, bodies: &[Body]) -> SceneManifest {
    SceneManifest {
        version: MANIFEST_VERSION,
        seed,
        spawn_min: to_array(volume.min),
        spawn_max: to_array(volume.max),
        bodies: bodies
            .iter()
            .filter_map(|body| body.position.map(|position| body_wire(body, position)))
            .collect(),
    }
}

fn body_wire(body: &Body, position: Vec3) -> BodyWire {
    BodyWire {
        id: body.id,
        shape: shape_wire(&body.shape),
        position: to_array(position),
        velocity: to_array(body.velocity),
        color: body.color,
        is_static: body.is_static,
    }
}

fn shape_wire(shape: &Shape) -> ShapeWire {
    match *shape {
        Shape::Sphere { radius } => ShapeWire::Sphere { radius },
        Shape::Cuboid { half_extents } => ShapeWire::Cuboid {
            half_extents: to_array(half_extents),
        },
    }
}
