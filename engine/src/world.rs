use crate::body::Body;
use crate::shape::{shapes_overlap, Shape};
use ballroom_shared::vec3::Vec3;

/// Overlap-test capability consumed by the placement sampler.
///
/// `overlaps` must be cheap and repeatable (no simulation time advances);
/// `commit` registers a body so later queries see it.
pub trait OverlapOracle {
    /// Whether `body` at `position` intersects any registered collider other
    /// than itself.
    fn overlaps(&self, body: &Body, position: Vec3) -> bool;

    /// Register `body` at `position` for subsequent queries.
    fn commit(&mut self, body: &Body, position: Vec3);
}

#[derive(Debug, Clone, Copy)]
struct Collider {
    id: u32,
    shape: Shape,
    position: Vec3,
}

/// Flat collider registry. Pairwise tests are fine at this scene size.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register already-placed static bodies ahead of placement.
    pub fn add_fixtures(&mut self, fixtures: &[Body]) {
        for fixture in fixtures {
            match fixture.position {
                Some(position) => self.commit(fixture, position),
                None => tracing::warn!(id = fixture.id, "skipping fixture without a position"),
            }
        }
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

impl OverlapOracle for CollisionWorld {
    fn overlaps(&self, body: &Body, position: Vec3) -> bool {
        self.colliders
            .iter()
            .any(|c| c.id != body.id && shapes_overlap(&c.shape, c.position, &body.shape, position))
    }

    fn commit(&mut self, body: &Body, position: Vec3) {
        self.colliders.push(Collider {
            id: body.id,
            shape: body.shape,
            position,
        });
    }
}
