use ballroom_shared::vec3::{add, component, sub, vec3, Axis, Vec3};
use rand::Rng;

/// Axis-aligned spawn region.
///
/// Invariant: min[i] <= max[i] on every axis (enforced by config validation
/// before a volume is built).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnVolume {
    pub min: Vec3,
    pub max: Vec3,
}

impl SpawnVolume {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Region shrunk inward by a body's extent so the whole body stays inside
    /// the nominal bounds. Fails with the first axis whose shrunk range
    /// inverts; a zero-width axis stays valid.
    pub fn effective(&self, extent: Vec3) -> Result<SpawnVolume, Axis> {
        let min = add(self.min, extent);
        let max = sub(self.max, extent);
        for axis in Axis::ALL {
            if component(min, axis) > component(max, axis) {
                return Err(axis);
            }
        }
        Ok(SpawnVolume { min, max })
    }

    /// Uniform draw, each axis independent. Bounds are inclusive so a
    /// zero-width axis yields its single admissible coordinate.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        vec3(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
            rng.gen_range(self.min.z..=self.max.z),
        )
    }

    pub fn contains(&self, p: Vec3) -> bool {
        Axis::ALL.iter().all(|&axis| {
            component(p, axis) >= component(self.min, axis)
                && component(p, axis) <= component(self.max, axis)
        })
    }
}
