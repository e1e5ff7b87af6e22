use ballroom_shared::vec3::{length, sub, vec3, Vec3};

/// Convex bounding shape of a body.
///
/// The closed set of shapes the generator knows how to place and overlap-test.
/// Extents are half-sizes along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f64 },
    Cuboid { half_extents: Vec3 },
}

impl Shape {
    /// Half-size of the shape along each axis.
    pub fn extent(&self) -> Vec3 {
        match *self {
            Shape::Sphere { radius } => vec3(radius, radius, radius),
            Shape::Cuboid { half_extents } => half_extents,
        }
    }
}

/// Whether two shapes at the given centers overlap.
/// Exact surface contact does not count as overlap.
pub fn shapes_overlap(a: &Shape, a_pos: Vec3, b: &Shape, b_pos: Vec3) -> bool {
    match (*a, *b) {
        (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) => {
            length(sub(b_pos, a_pos)) < ra + rb
        }
        (Shape::Sphere { radius }, Shape::Cuboid { half_extents }) => {
            sphere_cuboid_overlap(a_pos, radius, b_pos, half_extents)
        }
        (Shape::Cuboid { half_extents }, Shape::Sphere { radius }) => {
            sphere_cuboid_overlap(b_pos, radius, a_pos, half_extents)
        }
        (Shape::Cuboid { half_extents: ha }, Shape::Cuboid { half_extents: hb }) => {
            (b_pos.x - a_pos.x).abs() < ha.x + hb.x
                && (b_pos.y - a_pos.y).abs() < ha.y + hb.y
                && (b_pos.z - a_pos.z).abs() < ha.z + hb.z
        }
    }
}

fn sphere_cuboid_overlap(center: Vec3, radius: f64, box_pos: Vec3, half: Vec3) -> bool {
    // Squared distance from the sphere center to the closest point of the box.
    let dx = ((center.x - box_pos.x).abs() - half.x).max(0.0);
    let dy = ((center.y - box_pos.y).abs() - half.y).max(0.0);
    let dz = ((center.z - box_pos.z).abs() - half.z).max(0.0);
    dx * dx + dy * dy + dz * dz < radius * radius
}
