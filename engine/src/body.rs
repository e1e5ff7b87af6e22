use crate::shape::Shape;
use ballroom_shared::vec3::{vec3, Vec3};

/// A body in the generated scene: a movable ball or a static room fixture.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    pub shape: Shape,
    /// Assigned by placement; fixtures are constructed already placed.
    pub position: Option<Vec3>,
    pub velocity: Vec3,
    /// Packed 0xRRGGBB
    pub color: u32,
    pub is_static: bool,
}

impl Body {
    /// Movable ball, not yet placed.
    pub fn ball(id: u32, radius: f64, velocity: Vec3, color: u32) -> Self {
        Self {
            id,
            shape: Shape::Sphere { radius },
            position: None,
            velocity,
            color,
            is_static: false,
        }
    }

    /// Static fixture at a fixed position.
    pub fn fixture(id: u32, half_extents: Vec3, position: Vec3, color: u32) -> Self {
        Self {
            id,
            shape: Shape::Cuboid { half_extents },
            position: Some(position),
            velocity: vec3(0.0, 0.0, 0.0),
            color,
            is_static: true,
        }
    }
}

/// Fully saturated color for a hue in [0, 1).
pub fn color_from_hue(hue: f64) -> u32 {
    hsv_to_rgb(hue.rem_euclid(1.0) * 360.0, 1.0, 1.0)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> u32 {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let ri = ((r + m) * 255.0).round() as u32;
    let gi = ((g + m) * 255.0).round() as u32;
    let bi = ((b + m) * 255.0).round() as u32;

    (ri << 16) | (gi << 8) | bi
}
