use serde::{Deserialize, Serialize};

/// Manifest format version - increment when making breaking changes.
/// Downstream simulation/rendering stages check this before consuming a scene.
pub const MANIFEST_VERSION: u32 = 1;

/// Ground-truth description of one generated scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneManifest {
    pub version: u32,
    pub seed: u64,
    pub spawn_min: [f64; 3],
    pub spawn_max: [f64; 3],
    pub bodies: Vec<BodyWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyWire {
    pub id: u32,
    pub shape: ShapeWire,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub color: u32,
    #[serde(default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeWire {
    #[serde(rename = "sphere")]
    Sphere { radius: f64 },
    #[serde(rename = "cuboid", rename_all = "camelCase")]
    Cuboid { half_extents: [f64; 3] },
}
