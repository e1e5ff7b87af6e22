use crate::vec3::{component, vec3, Axis, Vec3};

/// Scene content configuration: the spawn region and the randomized ball set.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub spawn_min: Vec3,
    pub spawn_max: Vec3,
    pub velocity_min: Vec3,
    pub velocity_max: Vec3,
    pub ball_radius: f64,
    /// Minimum number of balls (inclusive)
    pub min_balls: u32,
    /// Maximum number of balls (exclusive)
    pub max_balls: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn_min: vec3(-1.0, -1.0, 0.0),
            spawn_max: vec3(1.0, 1.0, 0.2),
            velocity_min: vec3(-1.0, -1.0, 0.0),
            velocity_max: vec3(1.0, 1.0, 0.0),
            ball_radius: 0.1,
            min_balls: 4,
            max_balls: 10,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), String> {
        for axis in Axis::ALL {
            let lo = component(self.spawn_min, axis);
            let hi = component(self.spawn_max, axis);
            if !lo.is_finite() || !hi.is_finite() {
                return Err(format!("spawn bounds must be finite on the {} axis", axis));
            }
            if lo > hi {
                return Err(format!("spawn_min must be <= spawn_max on the {} axis", axis));
            }
            let vlo = component(self.velocity_min, axis);
            let vhi = component(self.velocity_max, axis);
            if !vlo.is_finite() || !vhi.is_finite() {
                return Err(format!("velocity bounds must be finite on the {} axis", axis));
            }
            if vlo > vhi {
                return Err(format!(
                    "velocity_min must be <= velocity_max on the {} axis",
                    axis
                ));
            }
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err("ball_radius must be finite and > 0".to_string());
        }
        if self.min_balls == 0 {
            return Err("min_balls must be >= 1".to_string());
        }
        if self.max_balls <= self.min_balls {
            return Err("max_balls (exclusive) must be > min_balls".to_string());
        }
        Ok(())
    }
}

/// Placement configuration
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Candidate positions tested per body before placement fails
    pub max_trials: u32,
    pub rng_seed: u64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_trials: 100,
            rng_seed: 42,
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_trials == 0 {
            return Err("max_trials must be >= 1".to_string());
        }
        Ok(())
    }
}
