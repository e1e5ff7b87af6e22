use crate::body::{color_from_hue, Body};
use ballroom_shared::config::SceneConfig;
use ballroom_shared::vec3::{vec3, Vec3};
use rand::Rng;

/// Create the randomized ball set for one scene.
///
/// Draw order is fixed (count, then per ball: hue, velocity) so one seed
/// reproduces the whole population.
pub fn spawn_balls(scene: &SceneConfig, first_id: u32, rng: &mut impl Rng) -> Vec<Body> {
    let count = rng.gen_range(scene.min_balls..scene.max_balls);
    let mut balls = Vec::with_capacity(count as usize);
    for i in 0..count {
        let color = color_from_hue(rng.gen::<f64>());
        let velocity = sample_velocity(scene, rng);
        balls.push(Body::ball(first_id + i, scene.ball_radius, velocity, color));
    }
    tracing::debug!(count, "spawned ball set");
    balls
}

fn sample_velocity(scene: &SceneConfig, rng: &mut impl Rng) -> Vec3 {
    vec3(
        rng.gen_range(scene.velocity_min.x..=scene.velocity_max.x),
        rng.gen_range(scene.velocity_min.y..=scene.velocity_max.y),
        rng.gen_range(scene.velocity_min.z..=scene.velocity_max.z),
    )
}
