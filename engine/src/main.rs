use ballroom_engine::placement::place_all;
use ballroom_engine::scene::{build_manifest, build_room, spawn_volume};
use ballroom_engine::spawn::spawn_balls;
use ballroom_engine::world::CollisionWorld;
use ballroom_shared::config::{PlacementConfig, SceneConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    tracing_subscriber::fmt::init();

    let scene = SceneConfig::default();
    let placement = PlacementConfig::default();

    // Validate configuration before generating anything
    if let Err(e) = scene.validate() {
        eprintln!("Invalid scene configuration: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = placement.validate() {
        eprintln!("Invalid placement configuration: {}", e);
        std::process::exit(1);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(placement.rng_seed);

    let fixtures = build_room(1);
    let mut world = CollisionWorld::new();
    world.add_fixtures(&fixtures);

    let first_ball_id = 1 + fixtures.len() as u32;
    let mut balls = spawn_balls(&scene, first_ball_id, &mut rng);
    tracing::info!(count = balls.len(), "spawned balls");

    let volume = spawn_volume(&scene);
    if let Err(e) = place_all(&mut balls, &volume, &mut world, placement.max_trials, &mut rng) {
        eprintln!("Placement failed: {}", e);
        std::process::exit(1);
    }

    let mut bodies = fixtures;
    bodies.extend(balls);
    let manifest = build_manifest(placement.rng_seed, &volume, &bodies);
    println!("{}", serde_json::to_string_pretty(&manifest).unwrap());

    tracing::info!(
        bodies = manifest.bodies.len(),
        seed = placement.rng_seed,
        "scene manifest written"
    );
}
