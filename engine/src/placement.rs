use crate::body::Body;
use crate::error::PlacementError;
use crate::volume::SpawnVolume;
use crate::world::OverlapOracle;
use rand::Rng;

/// Place every body, in order, inside `volume` by rejection sampling:
/// candidates overlapping earlier-placed bodies or pre-registered static
/// geometry are discarded until one is accepted or `max_trials` candidates
/// have been tested for that body.
///
/// All draws come from the caller's RNG, so a fixed seed and body order
/// reproduce the exact candidate sequence, rejections included. On failure
/// the error propagates immediately; bodies placed earlier keep their
/// positions and stay registered with the oracle.
pub fn place_all(
    bodies: &mut [Body],
    volume: &SpawnVolume,
    oracle: &mut impl OverlapOracle,
    max_trials: u32,
    rng: &mut impl Rng,
) -> Result<(), PlacementError> {
    for body in bodies.iter_mut() {
        let effective = volume
            .effective(body.shape.extent())
            .map_err(|axis| PlacementError::VolumeTooSmall { id: body.id, axis })?;

        let mut accepted = None;
        for trial in 1..=max_trials {
            let candidate = effective.sample(rng);
            if !oracle.overlaps(body, candidate) {
                tracing::debug!(id = body.id, trial, "placed body");
                accepted = Some(candidate);
                break;
            }
            tracing::trace!(id = body.id, trial, "candidate overlaps, retrying");
        }

        match accepted {
            Some(position) => {
                body.position = Some(position);
                oracle.commit(body, position);
            }
            None => {
                return Err(PlacementError::Exhausted {
                    id: body.id,
                    trials: max_trials,
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::CollisionWorld;
    use ballroom_shared::vec3::{vec3, Axis, Vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::{Cell, RefCell};

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn room_volume() -> SpawnVolume {
        SpawnVolume::new(vec3(-1.0, -1.0, 0.0), vec3(1.0, 1.0, 0.2))
    }

    fn balls(n: u32) -> Vec<Body> {
        (0..n)
            .map(|i| Body::ball(i + 1, 0.1, vec3(0.0, 0.0, 0.0), 0xffffff))
            .collect()
    }

    /// Oracle that rejects every candidate, counting the probes.
    struct AlwaysOverlap {
        checks: Cell<u32>,
    }

    impl OverlapOracle for AlwaysOverlap {
        fn overlaps(&self, _body: &Body, _position: Vec3) -> bool {
            self.checks.set(self.checks.get() + 1);
            true
        }

        fn commit(&mut self, _body: &Body, _position: Vec3) {
            unreachable!("nothing is ever accepted");
        }
    }

    /// Oracle that rejects the first `reject` probes of the run and records
    /// every probed candidate.
    struct Recording {
        reject: u32,
        checks: Cell<u32>,
        probes: RefCell<Vec<(u32, Vec3)>>,
    }

    impl Recording {
        fn new(reject: u32) -> Self {
            Self {
                reject,
                checks: Cell::new(0),
                probes: RefCell::new(Vec::new()),
            }
        }
    }

    impl OverlapOracle for Recording {
        fn overlaps(&self, body: &Body, position: Vec3) -> bool {
            self.probes.borrow_mut().push((body.id, position));
            let n = self.checks.get() + 1;
            self.checks.set(n);
            n <= self.reject
        }

        fn commit(&mut self, _body: &Body, _position: Vec3) {}
    }

    #[test]
    fn single_ball_lands_in_the_effective_volume() {
        let mut rng = test_rng();
        let mut world = CollisionWorld::new();
        let mut bodies = balls(1);
        place_all(&mut bodies, &room_volume(), &mut world, 100, &mut rng).unwrap();

        let p = bodies[0].position.expect("ball should be placed");
        assert!((-0.9..=0.9).contains(&p.x));
        assert!((-0.9..=0.9).contains(&p.y));
        assert_eq!(p.z, 0.1);
        assert_eq!(world.collider_count(), 1);
    }

    #[test]
    fn placed_bodies_avoid_each_other() {
        let mut rng = test_rng();
        let mut world = CollisionWorld::new();
        let mut bodies = balls(8);
        place_all(&mut bodies, &room_volume(), &mut world, 100, &mut rng).unwrap();

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let pa = a.position.unwrap();
                let pb = b.position.unwrap();
                assert!(
                    !crate::shape::shapes_overlap(&a.shape, pa, &b.shape, pb),
                    "bodies {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }

    #[test]
    fn same_seed_reproduces_identical_positions() {
        let run = || {
            let mut rng = test_rng();
            let mut world = CollisionWorld::new();
            let mut bodies = balls(6);
            place_all(&mut bodies, &room_volume(), &mut world, 100, &mut rng).unwrap();
            bodies
                .iter()
                .map(|b| b.position.unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn same_seed_reproduces_rejected_candidates_too() {
        let run = || {
            let mut rng = test_rng();
            let mut oracle = Recording::new(5);
            let mut bodies = balls(2);
            place_all(&mut bodies, &room_volume(), &mut oracle, 100, &mut rng).unwrap();
            oracle.probes.into_inner()
        };
        let first = run();
        let second = run();
        // 5 rejections plus the acceptance for body 1, one probe for body 2.
        assert_eq!(first.len(), 7);
        assert!(first[..6].iter().all(|(id, _)| *id == 1));
        assert_eq!(first[6].0, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn exhaustion_fails_after_exactly_max_trials_probes() {
        let mut rng = test_rng();
        let mut oracle = AlwaysOverlap {
            checks: Cell::new(0),
        };
        let mut bodies = balls(3);
        let err = place_all(&mut bodies, &room_volume(), &mut oracle, 100, &mut rng).unwrap_err();
        assert_eq!(err, PlacementError::Exhausted { id: 1, trials: 100 });
        // The budget is spent on the first body alone; later bodies never
        // draw a candidate.
        assert_eq!(oracle.checks.get(), 100);
        assert!(bodies.iter().all(|b| b.position.is_none()));
    }

    #[test]
    fn oversized_body_fails_fast_without_sampling() {
        let mut rng = test_rng();
        let mut world = CollisionWorld::new();
        // Extent 0.2 exceeds half the z height (0.1).
        let mut bodies = vec![Body::ball(9, 0.2, vec3(0.0, 0.0, 0.0), 0xffffff)];
        let err = place_all(&mut bodies, &room_volume(), &mut world, 100, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PlacementError::VolumeTooSmall {
                id: 9,
                axis: Axis::Z
            }
        );
        assert!(bodies[0].position.is_none());
        assert_eq!(world.collider_count(), 0);
    }

    #[test]
    fn earlier_placements_survive_a_later_failure() {
        let mut rng = test_rng();
        let mut world = CollisionWorld::new();
        let mut bodies = vec![
            Body::ball(1, 0.1, vec3(0.0, 0.0, 0.0), 0xffffff),
            Body::ball(2, 0.2, vec3(0.0, 0.0, 0.0), 0xffffff),
        ];
        let err = place_all(&mut bodies, &room_volume(), &mut world, 100, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PlacementError::VolumeTooSmall {
                id: 2,
                axis: Axis::Z
            }
        );
        // No rollback: the first ball stays placed and registered.
        assert!(bodies[0].position.is_some());
        assert_eq!(world.collider_count(), 1);
    }
}
