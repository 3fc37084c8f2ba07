use landing_core::{FieldParams, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

#[test]
fn pool_size_is_constant_and_depth_stays_bounded() {
    let params = FieldParams {
        count: 200,
        ..FieldParams::default()
    };
    let mut rng = rng();
    let mut field = ParticleField::new(params, &mut rng);
    assert_eq!(field.len(), 200);

    for frame in 0..2000 {
        field.step(&mut rng);
        assert_eq!(field.len(), 200, "pool resized at frame {frame}");
        for p in field.positions() {
            assert!(
                p.z >= params.spawn_depth && p.z <= params.wrap_depth,
                "depth {} out of range at frame {frame}",
                p.z
            );
            assert!(p.x.abs() <= params.half_extent);
            assert!(p.y.abs() <= params.half_extent);
        }
    }
}

#[test]
fn wrapped_particle_respawns_at_the_far_plane() {
    // Single fast particle so the wrap is reached quickly and observably.
    let params = FieldParams {
        count: 1,
        speed_min: 0.9,
        speed_max: 1.0,
        ..FieldParams::default()
    };
    let mut rng = rng();
    let mut field = ParticleField::new(params, &mut rng);

    let mut wrapped = false;
    let mut prev_z = field.positions()[0].z;
    for _ in 0..200 {
        field.step(&mut rng);
        let z = field.positions()[0].z;
        if z < prev_z {
            // Depth only ever decreases by recycling.
            assert_eq!(z, params.spawn_depth);
            wrapped = true;
            break;
        }
        prev_z = z;
    }
    assert!(wrapped, "particle never recycled");
}

#[test]
fn wrap_thresholds_are_configurable() {
    let params = FieldParams {
        count: 50,
        half_extent: 10.0,
        wrap_depth: 10.0,
        spawn_depth: -20.0,
        speed_min: 0.5,
        speed_max: 1.0,
        advance_factor: 3.0,
    };
    let mut rng = rng();
    let mut field = ParticleField::new(params, &mut rng);
    for _ in 0..500 {
        field.step(&mut rng);
        for p in field.positions() {
            assert!(p.z >= -20.0 && p.z <= 10.0);
            assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0);
        }
    }
}

#[test]
fn stepping_never_reallocates_the_pool() {
    let mut rng = rng();
    let mut field = ParticleField::new(
        FieldParams {
            count: 100,
            ..FieldParams::default()
        },
        &mut rng,
    );
    let before = field.positions().as_ptr();
    for _ in 0..100 {
        field.step(&mut rng);
    }
    assert_eq!(before, field.positions().as_ptr());
}
