use landing_core::{OrbitParams, OrbitState};
use std::f32::consts::FRAC_PI_4;

const DT: f32 = 1.0 / 60.0;

fn no_auto() -> OrbitParams {
    OrbitParams {
        auto_rotate_rad_per_sec: 0.0,
        ..OrbitParams::default()
    }
}

#[test]
fn initial_camera_sits_on_positive_z() {
    let orbit = OrbitState::new(5.0, OrbitParams::default());
    let eye = orbit.eye();
    assert!((eye.x).abs() < 1e-5);
    assert!((eye.y).abs() < 1e-5);
    assert!((eye.z - 5.0).abs() < 1e-5);
}

#[test]
fn auto_rotation_advances_azimuth_at_the_configured_rate() {
    let params = OrbitParams {
        auto_rotate_rad_per_sec: 0.5,
        ..OrbitParams::default()
    };
    let mut orbit = OrbitState::new(5.0, params);
    orbit.update(1.0);
    assert!((orbit.azimuth() + 0.5).abs() < 1e-5);
    orbit.update(1.0);
    assert!((orbit.azimuth() + 1.0).abs() < 1e-5);
}

#[test]
fn radius_never_changes() {
    // Zoom is disabled: no amount of input may alter the orbit distance.
    let mut orbit = OrbitState::new(5.0, OrbitParams::default());
    for i in 0..120 {
        orbit.rotate_by_pixels((i % 13) as f32, (i % 7) as f32, 600.0);
        orbit.pan_by_pixels(3.0, -2.0, 600.0, FRAC_PI_4);
        orbit.update(DT);
        let dist = (orbit.eye() - orbit.look_target()).length();
        assert!((dist - 5.0).abs() < 1e-4, "radius drifted to {dist}");
    }
    assert!((orbit.radius() - 5.0).abs() < f32::EPSILON);
}

#[test]
fn drag_velocity_decays_under_damping() {
    let mut orbit = OrbitState::new(5.0, no_auto());
    orbit.rotate_by_pixels(120.0, 0.0, 600.0);

    let mut steps = Vec::new();
    let mut prev = orbit.azimuth();
    for _ in 0..30 {
        orbit.update(DT);
        steps.push((orbit.azimuth() - prev).abs());
        prev = orbit.azimuth();
    }
    // Early motion must dominate late motion.
    assert!(steps[0] > 0.0);
    assert!(steps[29] < steps[0] * 0.5, "damping too weak: {steps:?}");
}

#[test]
fn polar_angle_stays_clamped_off_the_poles() {
    let params = no_auto();
    let mut orbit = OrbitState::new(5.0, params);
    // Huge vertical drag in both directions.
    orbit.rotate_by_pixels(0.0, 100_000.0, 600.0);
    for _ in 0..60 {
        orbit.update(DT);
        assert!(orbit.polar() >= params.min_polar && orbit.polar() <= params.max_polar);
    }
    orbit.rotate_by_pixels(0.0, -200_000.0, 600.0);
    for _ in 0..60 {
        orbit.update(DT);
        assert!(orbit.polar() >= params.min_polar && orbit.polar() <= params.max_polar);
    }
}

#[test]
fn pan_moves_eye_and_target_together() {
    let mut orbit = OrbitState::new(5.0, no_auto());
    let offset_before = orbit.eye() - orbit.look_target();
    orbit.pan_by_pixels(40.0, -25.0, 600.0, FRAC_PI_4);
    let offset_after = orbit.eye() - orbit.look_target();
    assert!((offset_before - offset_after).length() < 1e-5);
    // The pan itself must have moved the target.
    assert!(orbit.pan().length() > 0.0);
}
