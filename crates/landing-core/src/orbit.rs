//! Orbit-style camera state: damped pointer rotation, continuous
//! auto-rotation and screen-space panning around a fixed-radius target.
//! Zoom is deliberately absent; the radius set at construction never changes.

use crate::constants::{
    AUTO_ROTATE_RAD_PER_SEC, ORBIT_DAMPING, ORBIT_POLAR_MARGIN, ORBIT_ROTATE_SPEED,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[derive(Clone, Copy, Debug)]
pub struct OrbitParams {
    pub rotate_speed: f32,
    pub damping: f32,
    pub auto_rotate_rad_per_sec: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            rotate_speed: ORBIT_ROTATE_SPEED,
            damping: ORBIT_DAMPING,
            auto_rotate_rad_per_sec: AUTO_ROTATE_RAD_PER_SEC,
            min_polar: ORBIT_POLAR_MARGIN,
            max_polar: PI - ORBIT_POLAR_MARGIN,
        }
    }
}

pub struct OrbitState {
    params: OrbitParams,
    radius: f32,
    azimuth: f32,
    polar: f32,
    azimuth_delta: f32,
    polar_delta: f32,
    pan: Vec3,
    target: Vec3,
}

impl OrbitState {
    /// Camera starts on the +Z axis looking at the origin.
    pub fn new(radius: f32, params: OrbitParams) -> Self {
        Self {
            params,
            radius,
            azimuth: 0.0,
            polar: FRAC_PI_2,
            azimuth_delta: 0.0,
            polar_delta: 0.0,
            pan: Vec3::ZERO,
            target: Vec3::ZERO,
        }
    }

    /// Accumulate a pointer drag into the damped angular deltas. A drag of
    /// one full viewport height sweeps a whole turn at rotate speed 1.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.azimuth_delta -= TAU * dx / h * self.params.rotate_speed;
        self.polar_delta -= TAU * dy / h * self.params.rotate_speed;
    }

    /// Pan the target in camera-space right/up, preserving the apparent size
    /// of content at the target distance.
    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32, fovy_radians: f32) {
        let h = viewport_height.max(1.0);
        let world_per_px = 2.0 * self.radius * (fovy_radians * 0.5).tan() / h;
        let (right, up) = self.camera_basis();
        self.pan += right * (-dx * world_per_px) + up * (dy * world_per_px);
    }

    /// Apply pending deltas plus auto-rotation, then decay the deltas.
    pub fn update(&mut self, dt: f32) {
        self.azimuth += self.azimuth_delta - self.params.auto_rotate_rad_per_sec * dt;
        self.polar = (self.polar + self.polar_delta)
            .clamp(self.params.min_polar, self.params.max_polar);
        // Reference damping curve is per-frame at 60 Hz; keep it frame-rate
        // independent by exponentiating with dt.
        let retain = (1.0 - self.params.damping).powf(dt * 60.0);
        self.azimuth_delta *= retain;
        self.polar_delta *= retain;
    }

    fn spherical_offset(&self) -> Vec3 {
        Vec3::new(
            self.polar.sin() * self.azimuth.sin(),
            self.polar.cos(),
            self.polar.sin() * self.azimuth.cos(),
        ) * self.radius
    }

    fn camera_basis(&self) -> (Vec3, Vec3) {
        let forward = (-self.spherical_offset()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        (right, up)
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.pan + self.spherical_offset()
    }

    pub fn look_target(&self) -> Vec3 {
        self.target + self.pan
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.look_target(), Vec3::Y)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn pan(&self) -> Vec3 {
        self.pan
    }
}
