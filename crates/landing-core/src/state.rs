//! Viewer scene state: projection, orbit controls and the model slot.
//!
//! The model slot is a one-shot state machine. It leaves `Empty` exactly once
//! and both `Loaded` and `Failed` are terminal, so a failed fetch leaves the
//! page in a permanent (but still interactive) degraded state and a loaded
//! model is never hot-swapped.

use crate::constants::{
    MODEL_SCALE, VIEWER_CAMERA_DISTANCE, VIEWER_FOV_DEG, VIEWER_ZFAR, VIEWER_ZNEAR,
};
use crate::mesh::{AssetError, Model};
use crate::orbit::{OrbitParams, OrbitState};
use glam::Mat4;

/// Exp2 depth-fog weight for the viewer scene: 0 at the camera, approaching 1
/// with distance. The mesh shader applies the same curve per fragment.
pub fn fog_blend(distance: f32, density: f32) -> f32 {
    let x = density * distance;
    1.0 - (-x * x).exp()
}

/// Perspective projection parameters. Aspect tracks the draw surface exactly.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(aspect: f32, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        Self {
            aspect,
            fovy_radians,
            znear,
            zfar,
        }
    }

    /// Recompute the aspect ratio for a resized surface. Zero-sized surfaces
    /// are ignored so a collapsed container cannot poison the matrix.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
}

/// Lifecycle of the viewer's single model: `Empty -> Loading` then exactly
/// one of `Loaded` or `Failed`.
#[derive(Debug, Default)]
pub enum ModelSlot {
    #[default]
    Empty,
    Loading,
    Loaded(Model),
    Failed,
}

impl ModelSlot {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ModelSlot::Loaded(_) | ModelSlot::Failed)
    }
}

pub struct ViewerState {
    pub projection: Projection,
    pub orbit: OrbitState,
    slot: ModelSlot,
    model_scale: f32,
}

impl ViewerState {
    pub fn new(aspect: f32) -> Self {
        Self::with_scale(aspect, MODEL_SCALE)
    }

    pub fn with_scale(aspect: f32, model_scale: f32) -> Self {
        Self {
            projection: Projection::new(
                aspect,
                VIEWER_FOV_DEG.to_radians(),
                VIEWER_ZNEAR,
                VIEWER_ZFAR,
            ),
            orbit: OrbitState::new(VIEWER_CAMERA_DISTANCE, OrbitParams::default()),
            slot: ModelSlot::Empty,
            model_scale,
        }
    }

    /// Move the slot to `Loading`. Returns false (and does nothing) unless
    /// the slot is still `Empty`; the load is one-shot by contract.
    pub fn begin_load(&mut self) -> bool {
        match self.slot {
            ModelSlot::Empty => {
                self.slot = ModelSlot::Loading;
                true
            }
            _ => {
                log::warn!("[viewer] begin_load ignored: slot already {}", self.slot_name());
                false
            }
        }
    }

    /// Resolve the load. On success the model is scaled to the configured
    /// factor and recentered so its bbox centroid sits at the origin. Calls
    /// outside the `Loading` state are ignored.
    pub fn finish_load(&mut self, result: Result<Model, AssetError>) -> &ModelSlot {
        if !matches!(self.slot, ModelSlot::Loading) {
            log::warn!("[viewer] finish_load ignored: slot is {}", self.slot_name());
            return &self.slot;
        }
        self.slot = match result {
            Ok(mut model) => {
                model.apply_scale(self.model_scale);
                model.recenter();
                ModelSlot::Loaded(model)
            }
            Err(e) => {
                log::error!("[viewer] model load failed: {e}");
                ModelSlot::Failed
            }
        };
        &self.slot
    }

    pub fn slot(&self) -> &ModelSlot {
        &self.slot
    }

    fn slot_name(&self) -> &'static str {
        match self.slot {
            ModelSlot::Empty => "Empty",
            ModelSlot::Loading => "Loading",
            ModelSlot::Loaded(_) => "Loaded",
            ModelSlot::Failed => "Failed",
        }
    }

    /// Container resize: recompute the aspect ratio only; orbit and slot are
    /// untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.projection.set_aspect(width, height);
    }

    /// Per-frame update: advance damped/auto rotation.
    pub fn update(&mut self, dt: f32) {
        self.orbit.update(dt);
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection.matrix() * self.orbit.view_matrix()
    }
}
