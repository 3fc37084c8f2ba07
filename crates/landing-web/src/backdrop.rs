//! Full-viewport drifting particle backdrop.
//!
//! The canvas tracks the window size; each frame steps the fixed particle
//! pool once and renders it. Resize only touches the surface and the
//! projection aspect; particle state is never reset.

use crate::dom;
use crate::layout;
use crate::raf::FrameLoop;
use crate::render::points::PointsGpu;
use glam::{Mat4, Vec3};
use landing_core::{
    FieldParams, ParticleField, Projection, BACKDROP_CAMERA_Z, BACKDROP_FOV_DEG, BACKDROP_ZFAR,
    BACKDROP_ZNEAR, PARTICLE_COLOR, PARTICLE_OPACITY, PARTICLE_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub async fn run(canvas: web::HtmlCanvasElement, params: FieldParams) {
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_window_resize(canvas.clone());

    let mut gpu = match PointsGpu::new(
        &canvas,
        params.count,
        PARTICLE_COLOR,
        PARTICLE_OPACITY,
        PARTICLE_SIZE,
    )
    .await
    {
        Ok(g) => g,
        Err(e) => {
            log::error!("[backdrop] WebGPU init error: {e:?}");
            return;
        }
    };

    let mut rng = StdRng::from_entropy();
    let mut field = ParticleField::new(params, &mut rng);
    let mut projection = Projection::new(
        layout::aspect_ratio(canvas.width(), canvas.height()),
        BACKDROP_FOV_DEG.to_radians(),
        BACKDROP_ZNEAR,
        BACKDROP_ZFAR,
    );
    let view = Mat4::look_at_rh(
        Vec3::new(0.0, 0.0, BACKDROP_CAMERA_Z),
        Vec3::ZERO,
        Vec3::Y,
    );
    log::info!("[backdrop] {} particles", field.len());

    // Handle intentionally dropped: the loop runs for the page's lifetime.
    let _loop = FrameLoop::start(move || {
        field.step(&mut rng);
        let w = canvas.width();
        let h = canvas.height();
        gpu.resize_if_needed(w, h);
        projection.set_aspect(w as f32, h as f32);
        if let Err(e) = gpu.render(field.positions(), projection.matrix() * view) {
            log::error!("[backdrop] render error: {e:?}");
        }
    });
}
