// Pure sizing math, kept free of web-sys so it can be tested host-side.

/// Canvas backing-store size for a CSS rect at the given device pixel ratio.
/// Floors at 1x1 so a hidden or collapsed element never produces a zero-sized
/// surface.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Aspect ratio used for projection matrices.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}
