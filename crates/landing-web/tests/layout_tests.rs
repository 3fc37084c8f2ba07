// Host-side tests for pure sizing helpers. The main crate is wasm-only, so
// the pure-Rust module is included directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn backing_size_applies_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    // Fractional dpr truncates like the reference page.
    assert_eq!(backing_size(100.0, 100.0, 1.5), (150, 150));
}

#[test]
fn backing_size_floors_at_one_pixel() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.4, 0.4, 1.0), (1, 1));
}

#[test]
fn aspect_ratio_is_exact() {
    assert_eq!(aspect_ratio(400, 300), 400.0 / 300.0);
    // Halving both dimensions leaves the ratio untouched.
    assert_eq!(aspect_ratio(800, 600), aspect_ratio(400, 300));
}

#[test]
fn aspect_ratio_guards_zero_height() {
    assert_eq!(aspect_ratio(800, 0), 800.0);
}
