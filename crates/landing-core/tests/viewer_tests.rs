use glam::Vec3;
use landing_core::{
    decode_glb, fog_blend, AssetError, MeshData, Model, ModelSlot, Projection, ViewerState,
    FOG_DENSITY, VIEWER_CAMERA_DISTANCE, VIEWER_FOV_DEG, VIEWER_ZFAR, VIEWER_ZNEAR,
};

/// Axis-aligned cube of the given half-size centered away from the origin,
/// mimicking an offset model export.
fn offset_cube(center: Vec3, half: f32) -> Model {
    let mut positions = Vec::new();
    for dx in [-half, half] {
        for dy in [-half, half] {
            for dz in [-half, half] {
                positions.push([center.x + dx, center.y + dy, center.z + dz]);
            }
        }
    }
    Model {
        meshes: vec![MeshData {
            normals: vec![[0.0, 0.0, 1.0]; positions.len()],
            indices: vec![0, 1, 2],
            base_color: [1.0, 1.0, 1.0, 1.0],
            positions,
        }],
    }
}

#[test]
fn slot_walks_empty_loading_loaded_exactly_once() {
    let mut state = ViewerState::with_scale(4.0 / 3.0, 2.0);
    assert!(matches!(state.slot(), ModelSlot::Empty));

    assert!(state.begin_load());
    assert!(matches!(state.slot(), ModelSlot::Loading));
    // The load is one-shot.
    assert!(!state.begin_load());

    state.finish_load(Ok(offset_cube(Vec3::ZERO, 1.0)));
    assert!(matches!(state.slot(), ModelSlot::Loaded(_)));
    assert!(state.slot().is_terminal());

    // Terminal: further transitions are ignored.
    assert!(!state.begin_load());
    state.finish_load(Err(AssetError::Fetch("late error".into())));
    assert!(matches!(state.slot(), ModelSlot::Loaded(_)));
}

#[test]
fn successful_load_scales_then_recenters_the_model() {
    let mut state = ViewerState::with_scale(1.0, 14.0);
    state.begin_load();
    state.finish_load(Ok(offset_cube(Vec3::new(3.0, -4.0, 5.0), 1.0)));

    let ModelSlot::Loaded(model) = state.slot() else {
        panic!("expected a loaded model");
    };
    let bbox = model.bounding_box().expect("model has geometry");
    // Bounding-box centroid lands on the origin within float tolerance.
    assert!(bbox.center().length() < 1e-3, "center = {:?}", bbox.center());
    // A unit-half cube scaled by 14 spans 28 units per axis.
    assert!((bbox.size() - Vec3::splat(28.0)).length() < 1e-2);
}

#[test]
fn failed_load_is_permanent_and_stores_no_model() {
    let mut state = ViewerState::with_scale(1.0, 14.0);
    state.begin_load();
    state.finish_load(Err(AssetError::Fetch("HTTP 404".into())));
    assert!(matches!(state.slot(), ModelSlot::Failed));
    assert!(state.slot().is_terminal());

    // A late success must not resurrect the slot.
    state.finish_load(Ok(offset_cube(Vec3::ZERO, 1.0)));
    assert!(matches!(state.slot(), ModelSlot::Failed));
}

#[test]
fn finish_load_before_begin_is_ignored() {
    let mut state = ViewerState::with_scale(1.0, 1.0);
    state.finish_load(Ok(offset_cube(Vec3::ZERO, 1.0)));
    assert!(matches!(state.slot(), ModelSlot::Empty));
}

#[test]
fn resize_updates_aspect_exactly_and_leaves_the_rest_alone() {
    let mut state = ViewerState::with_scale(800.0 / 600.0, 14.0);
    state.begin_load();

    state.resize(400.0, 300.0);
    // Same ratio as 800x600, computed from the new size.
    assert_eq!(state.projection.aspect, 400.0 / 300.0);
    assert!(matches!(state.slot(), ModelSlot::Loading));

    state.resize(1024.0, 512.0);
    assert_eq!(state.projection.aspect, 2.0);

    // Collapsed containers are ignored.
    state.resize(0.0, 512.0);
    assert_eq!(state.projection.aspect, 2.0);
}

#[test]
fn projection_matrix_uses_the_configured_frustum() {
    let proj = Projection::new(1.5, VIEWER_FOV_DEG.to_radians(), VIEWER_ZNEAR, VIEWER_ZFAR);
    let m = proj.matrix();
    // Spot-check: a point on the near plane straight ahead maps into clip
    // space rather than collapsing.
    let clip = m * glam::Vec4::new(0.0, 0.0, -VIEWER_ZNEAR, 1.0);
    assert!(clip.w > 0.0);
}

#[test]
fn model_update_advances_the_orbit() {
    let mut state = ViewerState::with_scale(1.0, 1.0);
    let before = state.orbit.azimuth();
    state.update(1.0);
    assert!(state.orbit.azimuth() != before, "auto-rotation must run");
}

#[test]
fn fog_weight_grows_with_distance() {
    assert_eq!(fog_blend(0.0, FOG_DENSITY), 0.0);
    let near = fog_blend(VIEWER_CAMERA_DISTANCE, FOG_DENSITY);
    let far = fog_blend(VIEWER_CAMERA_DISTANCE * 4.0, FOG_DENSITY);
    assert!(near > 0.0);
    assert!(far > near && far < 1.0);
    // Exp2 curve at the camera distance: 1 - exp(-(0.05 * 5)^2).
    assert!((near - (1.0 - (-0.0625f32).exp())).abs() < 1e-6);
}

#[test]
fn decode_rejects_garbage_bytes() {
    assert!(decode_glb(b"definitely not a gltf asset").is_err());
}

#[test]
fn recenter_and_scale_are_direct_model_operations() {
    let mut model = offset_cube(Vec3::new(10.0, 0.0, 0.0), 2.0);
    model.apply_scale(0.5);
    model.recenter();
    let bbox = model.bounding_box().unwrap();
    assert!(bbox.center().length() < 1e-4);
    assert!((bbox.size() - Vec3::splat(2.0)).length() < 1e-4);
    assert_eq!(model.vertex_count(), 8);
}
