//! Product model viewer: orbit camera, one-shot asset load, lit rendering.
//!
//! The render loop starts immediately and draws an empty scene until the
//! asset resolves. A failed load swaps the placeholder text for the fixed
//! failure message and leaves the scene rendering without a model.

use crate::asset;
use crate::config::PageConfig;
use crate::dom;
use crate::layout;
use crate::overlay;
use crate::raf::FrameLoop;
use crate::render::mesh::MeshGpu;
use instant::Instant;
use landing_core::{decode_glb, AssetError, ModelSlot, ViewerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    panning: bool,
    last_x: f32,
    last_y: f32,
}

pub async fn run(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    container: web::HtmlElement,
    config: PageConfig,
) {
    // Size the draw surface to the container's content box before the
    // surface is created.
    let rect = container.get_bounding_client_rect();
    dom::set_canvas_backing_size(&canvas, rect.width(), rect.height());

    let mut gpu = match MeshGpu::new(&canvas).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("[viewer] WebGPU init error: {e:?}");
            return;
        }
    };

    let state = Rc::new(RefCell::new(ViewerState::with_scale(
        layout::aspect_ratio(canvas.width(), canvas.height()),
        config.model_scale,
    )));
    let drag = Rc::new(RefCell::new(DragState::default()));

    wire_pointer_handlers(&canvas, &state, &drag);
    wire_container_resize(&container, &canvas, &state);
    start_model_load(&document, &state, &config);

    let state_tick = state.clone();
    let mut last = Instant::now();
    // Handle intentionally dropped: the loop runs for the page's lifetime.
    let _loop = FrameLoop::start(move || {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;

        let mut st = state_tick.borrow_mut();
        st.update(dt);
        gpu.resize_if_needed(canvas.width(), canvas.height());
        if !gpu.has_model() {
            if let ModelSlot::Loaded(model) = st.slot() {
                gpu.upload_model(model);
                log::info!(
                    "[viewer] model uploaded: {} vertices, {} triangles",
                    model.vertex_count(),
                    model.triangle_count()
                );
            }
        }
        let view_proj = st.view_proj();
        let eye = st.orbit.eye();
        drop(st);
        if let Err(e) = gpu.render(view_proj, eye) {
            log::error!("[viewer] render error: {e:?}");
        }
    });
}

/// Kick off the single asset fetch. Success clears the placeholder text;
/// failure replaces it with the fixed message. No retry, no timeout.
fn start_model_load(
    document: &web::Document,
    state: &Rc<RefCell<ViewerState>>,
    config: &PageConfig,
) {
    if !state.borrow_mut().begin_load() {
        return;
    }
    let document = document.clone();
    let state = state.clone();
    let url = config.model_url.clone();
    let overlay_sel = config.loading_overlay_selector.clone();
    let failed_text = config.load_failed_text.clone();
    spawn_local(async move {
        log::info!("[asset] fetching {url}");
        let result = match asset::fetch_bytes(&url).await {
            Ok(bytes) => decode_glb(&bytes),
            Err(e) => Err(AssetError::Fetch(e.to_string())),
        };
        let ok = result.is_ok();
        state.borrow_mut().finish_load(result);
        if ok {
            overlay::clear(&document, &overlay_sel);
        } else {
            overlay::set_text(&document, &overlay_sel, &failed_text);
        }
    });
}

/// Orbit input: primary-button drag rotates, right-button or shift drag pans.
/// No wheel handler; zoom is disabled by contract.
fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<ViewerState>>,
    drag: &Rc<RefCell<DragState>>,
) {
    {
        let drag = drag.clone();
        let canvas_capture = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            d.active = true;
            d.panning = ev.button() == 2 || ev.shift_key();
            d.last_x = ev.client_x() as f32;
            d.last_y = ev.client_y() as f32;
            let _ = canvas_capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let drag = drag.clone();
        let state = state.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            if !d.active {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let dx = x - d.last_x;
            let dy = y - d.last_y;
            d.last_x = x;
            d.last_y = y;
            let h = canvas_move.client_height().max(1) as f32;
            let mut st = state.borrow_mut();
            if d.panning {
                let fovy = st.projection.fovy_radians;
                st.orbit.pan_by_pixels(dx, dy, h, fovy);
            } else {
                st.orbit.rotate_by_pixels(dx, dy, h);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut().active = false;
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        // Right-drag pans; keep the browser menu out of the gesture.
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Track the container's content box (decoupled from window resize): resize
/// the draw surface to it exactly and recompute the camera aspect.
fn wire_container_resize(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<ViewerState>>,
) {
    let canvas = canvas.clone();
    let state = state.clone();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::ResizeObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::ResizeObserverEntry>() else {
                    continue;
                };
                let rect = entry.content_rect();
                dom::set_canvas_backing_size(&canvas, rect.width(), rect.height());
                state
                    .borrow_mut()
                    .resize(rect.width() as f32, rect.height() as f32);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
    match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(container);
            // Keep the observer alive for the page's lifetime.
            std::mem::forget(observer);
        }
        Err(e) => log::error!("[viewer] ResizeObserver error: {e:?}"),
    }
    closure.forget();
}
