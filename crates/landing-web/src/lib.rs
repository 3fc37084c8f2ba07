#![cfg(target_arch = "wasm32")]
//! Browser entry point and composition root for the landing-page effects.
//!
//! Three independent components are wired on load: the scramble-reveal text
//! effect, the full-viewport particle backdrop and the product model viewer.
//! They share no state and each is skipped when its DOM elements are absent.

mod asset;
mod backdrop;
mod config;
mod dom;
mod layout;
mod overlay;
mod raf;
mod render;
mod reveal;
mod viewer;

pub use config::PageConfig;
pub use raf::FrameLoop;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");
    if let Err(e) = run(PageConfig::default()) {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Composition root: wire every effect against the DOM handles named in
/// `config`. Missing elements short-circuit their component without error.
pub fn run(config: PageConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    reveal::wire_reveal(&document, &config)?;

    match dom::canvas_by_id(&document, &config.backdrop_canvas_id) {
        Some(canvas) => spawn_local(backdrop::run(canvas, config.field)),
        None => log::info!("[backdrop] #{} not found; skipping", config.backdrop_canvas_id),
    }

    let model_canvas = dom::canvas_by_id(&document, &config.model_canvas_id);
    let container = dom::element_by_id(&document, &config.viewer_container_id);
    match (model_canvas, container) {
        (Some(canvas), Some(container)) => {
            spawn_local(viewer::run(document.clone(), canvas, container, config));
        }
        _ => log::info!("[viewer] canvas or container missing; skipping"),
    }
    Ok(())
}
