//! DOM wiring for the scramble-reveal effect.
//!
//! One IntersectionObserver watches every revealable element; the moment an
//! element is at least half visible it is unobserved (at-most-once trigger)
//! and handed to the shared scheduler. A single interval timer drives every
//! active animation and is cleared again once the scheduler goes idle.

use crate::config::PageConfig;
use landing_core::{reveal_source, RevealFrame, RevealScheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct RevealRuntime {
    scheduler: RevealScheduler,
    /// Slot index -> element, parallel to the scheduler's records.
    targets: Vec<web::HtmlElement>,
    rng: StdRng,
    timer_id: Option<i32>,
}

pub fn wire_reveal(document: &web::Document, config: &PageConfig) -> anyhow::Result<()> {
    let list = document
        .query_selector_all(&config.reveal_selector)
        .map_err(|e| anyhow::anyhow!("bad reveal selector: {e:?}"))?;
    if list.length() == 0 {
        log::info!("[reveal] no revealable elements");
        return Ok(());
    }

    let runtime = Rc::new(RefCell::new(RevealRuntime {
        scheduler: RevealScheduler::new(),
        targets: Vec::new(),
        rng: StdRng::from_entropy(),
        timer_id: None,
    }));

    let interval_ms = config.reveal_tick_ms;
    let runtime_obs = runtime.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() else {
                    continue;
                };
                // Drop the subscription before animating so later viewport
                // crossings are no-ops.
                observer.unobserve(&el);
                let data_value = el.dataset().get("value");
                let content = el.text_content().unwrap_or_default();
                let text = reveal_source(data_value.as_deref(), &content);
                {
                    let rt = &mut *runtime_obs.borrow_mut();
                    let slot = rt.scheduler.begin(text);
                    rt.targets.push(el);
                    debug_assert_eq!(slot + 1, rt.targets.len());
                }
                ensure_timer(&runtime_obs, interval_ms);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.5));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {e:?}"))?;
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                observer.observe(&el);
            }
        }
    }
    log::info!("[reveal] observing {} elements", list.length());
    callback.forget();
    Ok(())
}

/// Start the shared tick timer if it is not already running. The timer clears
/// itself once every animation has finished.
fn ensure_timer(runtime: &Rc<RefCell<RevealRuntime>>, interval_ms: u32) {
    if runtime.borrow().timer_id.is_some() {
        return;
    }
    let runtime_tick = runtime.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut frames: Vec<RevealFrame> = Vec::new();
        let rt = &mut *runtime_tick.borrow_mut();
        rt.scheduler.tick(&mut rt.rng, &mut frames);
        for frame in &frames {
            if let Some(el) = rt.targets.get(frame.slot) {
                el.set_text_content(Some(&frame.text));
            }
        }
        if rt.scheduler.is_idle() {
            if let (Some(w), Some(id)) = (web::window(), rt.timer_id.take()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(id) => runtime.borrow_mut().timer_id = Some(id),
            Err(e) => log::error!("[reveal] timer error: {e:?}"),
        }
    }
    closure.forget();
}
