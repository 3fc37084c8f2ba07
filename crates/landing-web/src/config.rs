use landing_core::{FieldParams, LOAD_FAILED_TEXT, MODEL_SCALE, REVEAL_TICK_MS};

/// Everything the composition root needs to wire the page: element ids and
/// selectors for the DOM contract, the asset URL, and the tunable effect
/// parameters. Defaults match the shipped landing page.
#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Selector matching every revealable text element.
    pub reveal_selector: String,
    /// Shared reveal timer interval in milliseconds.
    pub reveal_tick_ms: u32,

    /// Full-viewport backdrop canvas id.
    pub backdrop_canvas_id: String,
    pub field: FieldParams,

    /// Product viewer canvas id and its containing box id.
    pub model_canvas_id: String,
    pub viewer_container_id: String,
    /// Selector for the "loading" placeholder text.
    pub loading_overlay_selector: String,
    /// Build-time-known asset path, fetched exactly once per page view.
    pub model_url: String,
    pub model_scale: f32,
    pub load_failed_text: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_selector: ".decrypt, .glitch-header".into(),
            reveal_tick_ms: REVEAL_TICK_MS,
            backdrop_canvas_id: "bg-canvas".into(),
            field: FieldParams::default(),
            model_canvas_id: "model-canvas".into(),
            viewer_container_id: "model-viewer-container".into(),
            loading_overlay_selector: ".loading-overlay".into(),
            model_url: "/shield.glb".into(),
            model_scale: MODEL_SCALE,
            load_failed_text: LOAD_FAILED_TEXT.into(),
        }
    }
}
