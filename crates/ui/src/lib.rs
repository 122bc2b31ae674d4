mod comments;
mod components;
mod config;
mod dom;
mod effects;
mod nav;
mod reveal;
mod scroll;
mod storage;
mod theme;
mod typewriter;

pub use storage::LocalStorage;

use portfolio_core::PageConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::vfx::{MouseTrail, ParticleLayer};
use crate::scroll::ScrollEffects;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = dom::get_document().ok_or("should have a document on window")?;
    let config = config::page_config();
    web_sys::console::log_1(
        &format!("[Portfolio] Starting (effects: {})", config.effects_enabled).into(),
    );

    init_page(&document, &config)
}

/// Wire every behaviour; a failing feature is logged and skipped
fn init_page(doc: &Document, config: &PageConfig) -> Result<(), JsValue> {
    report("theme", theme::init(doc, config));
    report("nav", nav::init(doc));
    nav::set_year(doc);

    match comments::CommentsWidget::mount(doc, config) {
        Ok(Some(_)) => {}
        Ok(None) => tracing::debug!("No comment list on this page"),
        Err(e) => report("comments", Err(e)),
    }

    report("reveal", reveal::observe_sections(doc));
    report("anchors", reveal::smooth_anchors(doc));
    report("cards", effects::card_hover(doc));
    report("ripple", effects::button_ripple(doc, config.ripple_duration_ms));
    typewriter::start(doc, config);

    if config.effects_enabled {
        report("parallax", ScrollEffects::new(doc).attach());
        report(
            "particles",
            ParticleLayer::new(doc, config).and_then(|layer| layer.start(config.particle_interval_ms)),
        );
        report("trail", MouseTrail::new(doc, config).and_then(|trail| trail.attach()));
    }

    Ok(())
}

fn report(feature: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[Portfolio] {feature} failed: {e:?}").into());
    }
}
