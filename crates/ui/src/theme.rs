//! Theme toggle button

use std::rc::Rc;

use portfolio_core::{PageConfig, Theme, ThemeStore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::dom::on_click;
use crate::storage::LocalStorage;

/// Apply the stored theme and wire `#theme-toggle`
pub fn init(doc: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let themes = Rc::new(ThemeStore::with_config(LocalStorage::open(), config));
    apply(doc, themes.load())?;

    if let Some(toggle) = doc.get_element_by_id("theme-toggle") {
        let doc = doc.clone();
        on_click(&toggle, move |_| {
            let next = themes.toggle(current(&doc));
            if let Err(e) = apply(&doc, next) {
                tracing::warn!(error = ?e, "Failed to apply theme");
            }
        })?;
    }
    Ok(())
}

/// Theme currently on `<html data-theme>`
fn current(doc: &Document) -> Theme {
    doc.document_element()
        .and_then(|root| root.get_attribute("data-theme"))
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

fn apply(doc: &Document, theme: Theme) -> Result<(), JsValue> {
    let root = doc.document_element().ok_or("No document element")?;
    root.set_attribute("data-theme", theme.as_str())?;

    if let Some(icon) = doc
        .get_element_by_id("theme-icon")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        icon.set_src(theme.icon_src());
        icon.set_alt(theme.icon_alt());
    }
    Ok(())
}
