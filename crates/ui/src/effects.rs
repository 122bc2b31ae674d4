//! Project card hover lift and button ripple

use portfolio_core::effects::{Rect, Ripple, CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

use crate::dom::{on_click, on_event, query_all, remove_after, set_style};

pub fn card_hover(doc: &Document) -> Result<(), JsValue> {
    for card in query_all(doc, ".project-card") {
        let lifted = card.clone();
        on_event(&card, "mouseenter", move |_: MouseEvent| {
            set_style(&lifted, "transform", CARD_HOVER_TRANSFORM);
        })?;
        let rested = card.clone();
        on_event(&card, "mouseleave", move |_: MouseEvent| {
            set_style(&rested, "transform", CARD_REST_TRANSFORM);
        })?;
    }
    Ok(())
}

/// Ripple from the click point on every `.button`
pub fn button_ripple(doc: &Document, duration_ms: u32) -> Result<(), JsValue> {
    for button in query_all(doc, ".button") {
        let doc = doc.clone();
        let target = button.clone();
        on_click(&button, move |e: MouseEvent| {
            if let Err(err) = spawn_ripple(&doc, &target, &e, duration_ms) {
                tracing::debug!(error = ?err, "Ripple skipped");
            }
        })?;
    }
    Ok(())
}

fn spawn_ripple(doc: &Document, button: &Element, e: &MouseEvent, duration_ms: u32) -> Result<(), JsValue> {
    let bounds = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        },
        f64::from(e.client_x()),
        f64::from(e.client_y()),
    );

    let span = doc.create_element("span")?;
    let size = format!("{}px", ripple.size);
    set_style(&span, "width", &size);
    set_style(&span, "height", &size);
    set_style(&span, "left", &format!("{}px", ripple.left));
    set_style(&span, "top", &format!("{}px", ripple.top));
    span.class_list().add_1(Ripple::CLASS)?;

    button.append_child(&span)?;
    remove_after(span, duration_ms);
    Ok(())
}
