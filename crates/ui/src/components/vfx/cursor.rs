use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::effects::trail::{dot_css, TRAIL_KEYFRAMES};
use portfolio_core::effects::Trail;
use portfolio_core::PageConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

use crate::dom::{inject_style, on_event, remove_after, set_css_text};

/// Fading dots following the pointer
pub struct MouseTrail {
    doc: Document,
    dots: RefCell<Trail<Element>>,
    lifetime_ms: u32,
}

impl MouseTrail {
    pub fn new(doc: &Document, config: &PageConfig) -> Result<Rc<Self>, JsValue> {
        inject_style(doc, TRAIL_KEYFRAMES)?;
        Ok(Rc::new(Self {
            doc: doc.clone(),
            dots: RefCell::new(Trail::new(config.trail_max_len)),
            lifetime_ms: config.trail_lifetime_ms,
        }))
    }

    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let trail = Rc::clone(self);
        on_event(&self.doc, "mousemove", move |e: MouseEvent| {
            if let Err(err) = trail.on_move(f64::from(e.client_x()), f64::from(e.client_y())) {
                tracing::debug!(error = ?err, "Trail dot skipped");
            }
        })
    }

    fn on_move(&self, x: f64, y: f64) -> Result<(), JsValue> {
        let dot = self.doc.create_element("div")?;
        set_css_text(&dot, &dot_css(x, y, self.lifetime_ms));
        self.doc.body().ok_or("No <body>")?.append_child(&dot)?;

        // Detached elements ignore remove(), so an evicted dot that already
        // timed out is harmless.
        if let Some(oldest) = self.dots.borrow_mut().push(dot.clone()) {
            oldest.remove();
        }
        remove_after(dot, self.lifetime_ms);
        Ok(())
    }
}
