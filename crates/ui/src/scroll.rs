//! Parallax on scroll, batched to one update per animation frame

use std::rc::Rc;

use portfolio_core::effects::scroll::{floating_transform, hero_transform};
use portfolio_core::effects::FrameGate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Event};

use crate::dom::{on_event, query_all, set_style};

/// Scroll state for RAF-based batching
pub struct ScrollEffects {
    doc: Document,
    gate: FrameGate,
}

impl ScrollEffects {
    pub fn new(doc: &Document) -> Rc<Self> {
        Rc::new(Self {
            doc: doc.clone(),
            gate: FrameGate::new(),
        })
    }

    /// Listen for window scroll
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let win = window().ok_or("No window")?;
        let state = Rc::clone(self);
        on_event(&win, "scroll", move |_: Event| state.request_frame())
    }

    /// Schedule an update unless one is already pending
    fn request_frame(self: &Rc<Self>) {
        if !self.gate.request() {
            return;
        }
        let Some(win) = window() else {
            self.gate.complete();
            return;
        };

        // Released by wasm-bindgen once the frame runs
        let state = Rc::clone(self);
        let callback = Closure::once_into_js(move || state.update());

        if win.request_animation_frame(callback.unchecked_ref()).is_err() {
            self.gate.complete();
        }
    }

    /// Apply transforms for the current scroll position (called from RAF)
    fn update(&self) {
        let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);

        if let Ok(Some(hero)) = self.doc.query_selector(".hero-visual") {
            set_style(&hero, "transform", &hero_transform(scroll_y));
        }
        for (i, el) in query_all(&self.doc, ".floating-element").iter().enumerate() {
            set_style(el, "transform", &floating_transform(i, scroll_y));
        }

        self.gate.complete();
    }
}
