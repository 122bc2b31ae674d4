use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::effects::particles::{CONTAINER_CSS, PARTICLE_KEYFRAMES};
use portfolio_core::effects::ParticleField;
use portfolio_core::PageConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

use crate::dom::{delay, inject_style, remove_after, set_css_text};

/// Particles drifting up behind the page, one every interval
pub struct ParticleLayer {
    doc: Document,
    container: Element,
    field: RefCell<ParticleField<StdRng>>,
    lifetime_ms: u32,
}

impl ParticleLayer {
    pub fn new(doc: &Document, config: &PageConfig) -> Result<Rc<Self>, JsValue> {
        inject_style(doc, PARTICLE_KEYFRAMES)?;

        let container = doc.create_element("div")?;
        set_css_text(&container, CONTAINER_CSS);
        doc.body().ok_or("No <body>")?.append_child(&container)?;

        Ok(Rc::new(Self {
            doc: doc.clone(),
            container,
            field: RefCell::new(ParticleField::new(StdRng::from_entropy())),
            lifetime_ms: config.particle_lifetime_ms,
        }))
    }

    /// Spawn on a page-lifetime interval
    pub fn start(self: &Rc<Self>, interval_ms: u32) -> Result<(), JsValue> {
        let win = window().ok_or("No window")?;
        let layer = Rc::clone(self);
        let tick = Closure::wrap(Box::new(move || {
            if let Err(e) = layer.spawn() {
                tracing::debug!(error = ?e, "Particle spawn failed");
            }
        }) as Box<dyn FnMut()>);

        win.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            delay(interval_ms),
        )?;
        tick.forget();
        Ok(())
    }

    fn spawn(&self) -> Result<(), JsValue> {
        let spec = self.field.borrow_mut().spawn();
        let particle = self.doc.create_element("div")?;
        set_css_text(&particle, &spec.to_css());
        self.container.append_child(&particle)?;
        remove_after(particle, self.lifetime_ms);
        Ok(())
    }
}
