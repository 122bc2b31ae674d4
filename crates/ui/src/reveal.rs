//! Scroll-triggered section reveal and smooth in-page anchors

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{on_click, query_all};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const VISIBLE_CLASS: &str = "visible";

/// Add `visible` to each `.section` the first time it scrolls into view
pub fn observe_sections(doc: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(|entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in query_all(doc, ".section") {
        observer.observe(&section);
    }
    callback.forget();
    Ok(())
}

/// Selector for an in-page link target, `None` for a bare `#`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|id| !id.is_empty())
        .map(|_| href)
}

/// Smooth-scroll to the target of every `a[href^="#"]`
pub fn smooth_anchors(doc: &Document) -> Result<(), JsValue> {
    for anchor in query_all(doc, r##"a[href^="#"]"##) {
        let doc = doc.clone();
        let link = anchor.clone();
        on_click(&anchor, move |e: MouseEvent| {
            e.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("#about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/page"), None);
    }
}
