use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching `selector` as an `HtmlElement`
pub fn query_html(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set a single inline style property, ignoring non-HTML elements
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html_el) = el.dyn_ref::<HtmlElement>() {
        let _ = html_el.style().set_property(property, value);
    }
}

/// Replace the inline style wholesale
pub fn set_css_text(el: &Element, css: &str) {
    if let Some(html_el) = el.dyn_ref::<HtmlElement>() {
        html_el.style().set_css_text(css);
    }
}

/// Append a `<style>` block to `<head>`
pub fn inject_style(doc: &Document, css: &str) -> Result<(), JsValue> {
    let style = doc.create_element("style")?;
    style.set_text_content(Some(css));
    let head = doc.head().ok_or("No <head>")?;
    head.append_child(&style)?;
    Ok(())
}

/// Bind a click listener that lives as long as the page
pub fn on_click(target: &Element, handler: impl FnMut(web_sys::MouseEvent) + 'static) -> Result<(), JsValue> {
    on_event(target, "click", handler)
}

pub fn on_event<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Pending `setTimeout` with a cancellation handle
///
/// Dropping a `Timeout` cancels it. Timers nobody cancels go through
/// [`Timeout::fire_and_forget`], whose closure is released after it runs.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: u32, f: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or("No window")?;
        let callback = Closure::once(Box::new(f) as Box<dyn FnOnce()>);
        let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay(ms),
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }

    /// Schedule without a handle
    pub fn fire_and_forget(ms: u32, f: impl FnOnce() + 'static) {
        let Some(win) = window() else {
            tracing::warn!("setTimeout skipped: no window");
            return;
        };
        let callback = Closure::once_into_js(f);
        if let Err(e) =
            win.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay(ms))
        {
            tracing::warn!(error = ?e, "setTimeout failed");
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Timer delay in the `i32` the DOM expects, saturating
pub fn delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Remove `el` from its parent after `ms`
pub fn remove_after(el: Element, ms: u32) {
    Timeout::fire_and_forget(ms, move || el.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_saturates() {
        assert_eq!(delay(600), 600);
        assert_eq!(delay(u32::MAX), i32::MAX);
    }
}
