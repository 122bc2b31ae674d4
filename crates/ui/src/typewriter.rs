//! Typewriter reveal of `.typing-text`

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::effects::Typewriter;
use portfolio_core::PageConfig;
use web_sys::{Document, HtmlElement};

use crate::dom::{query_html, Timeout};

const CARET: &str = "2px solid var(--accent)";

struct Timings {
    char_delay_ms: u32,
    linger_ms: u32,
}

/// Clear the text, then retype it one character at a time
pub fn start(doc: &Document, config: &PageConfig) {
    let Some(el) = query_html(doc, ".typing-text") else {
        return;
    };
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    let _ = el.style().set_property("border-right", CARET);

    let writer = Rc::new(RefCell::new(Typewriter::new(text)));
    let timings = Rc::new(Timings {
        char_delay_ms: config.typing_char_delay_ms,
        linger_ms: config.typing_cursor_linger_ms,
    });
    Timeout::fire_and_forget(config.typing_start_delay_ms, move || {
        tick(el, writer, timings);
    });
}

fn tick(el: HtmlElement, writer: Rc<RefCell<Typewriter>>, timings: Rc<Timings>) {
    let typed = writer.borrow_mut().next().is_some();
    if typed {
        el.set_text_content(Some(writer.borrow().typed()));
        let delay = timings.char_delay_ms;
        Timeout::fire_and_forget(delay, move || tick(el, writer, timings));
    } else {
        Timeout::fire_and_forget(timings.linger_ms, move || {
            let _ = el.style().set_property("border-right", "none");
        });
    }
}
