//! Navigation menu toggle and footer year

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::on_click;

/// Value for `aria-expanded`
pub const fn aria_expanded(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

/// Wire `.nav-toggle` to open and close `#nav-menu`
pub fn init(doc: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        doc.query_selector(".nav-toggle")?,
        doc.get_element_by_id("nav-menu"),
    ) else {
        return Ok(());
    };

    let button = toggle.clone();
    on_click(&toggle, move |_| {
        let Ok(open) = menu.class_list().toggle("open") else {
            return;
        };
        let _ = button.set_attribute("aria-expanded", aria_expanded(open));
    })
}

/// Fill `#year` with the current year
pub fn set_year(doc: &Document) {
    if let Some(el) = doc.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
