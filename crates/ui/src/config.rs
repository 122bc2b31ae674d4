//! Page configuration injected by the host as `window.PORTFOLIO_CONFIG`

use portfolio_core::PageConfig;
use web_sys::window;

const GLOBAL: &str = "PORTFOLIO_CONFIG";

/// Read the injected config, defaults when absent or invalid
pub fn page_config() -> PageConfig {
    let Some(win) = window() else {
        return PageConfig::default();
    };
    let Ok(value) = js_sys::Reflect::get(&win, &GLOBAL.into()) else {
        return PageConfig::default();
    };
    if value.is_undefined() || value.is_null() {
        return PageConfig::default();
    }

    js_sys::JSON::stringify(&value)
        .ok()
        .and_then(|s| s.as_string())
        .map_or_else(PageConfig::default, |json| {
            PageConfig::from_json_or_default(&json)
        })
}
