//! Embedded page assets for single-binary distribution
//!
//! Uses rust-embed to compile the page (HTML, CSS, icons, WASM bundle) into
//! the binary. In debug mode, files are loaded from disk for hot-reloading.

use rust_embed::RustEmbed;

/// Embedded assets from the ui crate directory
#[derive(RustEmbed)]
#[folder = "../ui/"]
#[include = "index.html"]
#[include = "styles.css"]
#[include = "pkg/*.js"]
#[include = "pkg/*.wasm"]
#[include = "assets/**/*"]
pub struct PageAssets;

/// Get a file from embedded assets with proper MIME type
pub fn get_asset(path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Handle root path
    let path = if path.is_empty() || path == "/" {
        "index.html"
    } else {
        path.trim_start_matches('/')
    };

    PageAssets::get(path).map(|file| {
        let mime = if has_extension(path, "js") {
            "application/javascript"
        } else {
            mime_guess::from_path(path)
                .first_raw()
                .unwrap_or("application/octet-stream")
        };
        (file.data.into_owned(), mime)
    })
}

fn has_extension(path: &str, ext: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
