// portfolio-host library
// Serves the portfolio page, its WASM bundle and runtime config

// Configuration
pub mod config;

// HTTP routes
pub mod api;

// Embedded page assets (single-binary distribution)
pub mod embedded;
