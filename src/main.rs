//! TechSoi Board Frontend Entry Point

mod app;
mod components;
mod config;
mod exports;
mod format;
mod loader;
mod models;
mod pagination;
mod render;
mod store;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
