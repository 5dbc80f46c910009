//! Interactive effects for the portfolio page, compiled to WebAssembly.
//!
//! `core` holds the pure state machines and geometry and builds on any
//! target. Everything that touches the DOM is `wasm32`-only and is mounted
//! once from [`start`].

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod background;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
pub mod frame;
#[cfg(target_arch = "wasm32")]
mod observers;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod text;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Mount one effect, logging rather than propagating its failure so the rest
/// of the page still comes up.
#[cfg(target_arch = "wasm32")]
fn mount(name: &str, f: impl FnOnce() -> anyhow::Result<()>) {
    if let Err(e) = f() {
        log::error!("[{name}] init error: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-fx starting");

    let Some((window, document)) = dom::window_document() else {
        log::error!("no window/document");
        return Ok(());
    };

    mount("cursor", || events::wire_cursor(&window, &document));
    mount("particles", || {
        background::init_particles(&window, &document)
    });
    mount("navbar", || events::wire_navbar(&window, &document));
    mount("menu", || events::wire_mobile_menu(&document));
    mount("typing", || text::init_typing(&document));
    mount("terminal", || text::init_terminal(&document));
    mount("reveal", || observers::init_scroll_reveal(&document));
    mount("skills", || observers::init_skill_bars(&document));
    mount("counter", || observers::init_count_up(&document));
    mount("anchors", || events::wire_smooth_scroll(&window, &document));
    mount("form", || events::wire_contact_form(&document));
    mount("parallax", || events::wire_parallax(&window, &document));
    Ok(())
}
