// ============================================================================
// MAALTIJDPLANNER - WEEKLY MEAL PLANNING SPA (PURE RUST + WASM)
// ============================================================================
// Structure:
// - Router: static route table + path matcher with typed captures
// - Views: functions that render DOM (thin shells, one per route)
// - State: Rc<RefCell> reactive state holding the current route
// - Dom: low-level DOM helpers
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod router;
pub mod state;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::AppConfig;
use std::cell::RefCell;

// Single app instance, kept alive for the whole page lifetime so
// navigation callbacks can reach it
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🍽️ Maaltijdplanner starting...");

    let app = App::new(AppConfig::default())?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render the running app (full render of the current route)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [MAIN] Re-render failed: {:?}", e);
            }
        }
    });
}
