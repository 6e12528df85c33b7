// ============================================================================
// HISTORY - Path-based browser history (no hash fragment)
// ============================================================================
// The popstate listener is global and must be registered ONCE, at app
// construction. Registering it again would stack handlers (see the
// listener-lifetime notes in dom::events).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Current location path, including any deployment base prefix
pub fn current_path() -> Result<String, JsValue> {
    window()?.location().pathname()
}

/// Push a new history entry without reloading the page
pub fn push(path: &str) -> Result<(), JsValue> {
    window()?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Register the global popstate handler (browser back/forward buttons).
/// Call once; the closure is leaked to stay alive for the page lifetime.
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    window()?.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
