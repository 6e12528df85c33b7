// ============================================================================
// EVENT HANDLING - Listener helpers
// ============================================================================
// LISTENER LIFETIME:
// - Listeners on DOM elements: when the element is destroyed (e.g. via
//   set_inner_html("")), the browser drops the listeners with it, so
//   closure.forget() is safe for local listeners.
// - Global listeners (window/document): register ONCE at app start; repeated
//   registration stacks handlers (see router::history::on_popstate).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Attach a click handler. The closure is leaked; the browser reclaims it
/// together with the element.
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
