// ============================================================================
// VIEWS - One render function per route
// ============================================================================

pub mod library;
pub mod not_found;
pub mod profile;
pub mod recipe_detail;
pub mod shared;
pub mod shopping_list;
pub mod week;

pub use not_found::render_not_found;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::NavHandle;
use crate::router::{RouteMatch, ViewId};

/// Dispatch a resolved route to its render function
pub fn render_view(handle: &NavHandle, route: &RouteMatch) -> Result<Element, JsValue> {
    match route.view {
        ViewId::Week => week::render_week(handle),
        ViewId::Library => library::render_library(handle),
        ViewId::ShoppingList => shopping_list::render_shopping_list(handle),
        ViewId::Profile => profile::render_profile(handle),
        ViewId::RecipeDetail => recipe_detail::render_recipe_detail(handle, &route.params),
    }
}
