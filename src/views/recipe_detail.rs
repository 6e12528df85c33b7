// ============================================================================
// RECIPE DETAIL VIEW - /gerecht/:id
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::app::NavHandle;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{Params, RouteName};
use crate::views::shared::render_nav;

/// Render the detail page for one recipe. The `id` capture comes from the
/// dynamic path segment; the route pattern guarantees it is present.
pub fn render_recipe_detail(handle: &NavHandle, params: &Params) -> Result<Element, JsValue> {
    let id = params
        .require("id")
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let root = ElementBuilder::new("div")?
        .class("view recipe-detail-view")
        .build();
    append_child(&root, &render_nav(handle)?)?;

    let heading = ElementBuilder::new("h1")?
        .text(&format!("Gerecht {}", id))
        .build();
    append_child(&root, &heading)?;

    // Back link to the library, built from the route name
    let back_href = handle
        .path_for(RouteName::Library, &Params::new())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let back = ElementBuilder::new("a")?
        .class("back-link")
        .text("← Terug naar bibliotheek")
        .attr("href", &back_href)?
        .build();
    {
        let handle = handle.clone();
        let target = back_href.clone();
        on_click(&back, move |e: MouseEvent| {
            e.prevent_default();
            handle.navigate(&target);
        })?;
    }
    append_child(&root, &back)?;

    Ok(root)
}
