// ============================================================================
// NOT FOUND VIEW - Rendered when no route matches the current path
// ============================================================================
// The route table defines no catch-all; the app renders this view instead of
// redirecting, so the unmatched URL stays visible in the address bar.

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::app::NavHandle;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{Params, RouteName};
use crate::views::shared::render_nav;

pub fn render_not_found(handle: &NavHandle) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .class("view not-found-view")
        .build();
    append_child(&root, &render_nav(handle)?)?;

    let heading = ElementBuilder::new("h1")?
        .text("Pagina niet gevonden")
        .build();
    append_child(&root, &heading)?;

    let home_href = handle
        .path_for(RouteName::Home, &Params::new())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let home = ElementBuilder::new("a")?
        .class("back-link")
        .text("Naar het weekplan")
        .attr("href", &home_href)?
        .build();
    {
        let handle = handle.clone();
        let target = home_href.clone();
        on_click(&home, move |e: MouseEvent| {
            e.prevent_default();
            handle.navigate(&target);
        })?;
    }
    append_child(&root, &home)?;

    Ok(root)
}
