// ============================================================================
// NAV BAR - Shared navigation between the four static views
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::app::NavHandle;
use crate::dom::{add_class, append_child, on_click, ElementBuilder};
use crate::router::{Params, RouteName};

const LINKS: [(RouteName, &str); 4] = [
    (RouteName::Home, "Weekplan"),
    (RouteName::Library, "Bibliotheek"),
    (RouteName::ShoppingList, "Boodschappen"),
    (RouteName::Profile, "Profiel"),
];

/// Render the nav bar. Links carry real hrefs (so open-in-new-tab works)
/// but intercept plain clicks for in-app history navigation.
pub fn render_nav(handle: &NavHandle) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("main-nav").build();
    let current = handle.current_name();

    for (name, label) in LINKS {
        let href = handle
            .path_for(name, &Params::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let link = ElementBuilder::new("a")?
            .class("nav-link")
            .text(label)
            .attr("href", &href)?
            .build();
        if current == Some(name) {
            add_class(&link, "active")?;
        }

        let handle = handle.clone();
        let target = href.clone();
        on_click(&link, move |e: MouseEvent| {
            e.prevent_default();
            handle.navigate(&target);
        })?;

        append_child(&nav, &link)?;
    }

    Ok(nav)
}
