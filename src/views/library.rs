// ============================================================================
// LIBRARY VIEW - The recipe library
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::NavHandle;
use crate::dom::{append_child, ElementBuilder};
use crate::views::shared::render_nav;

pub fn render_library(handle: &NavHandle) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("view library-view").build();
    append_child(&root, &render_nav(handle)?)?;

    let heading = ElementBuilder::new("h1")?.text("Bibliotheek").build();
    append_child(&root, &heading)?;

    let intro = ElementBuilder::new("p")?
        .class("view-intro")
        .text("Al je opgeslagen gerechten.")
        .build();
    append_child(&root, &intro)?;

    Ok(root)
}
