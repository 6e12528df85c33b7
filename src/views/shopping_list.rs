// ============================================================================
// SHOPPING LIST VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::NavHandle;
use crate::dom::{append_child, ElementBuilder};
use crate::views::shared::render_nav;

pub fn render_shopping_list(handle: &NavHandle) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .class("view shopping-list-view")
        .build();
    append_child(&root, &render_nav(handle)?)?;

    let heading = ElementBuilder::new("h1")?.text("Boodschappen").build();
    append_child(&root, &heading)?;

    let intro = ElementBuilder::new("p")?
        .class("view-intro")
        .text("Je boodschappenlijst voor het weekplan.")
        .build();
    append_child(&root, &intro)?;

    Ok(root)
}
