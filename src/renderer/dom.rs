//! DOM output: one absolutely-positioned `<div>` showing a sheet cell

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::SpriteFrame;
use crate::consts::SPRITE_SIZE;

/// The sprite element inside the container
pub struct SpriteElement {
    el: HtmlElement,
}

impl SpriteElement {
    /// Create the sprite and append it to `container`
    pub fn create(document: &Document, container: &Element, sprite_url: &str) -> Result<Self, JsValue> {
        let el: HtmlElement = document.create_element("div")?.dyn_into()?;
        el.style().set_css_text(&format!(
            "position: absolute;\
             bottom: 0;\
             left: 0;\
             width: {size}px;\
             height: {size}px;\
             image-rendering: pixelated;\
             background-image: url({sprite_url});\
             background-repeat: no-repeat;\
             pointer-events: none;\
             transform-origin: bottom left;",
            size = SPRITE_SIZE,
        ));
        container.append_child(&el)?;
        Ok(Self { el })
    }

    /// Write a frame's sheet offset and transform
    pub fn apply(&self, frame: &SpriteFrame) -> Result<(), JsValue> {
        let style = self.el.style();
        style.set_property("background-position", &frame.background_position())?;
        style.set_property("transform", &frame.transform())?;
        Ok(())
    }
}
