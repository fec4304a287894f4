//! Sprite rendering
//!
//! `frame` is a pure state → CSS computation; `dom` writes it to the page.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use frame::{SpriteFrame, compose};
