//! Platform abstraction layer
//!
//! Browser glue lives in `web`; everything else in the crate is
//! platform-free and driven through `Pet`.

#[cfg(target_arch = "wasm32")]
pub mod web;
