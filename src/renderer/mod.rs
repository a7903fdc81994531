//! Rendering module
//!
//! `scene` turns a `RenderSnapshot` into draw commands; `canvas` replays them
//! on a Canvas 2D context in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;

pub use scene::{DrawCmd, build_scene};
