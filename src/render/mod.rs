//! Rasterization: canvas, compositing, pixel effects, vector shapes and text.

pub mod builtin_font;
/// Premultiplied RGBA canvas and vector layers.
pub mod canvas;
/// Source-over compositing.
pub mod composite;
pub mod effects;
/// Brand colors.
pub mod palette;
pub mod shapes;
pub mod text;
