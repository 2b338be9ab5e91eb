//! Paint model shared between the app and renderers.
//!
//! Only solid colors are needed: the clear color of the frame. Vertex colors
//! live in `geometry`.

pub mod color;

pub use color::Color;
