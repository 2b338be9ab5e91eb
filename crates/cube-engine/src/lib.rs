//! Cube engine crate.
//!
//! Platform + GPU runtime pieces, the compiled-in cube geometry, the transform
//! math and the renderer that draws the cube.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod transform;
pub mod window;
