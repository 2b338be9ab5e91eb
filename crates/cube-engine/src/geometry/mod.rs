//! Compiled-in geometry.
//!
//! Pure data; nothing here touches the GPU.

mod cube;

pub use cube::{cube_data, CubeData, Vertex, CUBE_VERTEX_COUNT};
