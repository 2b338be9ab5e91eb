//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, depth textures) and
//! record into a [`RenderTarget`] supplied by the frame.
//!
//! Convention:
//! - world space is right-handed, +Y up
//! - clip-space depth is `[0, 1]`; the depth buffer is cleared to 1.0

mod ctx;
mod cube;
mod depth;
mod uniform;

pub use ctx::{RenderCtx, RenderTarget, SurfaceSize};
pub use cube::{CubeRenderer, CubeRendererConfig};
pub use depth::DEPTH_FORMAT;
pub use uniform::{MvpUniform, MVP_UNIFORM_OFFSET, MVP_UNIFORM_SIZE};
