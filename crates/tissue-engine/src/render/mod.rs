//! GPU rendering subsystem.
//!
//! Renderers issue GPU commands via wgpu into a [`RenderTarget`] handed out by
//! the runtime each frame. Each renderer owns its own GPU resources
//! (pipelines, buffers, depth attachment).

mod ctx;
mod depth;

pub use ctx::{RenderCtx, RenderTarget};
pub use depth::{DepthTexture, DEPTH_FORMAT};
