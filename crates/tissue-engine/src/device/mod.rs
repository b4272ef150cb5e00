//! wgpu adapter, device and surface ownership.
//!
//! [`Gpu`] is created once per window and borrows it for the surface's
//! lifetime. Frames are acquired with [`Gpu::begin_frame`] and handed back to
//! [`Gpu::submit`], which presents them.

mod context;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use frame::{GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
