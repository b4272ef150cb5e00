use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Passed once to [`App::on_gpu_ready`](super::App::on_gpu_ready).
pub struct SetupCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

impl SetupCtx<'_, '_> {
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::from_gpu(self.gpu)
    }
}

/// Passed to [`App::on_frame`](super::App::on_frame) once per tick.
///
/// `'a` spans the callback; `'w` is the window borrow carried by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

/// A surface with a zero dimension (minimized window) cannot be drawn to.
fn is_drawable(size: (u32, u32)) -> bool {
    size.0 > 0 && size.1 > 0
}

impl FrameCtx<'_, '_> {
    /// Acquires the next swapchain image, clears it to `clear`, lets `draw`
    /// record its passes, then submits and presents.
    ///
    /// `draw` is not called while the window is minimized or when acquisition
    /// fails: the frame is skipped (after reconfiguring a lost or outdated
    /// surface), or the app exits if the error is unrecoverable.
    ///
    /// The [`RenderCtx`] size is the acquired image's size, so attachments a
    /// renderer sizes from it always match the color target.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let size = self.gpu.size();
        if !is_drawable((size.width, size.height)) {
            log::trace!("skipping frame: surface is {}x{}", size.width, size.height);
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(&err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface error: {err}; exiting");
                        AppControl::Exit
                    }
                    action => {
                        log::debug!("surface error: {err}; {action:?}");
                        AppControl::Continue
                    }
                };
            }
        };

        {
            let _clear = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tissue clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        {
            let extent = frame.surface_texture.texture.size();
            let rctx = RenderCtx {
                size: (extent.width, extent.height),
                ..RenderCtx::from_gpu(self.gpu)
            };
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_surface_is_not_drawable() {
        assert!(!is_drawable((0, 0)));
        assert!(!is_drawable((512, 0)));
        assert!(!is_drawable((0, 512)));
    }

    #[test]
    fn sized_surface_is_drawable() {
        assert!(is_drawable((512, 512)));
        assert!(is_drawable((1, 1)));
    }
}
