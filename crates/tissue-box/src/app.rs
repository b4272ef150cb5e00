use anyhow::{Context, Result};
use glam::Mat4;
use winit::window::WindowId;

use tissue_engine::core::{App, AppControl, FrameCtx, SetupCtx};
use tissue_engine::input::{InputEvent, InputResponse};

use crate::camera::{compute_projection, Camera, Perspective};
use crate::config::ViewerConfig;
use crate::geometry::FACES;
use crate::renderer::CubeRenderer;
use crate::scheduler::FrameScheduler;
use crate::shader::{self, ShaderInterface};

/// The tissue box viewer: one window, one cube.
pub struct TissueBoxApp {
    config: ViewerConfig,
    scheduler: FrameScheduler,
    renderer: Option<CubeRenderer>,
}

impl TissueBoxApp {
    pub fn new(config: ViewerConfig) -> Self {
        let scheduler = FrameScheduler::new(&config);
        Self {
            config,
            scheduler,
            renderer: None,
        }
    }
}

/// Perspective and projection matrix for a drawable of `size` physical pixels.
fn projection_for(camera: &Camera, size: (u32, u32)) -> (Perspective, Mat4) {
    let perspective = camera.perspective(size.0, size.1);
    (perspective, compute_projection(&perspective))
}

impl App for TissueBoxApp {
    fn on_gpu_ready(&mut self, ctx: &mut SetupCtx<'_, '_>) -> Result<()> {
        let iface = ShaderInterface::resolve(shader::SOURCE)
            .context("tissue box shader does not match the renderer")?;
        log::debug!("shader interface: {iface:?}");

        let rctx = ctx.render_ctx();
        let (perspective, projection) = projection_for(self.scheduler.camera(), rctx.size);
        log::info!(
            "perspective: fovy {}° aspect {} near {} far {}",
            perspective.fov_y_deg,
            perspective.aspect,
            perspective.near,
            perspective.far
        );

        for face in &FACES {
            log::debug!(
                "face {:<6} vertices {}..{} color {:?}",
                face.name,
                face.first_vertex,
                face.first_vertex + 4,
                face.color
            );
        }

        let renderer = CubeRenderer::new(&rctx, shader::SOURCE, &iface, projection)
            .context("failed to build tissue box renderer")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_input(&mut self, _window_id: WindowId, event: &InputEvent) -> InputResponse {
        self.scheduler.handle_input(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };

        if ctx.time.is_first() {
            log::info!("first frame");
        }

        let scheduler = &mut self.scheduler;
        let time = ctx.time;
        ctx.render(self.config.clear_color, |rctx, target| {
            let t = scheduler.tick();
            log::trace!(
                "frame {} (+{:.1} ms): auto {:.1}° dragging {}",
                time.frame_index,
                time.dt * 1000.0,
                scheduler.auto_rotation().angle_deg(),
                scheduler.controller().is_dragging()
            );
            renderer.render(rctx, target, t.model_view);
        })
    }
}
