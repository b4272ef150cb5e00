mod app;
mod camera;
mod config;
mod geometry;
mod interaction;
mod renderer;
mod scheduler;
mod shader;
mod transform;

use anyhow::Result;
use winit::dpi::LogicalSize;

use tissue_engine::device::GpuInit;
use tissue_engine::logging::{init_logging, LoggingConfig};
use tissue_engine::window::{Runtime, RuntimeConfig};

use crate::app::TissueBoxApp;
use crate::config::ViewerConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let viewer = ViewerConfig::default();
    let runtime = RuntimeConfig {
        title: viewer.title.clone(),
        initial_size: LogicalSize::new(viewer.width, viewer.height),
        // The projection is computed once from the initial size.
        resizable: false,
    };

    log::info!(
        "starting {} ({}x{})",
        viewer.title,
        viewer.width,
        viewer.height
    );

    Runtime::run(runtime, GpuInit::default(), TissueBoxApp::new(viewer))
}
