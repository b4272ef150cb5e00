use anyhow::Result;
use winit::window::WindowId;

use crate::input::{InputEvent, InputResponse};

use super::ctx::{FrameCtx, SetupCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewer.
///
/// All hooks run on the event-loop thread and never overlap: an input handler
/// always completes before the next frame callback starts.
pub trait App {
    /// Called once, after the window and GPU context exist and before the
    /// first frame. An error here aborts startup.
    fn on_gpu_ready(&mut self, ctx: &mut SetupCtx<'_, '_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for every translated input event.
    fn on_input(&mut self, window_id: WindowId, event: &InputEvent) -> InputResponse {
        let _ = (window_id, event);
        InputResponse::Ignored
    }

    /// Called once per display refresh.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
