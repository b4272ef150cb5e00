//! Per-tick transform composition.
//!
//! `FrameScheduler` owns all mutable viewer state that is not a GPU resource:
//! the interaction controller, the camera, and the idle auto-rotation. The
//! runtime calls [`FrameScheduler::tick`] once per display refresh, after all
//! input queued before that refresh has been handled.

use glam::Mat4;
use tissue_engine::input::{InputEvent, InputResponse};

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::interaction::InteractionController;
use crate::transform::rotate_y;

/// Idle spin about Y. The angle grows without bound; the matrix is rebuilt
/// from it each tick and never folded into the drag rotation.
///
/// The accumulator is `f64` so a half-degree step still registers after days
/// of idling; the matrix is built from the angle reduced mod 360.
#[derive(Debug, Clone)]
pub struct AutoRotation {
    angle_deg: f64,
    step_deg: f32,
    enabled: bool,
}

impl AutoRotation {
    pub fn new(step_deg: f32, enabled: bool) -> Self {
        Self {
            angle_deg: 0.0,
            step_deg,
            enabled,
        }
    }

    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg(test)]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Advances one step and returns the rotation for the new angle.
    fn advance(&mut self) -> Mat4 {
        self.angle_deg += f64::from(self.step_deg);
        rotate_y(self.angle_deg.rem_euclid(360.0) as f32)
    }
}

/// Transforms produced by one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTransforms {
    pub view: Mat4,
    pub model_view: Mat4,
    /// The transient idle rotation, if it applied this tick.
    pub auto_rotation: Option<Mat4>,
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    camera: Camera,
    controller: InteractionController,
    auto: AutoRotation,
}

impl FrameScheduler {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            camera: Camera::new(config.camera.clone()),
            controller: InteractionController::new(config.motion.drag_deg_per_px),
            auto: AutoRotation::new(config.motion.auto_step_deg, config.motion.animation_enabled),
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[inline]
    pub fn auto_rotation(&self) -> &AutoRotation {
        &self.auto
    }

    #[cfg(test)]
    pub fn auto_rotation_mut(&mut self) -> &mut AutoRotation {
        &mut self.auto
    }

    /// Routes input to the interaction controller.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        self.controller.handle(event)
    }

    /// Composes this tick's model-view matrix.
    ///
    /// `view * drag_rotation`, then `* Ry(angle)` when the pointer is up and
    /// animation is enabled. Dragging freezes the idle angle entirely.
    pub fn tick(&mut self) -> FrameTransforms {
        let view = self.camera.view();
        let mut model_view = view * self.controller.rotation();

        let auto_rotation = if !self.controller.is_dragging() && self.auto.is_enabled() {
            let r = self.auto.advance();
            model_view *= r;
            Some(r)
        } else {
            None
        };

        FrameTransforms {
            view,
            model_view,
            auto_rotation,
        }
    }
}
