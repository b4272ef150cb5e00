//! Viewer configuration.
//!
//! Everything is fixed in code; there are no flags or config files. The
//! defaults describe the whole scene.

use glam::Vec3;
use tissue_engine::paint::Color;

/// Fixed camera basis and perspective parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub at: Vec3,
    pub up: Vec3,
    /// Vertical field of view, in degrees.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            at: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 45.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

/// Drag and idle-animation tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Degrees of rotation per pixel of pointer travel.
    pub drag_deg_per_px: f32,
    /// Degrees added to the auto-rotation angle on every idle tick.
    pub auto_step_deg: f32,
    /// Whether the box spins on its own while the pointer is up.
    pub animation_enabled: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            drag_deg_per_px: 0.5,
            auto_step_deg: 0.5,
            animation_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub width: f64,
    pub height: f64,
    pub clear_color: Color,
    pub camera: CameraConfig,
    pub motion: MotionConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Tissue Box".to_string(),
            width: 512.0,
            height: 512.0,
            clear_color: Color::BLACK,
            camera: CameraConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}
