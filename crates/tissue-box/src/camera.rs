use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Perspective parameters, kept alongside the matrix so the startup log (and
/// tests) can state what was uploaded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Perspective {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Right-handed perspective projection with a `[0, 1]` depth range.
pub fn compute_projection(p: &Perspective) -> Mat4 {
    Mat4::perspective_rh(p.fov_y_deg.to_radians(), p.aspect, p.near, p.far)
}

/// Right-handed look-at view matrix.
pub fn compute_view(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, at, up)
}

/// Fixed camera: the eye never moves, the projection is set once.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// Perspective for a surface of `width` x `height` physical pixels.
    pub fn perspective(&self, width: u32, height: u32) -> Perspective {
        Perspective {
            fov_y_deg: self.config.fov_y_deg,
            aspect: width as f32 / height.max(1) as f32,
            near: self.config.near,
            far: self.config.far,
        }
    }

    /// Recomputed on every call; the inputs are constant so the result is too.
    pub fn view(&self) -> Mat4 {
        compute_view(self.config.eye, self.config.at, self.config.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn square_surface_gives_unit_aspect() {
        let cam = Camera::new(CameraConfig::default());
        let p = cam.perspective(512, 512);
        assert_eq!(
            p,
            Perspective { fov_y_deg: 45.0, aspect: 1.0, near: 0.1, far: 10.0 }
        );
    }

    #[test]
    fn wide_surface_aspect() {
        let cam = Camera::new(CameraConfig::default());
        assert_eq!(cam.perspective(800, 400).aspect, 2.0);
    }

    #[test]
    fn projection_maps_near_and_far_to_depth_range() {
        let p = Perspective { fov_y_deg: 45.0, aspect: 1.0, near: 0.1, far: 10.0 };
        let m = compute_projection(&p);

        let near = m * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -10.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn projection_uses_vertical_fov() {
        let p = Perspective { fov_y_deg: 45.0, aspect: 1.0, near: 0.1, far: 10.0 };
        let m = compute_projection(&p);
        let f = 1.0 / (22.5f32).to_radians().tan();
        assert!((m.y_axis.y - f).abs() < 1e-5);
        assert!((m.x_axis.x - f).abs() < 1e-5);
    }

    #[test]
    fn view_moves_eye_to_origin() {
        let cam = Camera::new(CameraConfig::default());
        let eye = cam.view().transform_point3(Vec3::new(0.0, 0.0, 3.0));
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-6));

        // The target sits 3 units down the -z view axis.
        let at = cam.view().transform_point3(Vec3::ZERO);
        assert!(at.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-6));
    }

    #[test]
    fn view_is_stable_across_calls() {
        let cam = Camera::new(CameraConfig::default());
        assert_eq!(cam.view(), cam.view());
    }
}
