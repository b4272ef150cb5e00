//! Elementary rotations in degrees.
//!
//! Every rotation the viewer builds goes through here, so any product of these
//! matrices stays a rigid rotation.

use glam::{Mat4, Vec3};

/// Right-handed rotation of `degrees` about `axis` (normalized here).
#[inline]
pub fn rotate(degrees: f32, axis: Vec3) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), degrees.to_radians())
}

#[inline]
pub fn rotate_x(degrees: f32) -> Mat4 {
    rotate(degrees, Vec3::X)
}

#[inline]
pub fn rotate_y(degrees: f32) -> Mat4 {
    rotate(degrees, Vec3::Y)
}

/// True when the upper 3x3 is orthonormal with determinant +1 and the matrix
/// carries no translation or projection, within `eps`.
#[cfg(test)]
pub fn is_rigid_rotation(m: &Mat4, eps: f32) -> bool {
    let r = glam::Mat3::from_mat4(*m);
    let orthonormal = (r.transpose() * r).abs_diff_eq(glam::Mat3::IDENTITY, eps);
    let proper = (r.determinant() - 1.0).abs() <= eps;
    let affine = m.w_axis.abs_diff_eq(glam::Vec4::W, eps)
        && m.row(3).abs_diff_eq(glam::Vec4::W, eps);
    orthonormal && proper && affine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_degrees_is_identity() {
        assert!(rotate_x(0.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
        assert!(rotate_y(0.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn quarter_turn_about_y_maps_x_to_minus_z() {
        let v = rotate_y(90.0).transform_vector3(Vec3::X);
        assert!(v.abs_diff_eq(-Vec3::Z, 1e-6));
    }

    #[test]
    fn quarter_turn_about_x_maps_y_to_z() {
        let v = rotate_x(90.0).transform_vector3(Vec3::Y);
        assert!(v.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn axis_is_normalized() {
        assert!(rotate(30.0, Vec3::new(0.0, 5.0, 0.0)).abs_diff_eq(rotate_y(30.0), 1e-6));
    }

    #[test]
    fn rigid_rotation_check() {
        assert!(is_rigid_rotation(&(rotate_y(33.0) * rotate_x(-71.0)), 1e-5));
        assert!(!is_rigid_rotation(&Mat4::from_scale(Vec3::splat(2.0)), 1e-5));
        assert!(!is_rigid_rotation(&Mat4::from_translation(Vec3::X), 1e-5));
        assert!(!is_rigid_rotation(&Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0)), 1e-5));
    }
}
