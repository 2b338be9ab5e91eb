use std::f32::consts::{FRAC_PI_4, PI};

use anyhow::{ensure, Result};
use glam::{Mat4, Vec3};

/// Fixed perspective camera.
///
/// Right-handed, looking from `eye` towards `target`. The projection maps depth
/// to `[0, 1]`, which is what wgpu expects in clip space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    /// Vertical field of view, radians.
    pub fov_y_radians: f32,

    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(3.0, 3.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_radians: FRAC_PI_4,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Camera {
    /// Rejects parameters that would produce a degenerate view or projection.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.eye.is_finite() && self.target.is_finite() && self.up.is_finite(),
            "camera vectors must be finite"
        );
        ensure!(self.eye != self.target, "camera eye and target coincide");
        ensure!(
            self.up.cross(self.target - self.eye).length_squared() > 0.0,
            "camera up vector is parallel to the view direction"
        );
        ensure!(
            self.fov_y_radians.is_finite() && self.z_near.is_finite() && self.z_far.is_finite(),
            "camera fov and clip planes must be finite"
        );
        ensure!(
            self.fov_y_radians > 0.0 && self.fov_y_radians < PI,
            "field of view must be in (0, pi), got {}",
            self.fov_y_radians
        );
        ensure!(
            self.z_near > 0.0 && self.z_far > self.z_near,
            "invalid clip planes: near={} far={}",
            self.z_near,
            self.z_far
        );
        Ok(())
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, aspect_ratio, self.z_near, self.z_far)
    }
}

/// Camera placement and perspective, composed for one aspect ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewProjection {
    pub view: Mat4,
    pub projection: Mat4,

    /// `projection * view`.
    pub view_projection: Mat4,

    pub aspect_ratio: f32,
}

/// Composes `projection(fov, aspect, near, far) * view(eye, target, up)`.
///
/// Must be rebuilt whenever the output aspect ratio changes.
pub fn build_view_projection(camera: &Camera, aspect_ratio: f32) -> ViewProjection {
    let view = camera.view();
    let projection = camera.projection(aspect_ratio);

    ViewProjection {
        view,
        projection,
        view_projection: projection * view,
        aspect_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_is_valid() {
        assert!(Camera::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_clip_planes() {
        let cam = Camera { z_near: 0.0, ..Default::default() };
        assert!(cam.validate().is_err());

        let cam = Camera { z_near: 10.0, z_far: 5.0, ..Default::default() };
        assert!(cam.validate().is_err());
    }

    #[test]
    fn validate_rejects_infinite_far_plane() {
        let cam = Camera { z_far: f32::INFINITY, ..Default::default() };
        assert!(cam.validate().is_err());

        let cam = Camera { z_near: f32::NAN, ..Default::default() };
        assert!(cam.validate().is_err());
    }

    #[test]
    fn validated_camera_yields_finite_view_projection() {
        let cam = Camera { z_far: 1.0e6, ..Default::default() };
        assert!(cam.validate().is_ok());
        let vp = build_view_projection(&cam, 4.0 / 3.0).view_projection;
        assert!(vp.is_finite());
    }

    #[test]
    fn validate_rejects_degenerate_orientation() {
        let cam = Camera { target: Vec3::new(3.0, 3.0, 5.0), ..Default::default() };
        assert!(cam.validate().is_err());

        let cam = Camera {
            eye: Vec3::new(0.0, 5.0, 0.0),
            ..Default::default()
        };
        assert!(cam.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_fov() {
        let cam = Camera { fov_y_radians: PI, ..Default::default() };
        assert!(cam.validate().is_err());

        let cam = Camera { fov_y_radians: f32::NAN, ..Default::default() };
        assert!(cam.validate().is_err());
    }

    #[test]
    fn view_projection_is_projection_times_view() {
        let cam = Camera::default();
        let vp = build_view_projection(&cam, 1.5);
        assert_eq!(vp.view_projection, vp.projection * vp.view);
        assert_ne!(vp.view_projection, vp.view * vp.projection);
    }

    #[test]
    fn projection_aspect_term_is_width_over_height() {
        let cam = Camera::default();
        let aspect = 800.0 / 600.0;
        let p = build_view_projection(&cam, aspect).projection;

        // perspective_rh: x scale = cot(fov/2) / aspect, y scale = cot(fov/2).
        let ratio = p.y_axis.y / p.x_axis.x;
        assert!((ratio - aspect).abs() < 1e-6, "ratio {ratio} != {aspect}");
        assert!((ratio - 600.0 / 800.0).abs() > 0.1);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let vp = build_view_projection(&Camera::default(), 4.0 / 3.0);
        let clip = vp.view_projection * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
