//! Transform math.
//!
//! Builds the model, view-projection and MVP matrices. Independent of any GPU
//! object so it can be exercised without a device.
//!
//! Composition order is fixed: `mvp = projection * view * model`.

mod camera;
mod model;

pub use camera::{build_view_projection, Camera, ViewProjection};
pub use model::{build_model, ModelTransform};

use glam::Mat4;

/// Composes the final transform as `view_projection * model`.
#[inline]
pub fn build_mvp(view_projection: Mat4, model: Mat4) -> Mat4 {
    view_projection * model
}

/// Output width divided by height.
///
/// A zero height (minimized window) is treated as 1.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn mvp_is_view_projection_times_model() {
        let vp = build_view_projection(&Camera::default(), 1.0).view_projection;
        let model = ModelTransform {
            translation: Vec3::new(1.0, -2.0, 0.5),
            rotation: Vec3::new(0.3, 0.7, 0.0),
            ..Default::default()
        }
        .matrix();

        let mvp = build_mvp(vp, model);
        assert_eq!(mvp, vp * model);
        assert!(!mvp.abs_diff_eq(model * vp, 1e-3));
    }

    #[test]
    fn identity_model_leaves_view_projection_unchanged() {
        let vp = build_view_projection(&Camera::default(), 2.0).view_projection;
        assert_eq!(build_mvp(vp, ModelTransform::default().matrix()), vp);
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
        assert_eq!(aspect_ratio(600, 800), 0.75);
        assert_eq!(aspect_ratio(640, 0), 640.0);
    }

    #[test]
    fn canvas_800x600_yields_reproducible_mvp() {
        let camera = Camera::default();
        let build = || {
            let vp = build_view_projection(&camera, aspect_ratio(800, 600));
            build_mvp(vp.view_projection, ModelTransform::default().matrix())
        };

        let a = build().to_cols_array().map(f32::to_bits);
        let b = build().to_cols_array().map(f32::to_bits);
        assert_eq!(a, b);

        let expected = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 800.0 / 600.0, 0.1, 100.0)
            * Mat4::look_at_rh(Vec3::new(3.0, 3.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(build(), expected);
    }
}
