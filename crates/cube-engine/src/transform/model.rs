use glam::{Mat4, Vec3};

/// Object placement in world space.
///
/// Rotation is in radians and applied about X, then Y, then Z, after scaling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelTransform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl ModelTransform {
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        build_model(self)
    }
}

/// Builds the local-to-world matrix `T · Rx · Ry · Rz · S`.
pub fn build_model(transform: &ModelTransform) -> Mat4 {
    Mat4::from_translation(transform.translation)
        * Mat4::from_rotation_x(transform.rotation.x)
        * Mat4::from_rotation_y(transform.rotation.y)
        * Mat4::from_rotation_z(transform.rotation.z)
        * Mat4::from_scale(transform.scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_is_identity() {
        assert_eq!(ModelTransform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = ModelTransform {
            translation: Vec3::new(1.0, 0.0, 0.0),
            scale: Vec3::splat(2.0),
            ..Default::default()
        };
        let p = t.matrix().transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn rotation_x_is_outermost() {
        let t = ModelTransform {
            rotation: Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0),
            ..Default::default()
        };
        let expected = Mat4::from_rotation_x(FRAC_PI_2) * Mat4::from_rotation_y(FRAC_PI_2);
        assert!(t.matrix().abs_diff_eq(expected, 1e-6));

        let swapped = Mat4::from_rotation_y(FRAC_PI_2) * Mat4::from_rotation_x(FRAC_PI_2);
        assert!(!t.matrix().abs_diff_eq(swapped, 1e-3));
    }
}
