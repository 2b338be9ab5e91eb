use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Byte offset of the MVP matrix inside its uniform buffer.
pub const MVP_UNIFORM_OFFSET: wgpu::BufferAddress = 0;

/// Size of the MVP uniform: one 4x4 `f32` matrix.
pub const MVP_UNIFORM_SIZE: wgpu::BufferAddress = 64;

/// GPU layout of the MVP matrix: column-major, matching WGSL `mat4x4<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MvpUniform {
    pub mvp: [[f32; 4]; 4],
}

impl MvpUniform {
    #[inline]
    pub fn new(mvp: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Mat4> for MvpUniform {
    fn from(m: Mat4) -> Self {
        Self::new(m)
    }
}

/// Minimum binding size for the MVP uniform.
pub(super) fn mvp_min_binding_size() -> std::num::NonZeroU64 {
    const SIZE: std::num::NonZeroU64 = match std::num::NonZeroU64::new(MVP_UNIFORM_SIZE) {
        Some(size) => size,
        None => panic!("MVP uniform size is zero"),
    };
    SIZE
}

/// Overwrites the whole MVP uniform buffer.
pub(super) fn write_mvp(queue: &wgpu::Queue, buffer: &wgpu::Buffer, mvp: Mat4) {
    let uniform = MvpUniform::new(mvp);
    queue.write_buffer(buffer, MVP_UNIFORM_OFFSET, uniform.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn uniform_is_exactly_sixteen_floats() {
        assert_eq!(std::mem::size_of::<MvpUniform>() as u64, MVP_UNIFORM_SIZE);
        assert_eq!(MvpUniform::new(Mat4::IDENTITY).as_bytes().len(), 64);
        assert_eq!(mvp_min_binding_size().get(), 64);
        assert_eq!(MVP_UNIFORM_OFFSET, 0);
    }

    #[test]
    fn bytes_are_column_major() {
        let m = Mat4::from_cols(
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        );
        let uniform = MvpUniform::from(m);
        let floats: &[f32] = bytemuck::cast_slice(uniform.as_bytes());
        let expected: Vec<f32> = (1..=16).map(|i| i as f32).collect();
        assert_eq!(floats, expected.as_slice());
    }
}
