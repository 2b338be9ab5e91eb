/// Number of vertices in the cube: 6 faces × 2 triangles × 3 vertices.
pub const CUBE_VERTEX_COUNT: usize = 36;

/// A single cube vertex, joined from the position and color lists.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Static cube geometry as two index-aligned lists.
///
/// Vertex `i` is `(positions[i], colors[i])`. Positions span `[-1, 1]` on every
/// axis; each corner is colored `(position + 1) / 2`, so the eight corners map to
/// the eight corners of the RGB cube.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeData {
    pub positions: [[f32; 3]; CUBE_VERTEX_COUNT],
    pub colors: [[f32; 3]; CUBE_VERTEX_COUNT],
}

#[rustfmt::skip]
const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0,  1.0], // 0
    [ 1.0, -1.0,  1.0], // 1
    [ 1.0,  1.0,  1.0], // 2
    [-1.0,  1.0,  1.0], // 3
    [-1.0, -1.0, -1.0], // 4
    [ 1.0, -1.0, -1.0], // 5
    [ 1.0,  1.0, -1.0], // 6
    [-1.0,  1.0, -1.0], // 7
];

// Corner indices per face, counter-clockwise seen from outside.
// Quad (a, b, c, d) expands to triangles (a, b, c) and (c, d, a).
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // front  (+z)
    [1, 5, 6, 2], // right  (+x)
    [4, 7, 6, 5], // back   (-z)
    [0, 3, 7, 4], // left   (-x)
    [3, 2, 6, 7], // top    (+y)
    [0, 4, 5, 1], // bottom (-y)
];

const QUAD_TO_TRIANGLES: [usize; 6] = [0, 1, 2, 2, 3, 0];

const fn corner_color(p: [f32; 3]) -> [f32; 3] {
    [(p[0] + 1.0) * 0.5, (p[1] + 1.0) * 0.5, (p[2] + 1.0) * 0.5]
}

const fn build() -> CubeData {
    let mut positions = [[0.0; 3]; CUBE_VERTEX_COUNT];
    let mut colors = [[0.0; 3]; CUBE_VERTEX_COUNT];

    let mut face = 0;
    while face < FACES.len() {
        let mut k = 0;
        while k < QUAD_TO_TRIANGLES.len() {
            let corner = CORNERS[FACES[face][QUAD_TO_TRIANGLES[k]]];
            let i = face * QUAD_TO_TRIANGLES.len() + k;
            positions[i] = corner;
            colors[i] = corner_color(corner);
            k += 1;
        }
        face += 1;
    }

    CubeData { positions, colors }
}

static CUBE: CubeData = build();

/// Returns the compiled-in cube geometry.
#[inline]
pub fn cube_data() -> &'static CubeData {
    &CUBE
}

impl CubeData {
    /// Returns a copy of the compiled-in cube geometry.
    pub fn new() -> Self {
        CUBE.clone()
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Joins position and color for vertex `i`.
    pub fn vertex(&self, i: usize) -> Option<Vertex> {
        Some(Vertex {
            position: *self.positions.get(i)?,
            color: *self.colors.get(i)?,
        })
    }

    /// Iterates vertices in draw order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.positions
            .iter()
            .zip(self.colors.iter())
            .map(|(&position, &color)| Vertex { position, color })
    }
}

impl Default for CubeData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn lists_have_matching_lengths() {
        let cube = cube_data();
        assert_eq!(cube.positions.len(), cube.colors.len());
        assert_eq!(cube.positions.len() % 3, 0);
        assert_eq!(cube.vertex_count(), 36);
    }

    #[test]
    fn positions_stay_in_unit_range() {
        for p in cube_data().positions {
            for c in p {
                assert!((-1.0..=1.0).contains(&c), "component {c} out of range");
            }
        }
    }

    #[test]
    fn colors_follow_their_positions() {
        for v in cube_data().vertices() {
            assert_eq!(v.color, corner_color(v.position));
            for c in v.color {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn every_triangle_faces_outward() {
        let cube = cube_data();
        for tri in cube.positions.chunks_exact(3) {
            let normal = cross(sub(tri[1], tri[0]), sub(tri[2], tri[0]));
            let centroid = [
                (tri[0][0] + tri[1][0] + tri[2][0]) / 3.0,
                (tri[0][1] + tri[1][1] + tri[2][1]) / 3.0,
                (tri[0][2] + tri[1][2] + tri[2][2]) / 3.0,
            ];
            assert!(dot(normal, centroid) > 0.0, "inward triangle {tri:?}");
        }
    }

    #[test]
    fn each_face_has_two_triangles() {
        // Each axis-aligned face plane (x=±1, y=±1, z=±1) owns exactly 6 vertices.
        let cube = cube_data();
        for tri in cube.positions.chunks_exact(6) {
            let shared_axis = (0..3).find(|&axis| tri.iter().all(|p| p[axis] == tri[0][axis]));
            assert!(shared_axis.is_some(), "face is not planar: {tri:?}");
        }
    }

    #[test]
    fn vertex_lookup_is_bounds_checked() {
        let cube = CubeData::new();
        assert_eq!(
            cube.vertex(0),
            Some(Vertex {
                position: [-1.0, -1.0, 1.0],
                color: [0.0, 0.0, 1.0],
            })
        );
        assert!(cube.vertex(36).is_none());
    }
}
