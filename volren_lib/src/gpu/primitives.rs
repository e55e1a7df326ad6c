//! Vertex data of the built-in meshes

/// Position (xyz) and uv per vertex
pub const SCREEN_QUAD_STRIDE: usize = 5;

/// Triangle strip covering clip space
#[rustfmt::skip]
pub const SCREEN_QUAD: [f32; 4 * SCREEN_QUAD_STRIDE] = [
    -1.0,  1.0, 0.0,   0.0, 1.0,
    -1.0, -1.0, 0.0,   0.0, 0.0,
     1.0,  1.0, 0.0,   1.0, 1.0,
     1.0, -1.0, 0.0,   1.0, 0.0,
];

pub const UNIT_CUBE_VERTICES: usize = 36;

/// Corner `i` has coordinates given by its bits, x is the lowest
const fn corner(i: usize) -> [f32; 3] {
    [(i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32]
}

/// Two counter-clockwise triangles per face, seen from outside
const CUBE_INDICES: [usize; UNIT_CUBE_VERTICES] = [
    0, 2, 3, 0, 3, 1, // -z
    4, 5, 7, 4, 7, 6, // +z
    0, 4, 6, 0, 6, 2, // -x
    1, 3, 7, 1, 7, 5, // +x
    0, 1, 5, 0, 5, 4, // -y
    2, 6, 7, 2, 7, 3, // +y
];

/// Cube spanning `[0;1]^3`, positions only
pub fn unit_cube() -> Vec<f32> {
    CUBE_INDICES.iter().flat_map(|&i| corner(i)).collect()
}
