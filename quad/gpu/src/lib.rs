#![cfg_attr(target_arch = "spirv", no_std)]

#[cfg(not(target_arch = "spirv"))]
use bytemuck::cast;

use spirv_std::glam::{Vec2, Vec4};

pub const TOP_LEFT: Vec2 = Vec2::new(-1.0, 1.0);
pub const BOTTOM_LEFT: Vec2 = Vec2::new(-1.0, -1.0);
pub const BOTTOM_RIGHT: Vec2 = Vec2::new(1.0, -1.0);
pub const TOP_RIGHT: Vec2 = Vec2::new(1.0, 1.0);

/// Corner for any index without its own arm, including 3.
pub const DEFAULT_CORNER: Vec2 = TOP_LEFT;

/// Two triangles, (0, 1, 2) and (3, 4, 5), no buffers bound.
pub const QUAD_VERTEX_COUNT: u32 = 6;
pub const QUAD_TRIANGLE_COUNT: u32 = QUAD_VERTEX_COUNT / 3;

/// Opaque white.
pub const QUAD_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

pub fn quad_corner(vertex_index: u32) -> Vec2 {
    match vertex_index {
        0 => TOP_LEFT,
        1 => BOTTOM_LEFT,
        2 => BOTTOM_RIGHT,
        4 => BOTTOM_RIGHT,
        5 => TOP_RIGHT,
        _ => DEFAULT_CORNER,
    }
}

/// Clip-space position of a screen-quad vertex. Total over `u32`.
pub fn quad_position(vertex_index: u32) -> Vec4 {
    Vec4::from((quad_corner(vertex_index), 0.0, 1.0))
}

/// `QUAD_COLOR` as one RGBA32 float texel.
#[cfg(not(target_arch = "spirv"))]
pub fn quad_color_texel() -> [u8; 16] {
    cast::<[f32; 4], [u8; 16]>(QUAD_COLOR.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_match_table() {
        let expected = [
            (0, [-1.0, 1.0]),
            (1, [-1.0, -1.0]),
            (2, [1.0, -1.0]),
            (3, [-1.0, 1.0]),
            (4, [1.0, -1.0]),
            (5, [1.0, 1.0]),
        ];
        for (index, [x, y]) in expected {
            assert_eq!(quad_position(index).to_array(), [x, y, 0.0, 1.0], "vertex {index}");
        }
    }

    #[test]
    fn index_three_repeats_index_zero() {
        assert_eq!(quad_position(3), quad_position(0));
    }

    #[test]
    fn out_of_range_falls_back_to_default() {
        for index in [6, 7, 100, 1 << 16, u32::MAX - 1, u32::MAX] {
            assert_eq!(quad_position(index), Vec4::new(-1.0, 1.0, 0.0, 1.0), "vertex {index}");
        }
    }

    #[test]
    fn depth_and_w_are_fixed() {
        for index in (0..64).chain([u32::MAX]) {
            let position = quad_position(index);
            assert_eq!(position.z, 0.0);
            assert_eq!(position.w, 1.0);
        }
    }

    #[test]
    fn lookup_is_repeatable() {
        for index in 0..QUAD_VERTEX_COUNT + 2 {
            let first = quad_position(index);
            for _ in 0..8 {
                assert_eq!(quad_position(index), first);
            }
        }
    }

    #[test]
    fn triangles_cover_all_four_corners() {
        let corners: Vec<_> = (0..QUAD_VERTEX_COUNT).map(quad_corner).collect();
        for corner in [TOP_LEFT, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_RIGHT] {
            assert!(corners.contains(&corner), "{corner:?} is never emitted");
        }
        assert_eq!(QUAD_TRIANGLE_COUNT, 2);
    }

    #[test]
    fn color_texel_is_four_ones() {
        let texel = quad_color_texel();
        for channel in texel.chunks_exact(4) {
            assert_eq!(f32::from_ne_bytes(channel.try_into().unwrap()), 1.0);
        }
    }
}
