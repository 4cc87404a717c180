#![cfg_attr(target_arch = "spirv", no_std)]

use quad_gpu::{QUAD_COLOR, quad_position};
use spirv_std::{glam::Vec4, spirv};

#[spirv(vertex)]
pub fn main_vs(
    #[spirv(vertex_index)] vertex_index: u32,
    #[spirv(position)] out_pos: &mut Vec4,
) {
    *out_pos = quad_position(vertex_index);
}

#[spirv(fragment)]
pub fn main_fs(output: &mut Vec4) {
    *output = QUAD_COLOR;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stage_writes_lookup() {
        for vertex_index in [0, 1, 2, 3, 4, 5, 6, u32::MAX] {
            let mut out_pos = Vec4::NAN;
            main_vs(vertex_index, &mut out_pos);
            assert_eq!(out_pos, quad_position(vertex_index));
        }
    }

    #[test]
    fn fragment_stage_writes_white() {
        let mut output = Vec4::ZERO;
        main_fs(&mut output);
        assert_eq!(output.to_array(), [1.0, 1.0, 1.0, 1.0]);

        // Overwrites whatever was there before.
        let mut output = Vec4::splat(-3.0);
        main_fs(&mut output);
        assert_eq!(output, QUAD_COLOR);
    }
}
