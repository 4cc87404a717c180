use std::ops::Range;

use quad_gpu::QUAD_VERTEX_COUNT;

#[cfg(feature = "spirv")]
pub const SCREEN_QUAD_SHADER: &[u8] = include_bytes!(env!("screen_quad.spv"));

pub const VERTEX_ENTRY_POINT: &str = "main_vs";
pub const FRAGMENT_ENTRY_POINT: &str = "main_fs";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    TriangleList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentFormat {
    Rgba32Float,
}

impl AttachmentFormat {
    pub fn texel_size(&self) -> usize {
        match self {
            AttachmentFormat::Rgba32Float => 16,
        }
    }
}

/// What a host has to set up before issuing a draw with the screen-quad
/// entry points. Nothing is bound: positions come from the vertex index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawContract {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub topology: Topology,
    pub vertex_buffers: u32,
    pub index_buffer: bool,
    pub color_attachment: u32,
    pub format: AttachmentFormat,
}

impl DrawContract {
    pub const SCREEN_QUAD: Self = Self {
        vertex_count: QUAD_VERTEX_COUNT,
        instance_count: 1,
        topology: Topology::TriangleList,
        vertex_buffers: 0,
        index_buffer: false,
        color_attachment: 0,
        format: AttachmentFormat::Rgba32Float,
    };

    pub fn triangle_count(&self) -> u32 {
        match self.topology {
            Topology::TriangleList => self.vertex_count / 3,
        }
    }

    pub fn vertices(&self) -> Range<u32> {
        0..self.vertex_count
    }

    pub fn instances(&self) -> Range<u32> {
        0..self.instance_count
    }
}
