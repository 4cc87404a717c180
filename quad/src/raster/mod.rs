use std::fs;
use std::ops::Range;
use std::path::Path;

use glam::{Vec4, Vec4Swizzles};
use image::{DynamicImage, Rgba, Rgba32FImage};
use log::{debug, warn};

use crate::Result;
use crate::settings::{Resolution, Settings};

const SUBPIXEL_BITS: u32 = 8;
const SUBPIXEL_ONE: i64 = 1 << SUBPIXEL_BITS;
const SUBPIXEL_HALF: i64 = SUBPIXEL_ONE / 2;

// Window coordinates are clamped to this many sub-pixels, twice the largest
// u32 extent, so edge functions stay inside i128. There is no clipper.
const GUARD_BAND: i64 = 1 << (32 + SUBPIXEL_BITS + 1);

/// The two programmable stages of a draw.
pub trait Pipeline {
    fn vertex(&self, vertex_index: u32) -> Vec4;
    fn fragment(&self) -> Vec4;
}

/// Runs the `screen-quad` entry points on the CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenQuad;

impl Pipeline for ScreenQuad {
    fn vertex(&self, vertex_index: u32) -> Vec4 {
        let mut out_pos = Vec4::ZERO;
        screen_quad::main_vs(vertex_index, &mut out_pos);
        out_pos
    }

    fn fragment(&self) -> Vec4 {
        let mut output = Vec4::ZERO;
        screen_quad::main_fs(&mut output);
        output
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub vertices: u64,
    pub triangles: u64,
    pub culled: u64,
    pub fragments: u64,
}

/// Even frames draw, odd frames only clear.
pub fn draws_on_frame(frame: u64) -> bool {
    frame % 2 == 0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fixed {
    x: i64,
    y: i64,
}

fn edge(a: Fixed, b: Fixed, p: Fixed) -> i128 {
    let wide = |value: i64| value as i128;
    wide(b.x - a.x) * wide(p.y - a.y) - wide(b.y - a.y) * wide(p.x - a.x)
}

// Window space has y pointing down and triangles are wound so that edge() is
// positive inside.
fn is_top_left(a: Fixed, b: Fixed) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dy < 0 || (dy == 0 && dx > 0)
}

/// A single RGBA32 float color attachment plus a triangle-list rasterizer
/// that follows the top-left fill rule.
pub struct Target {
    attachment: Rgba32FImage,
}

impl Target {
    pub fn new(settings: &Settings) -> Self {
        let resolution = settings.resolution.clamped();
        if resolution != settings.resolution {
            warn!(
                "quad::raster - {}x{} has an empty axis, using {}x{}",
                settings.resolution.width,
                settings.resolution.height,
                resolution.width,
                resolution.height
            );
        }

        Self {
            attachment: Rgba32FImage::from_pixel(
                resolution.width,
                resolution.height,
                Rgba(settings.clear_color.to_array()),
            ),
        }
    }

    pub fn resolution(&self) -> Resolution {
        let (width, height) = self.attachment.dimensions();
        Resolution::new(width, height)
    }

    pub fn clear(&mut self, color: Vec4) {
        let texel = Rgba(color.to_array());
        for pixel in self.attachment.pixels_mut() {
            *pixel = texel;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        self.attachment.get_pixel_checked(x, y).map(|pixel| Vec4::from_array(pixel.0))
    }

    pub fn attachment(&self) -> &Rgba32FImage {
        &self.attachment
    }

    /// Raw attachment contents, row-major, 16 bytes per texel.
    pub fn texels(&self) -> &[u8] {
        bytemuck::cast_slice(self.attachment.as_raw())
    }

    /// Writes the attachment as 8-bit RGBA, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        DynamicImage::ImageRgba32F(self.attachment.clone()).to_rgba8().save(path)?;
        debug!("quad::raster - wrote {}", path.display());
        Ok(())
    }

    /// Non-indexed triangle-list draw with no buffers bound, as a host would
    /// issue `draw(vertices, instances)`.
    pub fn draw<P: Pipeline>(
        &mut self,
        pipeline: &P,
        vertices: Range<u32>,
        instances: Range<u32>,
    ) -> DrawStats {
        let mut stats = DrawStats::default();

        for _ in instances.clone() {
            let positions: Vec<Vec4> = vertices
                .clone()
                .map(|vertex_index| pipeline.vertex(vertex_index))
                .collect();
            stats.vertices += positions.len() as u64;

            // Trailing vertices that do not complete a triangle are dropped.
            for clip in positions.chunks_exact(3) {
                stats.triangles += 1;
                match self.setup(clip) {
                    Some(window) => stats.fragments += self.fill(window, pipeline),
                    None => stats.culled += 1,
                }
            }
        }

        debug!("quad::raster - draw({vertices:?}, {instances:?}) -> {stats:?}");
        stats
    }

    fn to_window(&self, position: Vec4) -> Fixed {
        let (width, height) = self.attachment.dimensions();
        let ndc = position.xy() / position.w;
        let x = (ndc.x as f64 + 1.0) * 0.5 * width as f64;
        let y = (1.0 - ndc.y as f64) * 0.5 * height as f64;

        let snap = |value: f64| {
            ((value * SUBPIXEL_ONE as f64).round() as i64).clamp(-GUARD_BAND, GUARD_BAND)
        };
        Fixed { x: snap(x), y: snap(y) }
    }

    fn setup(&self, clip: &[Vec4]) -> Option<[Fixed; 3]> {
        if clip.iter().any(|position| position.w.is_nan() || position.w <= 0.0) {
            return None;
        }

        let mut window = [
            self.to_window(clip[0]),
            self.to_window(clip[1]),
            self.to_window(clip[2]),
        ];
        let area = edge(window[0], window[1], window[2]);
        if area == 0 {
            return None;
        }
        if area < 0 {
            window.swap(1, 2);
        }
        Some(window)
    }

    fn fill<P: Pipeline>(&mut self, [v0, v1, v2]: [Fixed; 3], pipeline: &P) -> u64 {
        let (width, height) = self.attachment.dimensions();

        // Pixel centers sit at half a pixel; keep only those inside the bounds.
        let first = |min: i64| {
            (min - SUBPIXEL_HALF + SUBPIXEL_ONE - 1)
                .div_euclid(SUBPIXEL_ONE)
                .max(0)
        };
        let last = |max: i64, size: u32| {
            (max - SUBPIXEL_HALF)
                .div_euclid(SUBPIXEL_ONE)
                .min(size as i64 - 1)
        };
        let x_range = first(v0.x.min(v1.x).min(v2.x))..=last(v0.x.max(v1.x).max(v2.x), width);
        let y_range = first(v0.y.min(v1.y).min(v2.y))..=last(v0.y.max(v1.y).max(v2.y), height);

        let edges = [(v0, v1), (v1, v2), (v2, v0)];
        let bias = edges.map(|(a, b)| if is_top_left(a, b) { 0 } else { -1 });

        let mut fragments = 0;
        for y in y_range {
            for x in x_range.clone() {
                let center = Fixed {
                    x: x * SUBPIXEL_ONE + SUBPIXEL_HALF,
                    y: y * SUBPIXEL_ONE + SUBPIXEL_HALF,
                };
                let covered = edges
                    .iter()
                    .zip(bias)
                    .all(|(&(a, b), bias)| edge(a, b, center) + bias >= 0);
                if covered {
                    let color = pipeline.fragment();
                    self.attachment.put_pixel(x as u32, y as u32, Rgba(color.to_array()));
                    fragments += 1;
                }
            }
        }
        fragments
    }
}
