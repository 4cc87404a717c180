use glam::Vec4;
use quad::raster::{DrawStats, ScreenQuad, Target, draws_on_frame};
use quad::settings::{Resolution, Settings};
use quad::shader::DrawContract;
use quad_gpu::{QUAD_COLOR, quad_color_texel};

fn draw_screen_quad(width: u32, height: u32) -> (Target, DrawStats) {
    let settings = Settings::default().resolution(Resolution::new(width, height));
    let contract = DrawContract::SCREEN_QUAD;
    let mut target = Target::new(&settings);
    let stats = target.draw(&ScreenQuad, contract.vertices(), contract.instances());
    (target, stats)
}

#[test]
fn covers_whole_viewport_in_white() {
    for (width, height) in [(1, 1), (2, 2), (3, 7), (64, 64), (33, 20), (1920, 1080)] {
        let (target, stats) = draw_screen_quad(width, height);

        assert_eq!(stats.vertices, 6);
        assert_eq!(stats.triangles, 2);
        assert_eq!(stats.culled, 0);
        assert_eq!(
            stats.fragments,
            width as u64 * height as u64,
            "{width}x{height} over- or under-covered"
        );

        let texel = quad_color_texel();
        assert!(
            target.texels().chunks_exact(texel.len()).all(|chunk| chunk == texel),
            "{width}x{height} has a texel that is not white"
        );
    }
}

#[test]
fn corners_and_diagonal_are_white() {
    let (target, _) = draw_screen_quad(16, 16);
    for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15), (7, 7), (8, 8), (3, 3)] {
        assert_eq!(target.pixel(x, y), Some(QUAD_COLOR), "pixel ({x}, {y})");
    }
}

#[test]
fn repeated_draws_are_identical() {
    let (first, first_stats) = draw_screen_quad(40, 24);
    let (second, second_stats) = draw_screen_quad(40, 24);
    assert_eq!(first_stats, second_stats);
    assert_eq!(first.texels(), second.texels());
}

#[test]
fn instances_redraw_the_quad() {
    let settings = Settings::default().resolution(Resolution::new(10, 10)).instances(3);
    let mut target = Target::new(&settings);

    let vertices = DrawContract::SCREEN_QUAD.vertices();
    let stats = target.draw(&ScreenQuad, vertices, 0..settings.instances);

    assert_eq!(stats.vertices, 18);
    assert_eq!(stats.triangles, 6);
    assert_eq!(stats.fragments, 300);
}

#[test]
fn saved_frame_is_white_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("quad.png");
    let (target, _) = draw_screen_quad(12, 9);

    target.save(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (12, 9));
    assert!(image.pixels().all(|pixel| pixel.0 == [255, 255, 255, 255]));
}

#[test]
fn flash_sequence_alternates_quad_and_clear() {
    let clear = Vec4::new(0.0, 0.0, 0.0, 1.0);
    let settings = Settings::default().resolution(Resolution::new(4, 4)).clear_color(clear);
    let mut target = Target::new(&settings);

    for frame in 0..4 {
        target.clear(settings.clear_color);
        if draws_on_frame(frame) {
            target.draw(&ScreenQuad, DrawContract::SCREEN_QUAD.vertices(), 0..1);
        }

        let expected = if frame % 2 == 0 { QUAD_COLOR } else { clear };
        assert_eq!(target.pixel(2, 1), Some(expected), "frame {frame}");
    }
}
