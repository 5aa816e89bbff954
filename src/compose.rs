use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::debug;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::constants::{geometry, palette};

fn paint(color: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint
}

fn stroke(width: f32, line_join: LineJoin) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Butt,
        line_join,
        ..Stroke::default()
    }
}

fn circle(cx: f32, cy: f32, radius: f32) -> Result<Path> {
    PathBuilder::from_circle(cx, cy, radius)
        .with_context(|| format!("Invalid circle at ({}, {}) r={}", cx, cy, radius))
}

fn polyline(points: &[(f32, f32)]) -> Result<Path> {
    let mut pb = PathBuilder::new();
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        pb.move_to(x, y);
    }
    for &(x, y) in iter {
        pb.line_to(x, y);
    }
    pb.finish().context("Polyline needs at least two points")
}

fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, radius: f32, color: [u8; 4]) -> Result<()> {
    let path = circle(cx, cy, radius)?;
    pixmap.fill_path(&path, &paint(color), FillRule::Winding, Transform::identity(), None);
    Ok(())
}

/// Draw the icon onto a transparent square canvas of the given size.
///
/// Every shape is placed relative to `size / 2` with fixed offsets, so the
/// result depends on nothing but `size`. The design is laid out for 256;
/// smaller canvases clip it.
pub fn render_canvas(size: u32) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size)
        .with_context(|| format!("Failed to allocate {}x{} canvas", size, size))?;

    let center = (size / 2) as f32;

    // Background disc
    debug!("Drawing background disc");
    fill_circle(&mut pixmap, center, center, geometry::DISC_RADIUS, palette::BACKGROUND)?;

    // Waveform
    debug!("Drawing waveform");
    let points: Vec<(f32, f32)> = geometry::WAVE_POINTS
        .iter()
        .map(|&(dx, dy)| (center + dx, center + dy))
        .collect();
    let wave = polyline(&points)?;
    pixmap.stroke_path(
        &wave,
        &paint(palette::WAVE),
        &stroke(geometry::WAVE_WIDTH, LineJoin::Round),
        Transform::identity(),
        None,
    );

    // In/out markers, each capped at its top end
    debug!("Drawing markers");
    let top = center - geometry::MARKER_HALF_HEIGHT;
    let bottom = center + geometry::MARKER_HALF_HEIGHT;
    for x in [center - geometry::MARKER_OFFSET_X, center + geometry::MARKER_OFFSET_X] {
        let line = polyline(&[(x, top), (x, bottom)])?;
        pixmap.stroke_path(
            &line,
            &paint(palette::MARKER),
            &stroke(geometry::MARKER_WIDTH, LineJoin::Miter),
            Transform::identity(),
            None,
        );
        fill_circle(&mut pixmap, x, top, geometry::MARKER_CAP_RADIUS, palette::MARKER)?;
    }

    Ok(to_rgba_image(&pixmap))
}

/// Convert tiny-skia's premultiplied pixels into a straight-alpha image.
fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::canvas;

    #[test]
    fn test_canvas_has_requested_size() {
        let img = render_canvas(canvas::SIZE).unwrap();
        assert_eq!(img.dimensions(), (256, 256));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_canvas(canvas::SIZE).unwrap();
        let b = render_canvas(canvas::SIZE).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_corners_are_transparent() {
        let img = render_canvas(canvas::SIZE).unwrap();
        for (x, y) in [(0, 0), (255, 0), (0, 255), (255, 255)] {
            assert_eq!(img.get_pixel(x, y).0[3], 0, "corner ({}, {})", x, y);
        }
    }

    #[test]
    fn test_disc_only_region_has_background_color() {
        let img = render_canvas(canvas::SIZE).unwrap();
        // Right of center, clear of waveform and markers
        assert_eq!(img.get_pixel(228, 128).0, palette::BACKGROUND);
        assert_eq!(img.get_pixel(128, 20).0, palette::BACKGROUND);
    }

    #[test]
    fn test_marker_and_cap_use_accent_color() {
        let img = render_canvas(canvas::SIZE).unwrap();
        // Right marker body
        assert_eq!(img.get_pixel(178, 100).0, palette::MARKER);
        // Left marker cap, above the line's top end
        assert_eq!(img.get_pixel(78, 72).0, palette::MARKER);
    }

    #[test]
    fn test_waveform_is_white_at_a_vertex() {
        let img = render_canvas(canvas::SIZE).unwrap();
        // Vertex at offset (10, 30), inside the round join
        assert_eq!(img.get_pixel(138, 158).0, palette::WAVE);
    }

    #[test]
    fn test_polyline_rejects_single_point() {
        assert!(polyline(&[(1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_zero_size_canvas_fails() {
        assert!(render_canvas(0).is_err());
    }
}
