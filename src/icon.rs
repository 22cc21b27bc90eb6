use image::RgbImage;
use tracing::debug;

use crate::config::Palette;
use crate::models::Glyph;

// Render a square app icon: solid background with a centered white glyph.
// Every pixel is sampled once at its center and gets exactly one of the two palette colors.
pub fn render_icon(size: u32, glyph: Glyph, palette: &Palette) -> RgbImage {
    let shapes = match glyph {
        Glyph::Clock => clock_shapes(size),
        Glyph::Checkmark => checkmark_shapes(size),
    };
    debug!(size, ?glyph, shapes = shapes.len(), "rendering icon");

    let mut img = RgbImage::from_pixel(size, size, palette.background);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if shapes.iter().any(|s| s.covers(px, py)) {
            *pixel = palette.foreground;
        }
    }
    img
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    /// Circle outline, stroked inward from `radius`.
    Ring { cx: f32, cy: f32, radius: f32, width: f32 },
    /// Straight stroke with flat ends.
    Segment { a: (f32, f32), b: (f32, f32), width: f32 },
    Disc { cx: f32, cy: f32, radius: f32 },
}

impl Shape {
    fn covers(&self, px: f32, py: f32) -> bool {
        match *self {
            Shape::Ring { cx, cy, radius, width } => {
                let d = dist(px - cx, py - cy);
                d <= radius && d >= radius - width
            }
            Shape::Segment { a, b, width } => in_segment(px, py, a, b, width),
            Shape::Disc { cx, cy, radius } => dist(px - cx, py - cy) <= radius,
        }
    }
}

/// Center and glyph scale shared by both glyphs.
fn layout(size: u32) -> (f32, f32, f32) {
    let c = (size / 2) as f32;
    let icon_size = size as f32 * 0.7;
    (c, c, icon_size)
}

/// Stroke width proportional to the canvas, never thinner than `min` pixels.
#[inline]
fn stroke(size: u32, factor: f32, min: f32) -> f32 {
    (size as f32 * factor).floor().max(min)
}

fn clock_shapes(size: u32) -> Vec<Shape> {
    let (cx, cy, icon_size) = layout(size);
    let radius = icon_size * 0.4;
    let tick_width = stroke(size, 0.015, 2.0);

    vec![
        Shape::Ring { cx, cy, radius, width: stroke(size, 0.02, 2.0) },
        // 12 o'clock
        Shape::Segment {
            a: (cx, cy - radius),
            b: (cx, cy - radius * 0.7),
            width: tick_width,
        },
        // 3 o'clock
        Shape::Segment {
            a: (cx + radius * 0.7, cy),
            b: (cx + radius, cy),
            width: tick_width,
        },
        Shape::Disc { cx, cy, radius: stroke(size, 0.02, 2.0) },
    ]
}

fn checkmark_shapes(size: u32) -> Vec<Shape> {
    let (cx, cy, icon_size) = layout(size);
    let check = icon_size * 0.5;
    let width = stroke(size, 0.03, 3.0);

    let left = (cx - check * 0.3, cy - check * 0.1);
    let mid = (cx, cy + check * 0.2);
    let right = (cx + check * 0.3, cy - check * 0.1);

    vec![
        Shape::Segment { a: left, b: mid, width },
        Shape::Segment { a: mid, b: right, width },
    ]
}

#[inline]
fn dist(dx: f32, dy: f32) -> f32 { (dx * dx + dy * dy).sqrt() }

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

fn in_segment(px: f32, py: f32, a: (f32, f32), b: (f32, f32), width: f32) -> bool {
    let (ax, ay) = a;
    let (dx, dy) = (b.0 - ax, b.1 - ay);
    let len = dist(dx, dy);
    if len == 0.0 {
        return false;
    }
    let (rx, ry) = (px - ax, py - ay);
    let along = (rx * dx + ry * dy) / len;
    let across = cross(dx, dy, rx, ry).abs() / len;
    along >= 0.0 && along <= len && across <= width * 0.5
}
