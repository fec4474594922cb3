//! Vector shape primitives: anvil, spark, shield, particle, plus pixel-grid helpers.
//!
//! All geometry is integer pixel arithmetic on a center point and one size scalar, so a shape
//! renders identically at every call site that passes the same inputs.

use kurbo::{Ellipse, RoundedRect};

use crate::animation::particle::Particle;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::px_rect;
use crate::render::canvas::Layer;
use crate::render::palette::AnvilPalette;

/// Alpha ceiling applied when drawing particles.
pub const PARTICLE_ALPHA_CEILING: u8 = 150;

/// Rounded rectangle over inclusive pixel corners; the radius is clamped to fit.
pub fn rounded_rect_px(x0: i32, y0: i32, x1: i32, y1: i32, radius: f64) -> RoundedRect {
    let rect = px_rect(x0, y0, x1, y1);
    let max_r = (rect.width().min(rect.height()) / 2.0).max(0.0);
    RoundedRect::from_rect(rect, radius.clamp(0.0, max_r))
}

/// Stroke a rounded rectangle so the outline stays inside the inclusive pixel corners.
#[allow(clippy::too_many_arguments)]
pub fn outline_rounded_rect_px(
    layer: &mut Layer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: f64,
    width: f64,
    color: Rgba8,
) {
    let half = width / 2.0;
    let rect = px_rect(x0, y0, x1, y1).inset(-half);
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let max_r = rect.width().min(rect.height()) / 2.0;
    let shape = RoundedRect::from_rect(rect, (radius - half).clamp(0.0, max_r));
    layer.stroke(&shape, width, color);
}

/// Ellipse inscribed in inclusive pixel corners.
pub fn ellipse_px(x0: i32, y0: i32, x1: i32, y1: i32) -> Ellipse {
    Ellipse::from_rect(px_rect(x0, y0, x1, y1))
}

fn pt(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Stylized anvil: base, neck, face, horn and heel.
///
/// `(cx, cy)` is the waist center; sub-part dimensions are fixed fractions of `size`.
pub fn draw_anvil(layer: &mut Layer, cx: i32, cy: i32, size: i32, palette: &AnvilPalette) {
    if size <= 0 {
        return;
    }
    let s = size;

    // Base.
    let base_top = cy + s / 3;
    let base_h = s / 4;
    layer.fill(
        &rounded_rect_px(cx - s, base_top, cx + s, base_top + base_h, 4.0),
        palette.steel,
    );
    layer.line_px(
        (cx - s + 4, base_top + 2),
        (cx + s - 4, base_top + 2),
        2.0,
        palette.light,
    );
    layer.line_px(
        (cx - s + 2, base_top + base_h - 1),
        (cx + s - 2, base_top + base_h - 1),
        1.0,
        palette.dark,
    );

    // Neck.
    let neck_w = s / 2;
    layer.fill(
        &px_rect(cx - neck_w, cy - s / 6, cx + neck_w, cy + s / 3),
        palette.dark,
    );
    layer.line_px(
        (cx - neck_w, cy - s / 6),
        (cx - neck_w, cy + s / 3),
        1.0,
        palette.edge,
    );

    // Face.
    let face_w = s * 5 / 4;
    let face_top = cy - s * 3 / 4;
    layer.fill(
        &rounded_rect_px(cx - face_w, face_top, cx + s, cy - s / 6, 5.0),
        palette.steel,
    );
    layer.line_px(
        (cx - face_w + 4, face_top + 3),
        (cx + s - 4, face_top + 3),
        3.0,
        palette.light,
    );

    // Horn.
    let horn_tip = cx - face_w - s * 3 / 4;
    layer.polygon(
        &[
            pt(cx - face_w, face_top),
            pt(horn_tip, cy - s / 2),
            pt(cx - face_w, cy - s / 6),
        ],
        palette.steel,
    );
    layer.line_px(
        (horn_tip + 4, cy - s / 2),
        (cx - face_w, face_top + 4),
        2.0,
        palette.light,
    );

    // Heel.
    let heel_w = s / 3;
    layer.fill(
        &px_rect(cx + s - heel_w, cy - s / 6, cx + s, cy + s / 3),
        palette.steel,
    );
}

/// Eight-point star: long points on the axes, short points on the diagonals.
pub fn draw_spark(layer: &mut Layer, cx: i32, cy: i32, size: i32, color: Rgba8) {
    if size <= 0 {
        return;
    }
    let s = size;
    let q = s / 4;
    layer.polygon(
        &[
            pt(cx, cy - s),
            pt(cx + q, cy - q),
            pt(cx + s, cy),
            pt(cx + q, cy + q),
            pt(cx, cy + s),
            pt(cx - q, cy + q),
            pt(cx - s, cy),
            pt(cx - q, cy - q),
        ],
        color,
    );
}

/// Hexagonal shield with a white checkmark.
pub fn draw_shield(layer: &mut Layer, cx: i32, cy: i32, size: i32, color: Rgba8) {
    if size <= 0 {
        return;
    }
    let s = size;
    layer.polygon(
        &[
            pt(cx, cy - s),
            pt(cx + s, cy - s / 2),
            pt(cx + s, cy + s / 3),
            pt(cx, cy + s),
            pt(cx - s, cy + s / 3),
            pt(cx - s, cy - s / 2),
        ],
        color,
    );
    layer.polyline_px(
        &[
            (cx - s / 3, cy),
            (cx - s / 8, cy + s / 3),
            (cx + s / 3, cy - s / 3),
        ],
        2.0,
        Rgba8::rgb(255, 255, 255),
    );
}

/// Draw `particle` as it appears at `frame` of a `cycle_frames` loop.
pub fn draw_particle(
    layer: &mut Layer,
    particle: &Particle,
    frame: u64,
    cycle_frames: u64,
    travel_px: f64,
    color: Rgba8,
) {
    let state = particle.state_at(frame, cycle_frames, travel_px);
    let r = f64::from(state.radius);
    let alpha = state.alpha.min(PARTICLE_ALPHA_CEILING);
    layer.fill(
        &Ellipse::new(state.center, (r, r), 0.0),
        color.with_alpha(alpha),
    );
}

/// Filled dot of radius `r` around a pixel center.
pub fn draw_dot(layer: &mut Layer, cx: i32, cy: i32, r: i32, color: Rgba8) {
    layer.fill(&ellipse_px(cx - r, cy - r, cx + r, cy + r), color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
