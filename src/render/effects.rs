//! Full-canvas pixel effects: background gradient, radial glow and grid overlay.

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::AnvilResult;
use crate::render::canvas::Canvas;
use crate::render::composite::over;

/// Vertical linear gradient from `top` (row 0) toward `bottom`.
///
/// Row `y` gets `top + (bottom - top) * y / height` per channel, truncated, so row 0 is exactly
/// `top` and the last row is one step short of `bottom`.
pub fn draw_gradient(canvas: &mut Canvas, top: Rgba8, bottom: Rgba8) {
    let width = canvas.width() as usize;
    let height = canvas.height();
    let lerp = |a: u8, b: u8, y: u32| -> u8 {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * f64::from(y) / f64::from(height);
        v.clamp(0.0, 255.0) as u8
    };

    let data = canvas.data_mut();
    for y in 0..height {
        let row_color = Rgba8::rgba(
            lerp(top.r, bottom.r, y),
            lerp(top.g, bottom.g, y),
            lerp(top.b, bottom.b, y),
            lerp(top.a, bottom.a, y),
        )
        .premultiplied();
        let start = y as usize * width * 4;
        for px in data[start..start + width * 4].chunks_exact_mut(4) {
            px.copy_from_slice(&row_color);
        }
    }
}

/// Soft circular highlight built from concentric translucent circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Circle center.
    pub center: Point,
    /// Outermost circle radius in pixels.
    pub radius: u32,
    /// Glow color; alpha is ignored.
    pub color: Rgba8,
    /// Peak opacity factor before the ceiling is applied.
    pub intensity: f64,
    /// Radius decrement between circles.
    pub step: u32,
    /// Maximum alpha of any single circle.
    pub ceiling: u8,
}

impl Glow {
    /// Glow with the 2 px step and alpha ceiling of 80 used behind the icon anvil.
    pub fn new(center: Point, radius: u32, color: Rgba8, intensity: f64) -> Self {
        Self {
            center,
            radius,
            color,
            intensity,
            step: 2,
            ceiling: 80,
        }
    }

    /// Same glow with a different circle step and ceiling.
    pub fn with_rings(self, step: u32, ceiling: u8) -> Self {
        Self {
            step,
            ceiling,
            ..self
        }
    }

    /// Alpha of the circle with radius `r`: `min(ceiling, intensity * 255 * (1 - r/R)^2)`.
    pub fn ring_alpha(&self, r: u32) -> u8 {
        if self.radius == 0 {
            return 0;
        }
        let falloff = 1.0 - f64::from(r) / f64::from(self.radius);
        let alpha = (self.intensity * 255.0 * falloff * falloff).floor();
        alpha.clamp(0.0, f64::from(self.ceiling)) as u8
    }

    /// Alpha for every integer distance `0..=radius`.
    ///
    /// Circles are painted largest first onto one overlay, each replacing what is under it, so a
    /// pixel at distance `d` ends up with the alpha of the smallest circle with `r >= d`.
    fn coverage_table(&self) -> Vec<u8> {
        let step = self.step.max(1);
        let mut table = vec![0u8; self.radius as usize + 1];
        let mut r = self.radius;
        while r > 0 {
            let alpha = self.ring_alpha(r);
            for slot in &mut table[..=r as usize] {
                *slot = alpha;
            }
            r = r.saturating_sub(step);
        }
        table
    }
}

/// Composite a [`Glow`] over the canvas in a single pass; existing content stays visible
/// through it.
pub fn draw_radial_glow(canvas: &mut Canvas, glow: &Glow) -> AnvilResult<()> {
    if glow.radius == 0 || glow.intensity <= 0.0 {
        return Ok(());
    }
    let table = glow.coverage_table();
    if table.iter().all(|&a| a == 0) {
        return Ok(());
    }

    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let r = i64::from(glow.radius);
    let (cx, cy) = (glow.center.x.round() as i64, glow.center.y.round() as i64);
    let (x0, x1) = ((cx - r).max(0), (cx + r).min(w - 1));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(h - 1));
    if x0 > x1 || y0 > y1 {
        return Ok(());
    }

    let data = canvas.data_mut();
    for y in y0..=y1 {
        let dy = (y - cy) as f64;
        for x in x0..=x1 {
            let dx = (x - cx) as f64;
            let d = (dx * dx + dy * dy).sqrt().ceil() as usize;
            let Some(&alpha) = table.get(d) else {
                continue;
            };
            if alpha == 0 {
                continue;
            }
            let src = glow.color.with_alpha(alpha).premultiplied();
            let i = (y as usize * w as usize + x as usize) * 4;
            let out = over([data[i], data[i + 1], data[i + 2], data[i + 3]], src);
            data[i..i + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Overlay a square grid of 1 px lines every `spacing` pixels, starting at 0.
pub fn draw_grid(canvas: &mut Canvas, spacing: u32, color: Rgba8) -> AnvilResult<()> {
    if spacing == 0 || color.a == 0 {
        return Ok(());
    }
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    canvas.paint(|layer| {
        for gx in (0..w).step_by(spacing as usize) {
            layer.line_px((gx, 0), (gx, h), 1.0, color);
        }
        for gy in (0..h).step_by(spacing as usize) {
            layer.line_px((0, gy), (w, gy), 1.0, color);
        }
        Ok(())
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/effects.rs"]
mod tests;
