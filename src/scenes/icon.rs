//! Square plugin icon.

use crate::foundation::core::{Point, Size};
use crate::foundation::error::AnvilResult;
use crate::render::canvas::Canvas;
use crate::render::effects::{Glow, draw_gradient, draw_radial_glow};
use crate::render::palette::Palette;
use crate::render::shapes::{draw_anvil, draw_spark, outline_rounded_rect_px};
use crate::render::text::{TextStyle, Typesetter};

/// Side length the icon is designed at; smaller icons are resampled from it.
pub const ICON_MASTER_SIDE: u32 = 256;

/// Render the icon at `side` x `side`.
///
/// Layers: gradient, blue glow, anvil right of center in the lower half, four impact sparks, a
/// translucent rounded border and a bold "SA" monogram at the top.
#[tracing::instrument(skip(text))]
pub fn render_icon(side: u32, text: &mut Typesetter) -> AnvilResult<Canvas> {
    let pal = &Palette::STORE;
    let mut canvas = Canvas::new(Size::square(side))?;
    let s = side as i32;

    draw_gradient(&mut canvas, pal.bg_top, pal.bg_bottom);
    let center = Point::new(f64::from(s / 2), f64::from(s / 2));
    draw_radial_glow(&mut canvas, &Glow::new(center, side / 2, pal.blue, 0.2))?;

    canvas.paint(|layer| {
        let anvil = s / 4;
        draw_anvil(layer, s / 2 + anvil / 6, s * 9 / 16, anvil, &pal.anvil);

        let sparks = [
            (s / 2 - s / 6, s / 3, s / 16, pal.orange),
            (s / 2 + s / 5, s / 4, s / 20, pal.blue),
            (s / 2 - s / 12, s / 5, s / 14, pal.gold),
            (s / 2 + s / 8, s * 2 / 5, s / 22, pal.cyan),
        ];
        for (x, y, size, color) in sparks {
            draw_spark(layer, x, y, size, color);
        }

        let pad = s / 32;
        outline_rounded_rect_px(
            layer,
            pad,
            pad,
            s - pad,
            s - pad,
            f64::from(s / 8),
            2.0,
            pal.blue.with_alpha(80),
        );

        text.draw_centered(layer, "SA", s, s / 10, TextStyle::bold(side / 5), pal.white)?;
        Ok(())
    })?;

    Ok(canvas)
}

/// Render the master icon and Lanczos-resample it to `side`.
#[tracing::instrument(skip(text))]
pub fn render_icon_resampled(side: u32, text: &mut Typesetter) -> AnvilResult<Canvas> {
    render_icon(ICON_MASTER_SIDE, text)?.resized(Size::square(side))
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/icon.rs"]
mod tests;
