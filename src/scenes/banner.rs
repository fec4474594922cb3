//! Static plugin banner, plus the layout shared with the animated banner.

use crate::foundation::core::{Point, Rgba8, Size};
use crate::foundation::error::AnvilResult;
use crate::foundation::math::scaled;
use crate::render::canvas::{Canvas, Layer};
use crate::render::effects::{Glow, draw_gradient, draw_grid, draw_radial_glow};
use crate::render::palette::Palette;
use crate::render::shapes::{
    draw_anvil, draw_dot, draw_spark, outline_rounded_rect_px, rounded_rect_px,
};
use crate::render::text::{TextExtent, TextStyle, Typesetter};

/// Height all banner metrics are designed at.
pub const DESIGN_HEIGHT: f64 = 250.0;

pub(crate) const TITLE: &str = "SpamAnvil";
pub(crate) const SUBTITLE: &str = "AI-Powered Anti-Spam for WordPress";
pub(crate) const BADGE: &str = "100% FREE";
pub(crate) const BADGE_NOTE: &str = "No subscription. Bring your own API key.";

/// Spark offsets from the anvil center and sizes, in design units.
pub(crate) const SPARKS: [(i32, i32, i32); 4] = [(-30, -50, 8), (50, -55, 6), (-10, -65, 10), (30, -40, 5)];

/// Provider pills in display order.
pub(crate) fn providers(pal: &Palette) -> [(&'static str, Rgba8); 4] {
    [
        ("ChatGPT", pal.blue),
        ("Claude", pal.purple),
        ("Gemini", pal.cyan),
        ("Free Models", pal.green),
    ]
}

pub(crate) fn spark_colors(pal: &Palette) -> [Rgba8; 4] {
    [pal.orange, pal.blue, pal.gold, pal.cyan]
}

/// Positions and type sizes for a banner of a given size, scaled by `height / 250`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BannerLayout {
    /// Banner size in pixels.
    pub size: Size,
    /// `height / 250`.
    pub scale: f64,
    /// Anvil center, horizontal.
    pub anvil_cx: i32,
    /// Anvil center, vertical.
    pub anvil_cy: i32,
    /// Anvil size parameter.
    pub anvil_size: i32,
    /// Left edge of the text column.
    pub text_x: i32,
    /// Title type.
    pub title: TextStyle,
    /// Subtitle type.
    pub subtitle: TextStyle,
    /// Feature label type.
    pub feature: TextStyle,
    /// Fine print type.
    pub small: TextStyle,
    /// Badge type.
    pub badge: TextStyle,
    /// Call to action headline.
    pub big: TextStyle,
}

impl BannerLayout {
    /// Layout for a banner of `size`.
    pub fn new(size: Size) -> Self {
        let w = f64::from(size.width);
        let h = f64::from(size.height);
        let scale = h / DESIGN_HEIGHT;
        let px = |v: f64| scaled(v, scale).max(1) as u32;
        Self {
            size,
            scale,
            anvil_cx: (w * 0.17) as i32,
            anvil_cy: (h * 0.52) as i32,
            anvil_size: scaled(40.0, scale),
            text_x: (w * 0.32) as i32,
            title: TextStyle::bold(px(48.0)),
            subtitle: TextStyle::regular(px(18.0)),
            feature: TextStyle::bold(px(14.0)),
            small: TextStyle::regular(px(12.0)),
            badge: TextStyle::bold(px(13.0)),
            big: TextStyle::bold(px(56.0)),
        }
    }

    /// Design-space length scaled to this banner and truncated.
    pub fn sc(&self, v: f64) -> i32 {
        scaled(v, self.scale)
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.size.width as i32
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.size.height as i32
    }

    /// Top of the title row.
    pub fn title_y(&self) -> i32 {
        self.sc(30.0)
    }

    /// Row of the accent line under a title of height `title_h`.
    pub fn accent_y(&self, title_h: i32) -> i32 {
        self.title_y() + title_h + self.sc(6.0)
    }

    /// Glow behind the anvil at the given intensity.
    pub fn anvil_glow(&self, pal: &Palette, intensity: f64) -> Glow {
        let center = Point::new(
            f64::from(self.anvil_cx),
            f64::from(self.anvil_cy),
        );
        Glow::new(center, (f64::from(self.size.height) * 0.9) as u32, pal.blue, intensity)
    }

    /// Draw the four sparks at rest around the anvil.
    pub fn draw_sparks(&self, layer: &mut Layer, pal: &Palette) {
        for ((dx, dy, s), color) in SPARKS.into_iter().zip(spark_colors(pal)) {
            draw_spark(
                layer,
                self.anvil_cx + self.sc(f64::from(dx)),
                self.anvil_cy + self.sc(f64::from(dy)),
                self.sc(f64::from(s)),
                color,
            );
        }
    }

    /// Accent line from the text column, `len` pixels long.
    pub fn draw_accent(&self, layer: &mut Layer, y: i32, len: i32, color: Rgba8) {
        let width = f64::from(self.sc(2.0).max(1));
        layer.line_px((self.text_x, y), (self.text_x + len, y), width, color);
    }

    /// One dot per palette dot color; `at(i)` gives the center of dot `i`.
    pub fn draw_dots(&self, layer: &mut Layer, pal: &Palette, at: impl Fn(i32) -> (i32, i32)) {
        let r = self.sc(3.0);
        for (i, color) in pal.dot_colors().into_iter().enumerate() {
            let (x, y) = at(i as i32);
            draw_dot(layer, x, y, r, color);
        }
    }
}

/// A label inside a rounded box sized to the text plus padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Pill {
    pub(crate) fill: Rgba8,
    pub(crate) outline: Option<Rgba8>,
    pub(crate) text: Rgba8,
    pub(crate) pad_x: i32,
    pub(crate) pad_y: i32,
    pub(crate) extra_h: i32,
    pub(crate) radius: i32,
}

impl Pill {
    /// Box size for a label of extent `label`.
    pub(crate) fn box_size(&self, label: TextExtent) -> (i32, i32) {
        (label.width + 2 * self.pad_x, label.height + self.extra_h)
    }

    /// Draw at `(x, y)` and return the box size.
    pub(crate) fn draw(
        &self,
        layer: &mut Layer,
        text: &mut Typesetter,
        label: &str,
        x: i32,
        y: i32,
        style: TextStyle,
    ) -> AnvilResult<(i32, i32)> {
        let (w, h) = self.box_size(text.measure(label, style)?);
        layer.fill(
            &rounded_rect_px(x, y, x + w, y + h, f64::from(self.radius)),
            self.fill,
        );
        if let Some(outline) = self.outline {
            outline_rounded_rect_px(layer, x, y, x + w, y + h, f64::from(self.radius), 1.0, outline);
        }
        text.draw(layer, label, x + self.pad_x, y + self.pad_y, style, self.text)?;
        Ok((w, h))
    }
}

/// Render the static banner at `size`; every metric scales with `height / 250`.
#[tracing::instrument(skip(text))]
pub fn render_banner(size: Size, text: &mut Typesetter) -> AnvilResult<Canvas> {
    let pal = &Palette::STORE;
    let l = BannerLayout::new(size);
    let mut canvas = Canvas::new(size)?;

    draw_gradient(&mut canvas, pal.bg_top, pal.bg_bottom);
    draw_grid(&mut canvas, 60, pal.white.with_alpha(10))?;
    let glow = Glow {
        center: Point::new(f64::from(l.anvil_cx), f64::from(l.height() / 2)),
        ..l.anvil_glow(pal, 0.15)
    }
    .with_rings(3, 60);
    draw_radial_glow(&mut canvas, &glow)?;

    canvas.paint(|layer| {
        draw_anvil(layer, l.anvil_cx, l.anvil_cy, l.anvil_size, &pal.anvil);
        l.draw_sparks(layer, pal);

        let title = text.draw(layer, TITLE, l.text_x, l.title_y(), l.title, pal.white)?;
        let line_y = l.accent_y(title.height);
        l.draw_accent(layer, line_y, l.sc(280.0), pal.blue);
        text.draw(
            layer,
            SUBTITLE,
            l.text_x,
            line_y + l.sc(10.0),
            l.subtitle,
            pal.light_gray,
        )?;

        let pill_y = line_y + l.sc(38.0);
        let mut pill_x = l.text_x;
        let mut pill_h = 0;
        for (label, color) in providers(pal) {
            let pill = Pill {
                fill: color.with_alpha(50),
                outline: Some(color),
                text: pal.white,
                pad_x: l.sc(8.0),
                pad_y: l.sc(4.0),
                extra_h: l.sc(10.0),
                radius: l.sc(4.0),
            };
            let (w, h) = pill.draw(layer, text, label, pill_x, pill_y, l.feature)?;
            pill_x += w + l.sc(10.0);
            pill_h = h;
        }

        let badge = Pill {
            fill: pal.green,
            outline: None,
            text: pal.bg_top,
            pad_x: l.sc(8.0),
            pad_y: l.sc(4.0),
            extra_h: l.sc(10.0),
            radius: l.sc(3.0),
        };
        let badge_y = pill_y + pill_h + l.sc(14.0);
        let (badge_w, _) = badge.draw(layer, text, BADGE, l.text_x, badge_y, l.badge)?;
        text.draw(
            layer,
            BADGE_NOTE,
            l.text_x + badge_w + l.sc(10.0),
            badge_y + l.sc(4.0),
            l.small,
            pal.mid_gray,
        )?;

        l.draw_dots(layer, pal, |i| {
            (
                l.width() - l.sc(40.0) - i * l.sc(25.0),
                l.height() - l.sc(20.0),
            )
        });
        Ok(())
    })?;

    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/banner.rs"]
mod tests;
