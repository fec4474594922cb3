//! Animated banner: anvil drop, provider pills, call to action.

use crate::animation::ease::{ease_out, reveal};
use crate::animation::timeline::{FrameTime, SceneHit, SceneWindow, Timeline};
use crate::foundation::core::{Point, Rgba8, Size};
use crate::foundation::error::AnvilResult;
use crate::render::canvas::{Canvas, Layer};
use crate::render::effects::{Glow, draw_gradient, draw_grid, draw_radial_glow};
use crate::render::palette::Palette;
use crate::render::shapes::{draw_anvil, draw_spark, rounded_rect_px};
use crate::render::text::Typesetter;
use crate::scenes::Animation;
use crate::scenes::banner::{
    BADGE, BADGE_NOTE, BannerLayout, Pill, SPARKS, SUBTITLE, TITLE, providers, spark_colors,
};

/// Opaque grid color drawn on every frame.
const GRID: Rgba8 = Rgba8::rgb(26, 28, 46);

const CTA_SUBTITLE: &str = "Free AI Anti-Spam for WordPress";
const CTA_URL: &str = "wordpress.org/plugins/spamanvil";

/// Pill reveal delays, seconds into the features scene.
const PILL_DELAYS: [f64; 4] = [0.0, 0.3, 0.6, 0.9];

/// Scenes of the animated banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerScene {
    /// Anvil drops in, sparks burst, title slides in.
    Intro,
    /// Static header; provider pills and badge appear.
    Features,
    /// Centered call to action.
    CallToAction,
}

/// The looping 6 second banner animation.
pub struct AnimatedBanner {
    layout: BannerLayout,
    timeline: Timeline<BannerScene>,
    palette: Palette,
}

impl AnimatedBanner {
    /// Animated banner at `size` with the store palette.
    pub fn new(size: Size) -> AnvilResult<Self> {
        let size = size.validate()?;
        let timeline = Timeline::new(vec![
            SceneWindow::new(0.0, 2.0, BannerScene::Intro),
            SceneWindow::new(2.0, 4.5, BannerScene::Features),
            SceneWindow::new(4.5, 6.0, BannerScene::CallToAction),
        ])?;
        Ok(Self {
            layout: BannerLayout::new(size),
            timeline,
            palette: Palette::STORE,
        })
    }

    /// Positions and type sizes in use.
    pub fn layout(&self) -> &BannerLayout {
        &self.layout
    }

    fn intro(&self, canvas: &mut Canvas, local: f64, text: &mut Typesetter) -> AnvilResult<()> {
        let l = &self.layout;
        let pal = &self.palette;

        let drop_t = ease_out(local / 0.6);
        let drop_offset = ((1.0 - drop_t) * -f64::from(l.height()) * 0.6) as i32;
        draw_radial_glow(canvas, &l.anvil_glow(pal, 0.15 * drop_t))?;

        canvas.paint(|layer| {
            draw_anvil(layer, l.anvil_cx, l.anvil_cy + drop_offset, l.anvil_size, &pal.anvil);

            if local > 0.5 {
                let spark_t = (local - 0.5) / 0.5;
                if spark_t < 1.0 && 1.0 - spark_t > 0.3 {
                    let spread = ease_out(spark_t);
                    for ((dx, dy, s), color) in SPARKS.into_iter().zip(spark_colors(pal)) {
                        draw_spark(
                            layer,
                            l.anvil_cx + l.sc(f64::from(dx) * (1.0 + spread * 0.5)),
                            l.anvil_cy + l.sc(f64::from(dy) * (1.0 + spread * 0.3)),
                            l.sc(f64::from(s) * (1.0 + spread * 0.3)),
                            color,
                        );
                    }
                }
                if spark_t >= 1.0 || local > 1.0 {
                    l.draw_sparks(layer, pal);
                }
            }

            let title_t = ease_out(reveal(local, 0.3, 0.6));
            let title_dx = ((1.0 - title_t) * f64::from(l.width()) * 0.3) as i32;
            text.draw(layer, TITLE, l.text_x + title_dx, l.title_y(), l.title, pal.white)?;

            let title_h = text.measure(TITLE, l.title)?.height;
            let line_y = l.accent_y(title_h);
            if local > 0.6 {
                let len = (280.0 * l.scale * ease_out((local - 0.6) / 0.4)) as i32;
                l.draw_accent(layer, line_y, len, pal.blue);
            }
            if local > 0.9 {
                text.draw(
                    layer,
                    SUBTITLE,
                    l.text_x,
                    line_y + l.sc(10.0),
                    l.subtitle,
                    pal.light_gray,
                )?;
            }
            Ok(())
        })
    }

    fn features(&self, canvas: &mut Canvas, local: f64, text: &mut Typesetter) -> AnvilResult<()> {
        let l = &self.layout;
        let pal = &self.palette;

        draw_radial_glow(canvas, &l.anvil_glow(pal, 0.15))?;
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
            for ((label, color), delay) in providers(pal).into_iter().zip(PILL_DELAYS) {
                let pill = Pill {
                    fill: color.darkened(5),
                    outline: Some(color),
                    text: pal.white,
                    pad_x: l.sc(8.0),
                    pad_y: l.sc(4.0),
                    extra_h: l.sc(10.0),
                    radius: l.sc(4.0),
                };
                let (w, h) = pill.box_size(text.measure(label, l.feature)?);
                if local > delay {
                    let t = ease_out((local - delay) / 0.3);
                    let rise = ((1.0 - t) * 20.0 * l.scale) as i32;
                    pill.draw(layer, text, label, pill_x, pill_y + rise, l.feature)?;
                }
                pill_x += w + l.sc(10.0);
                pill_h = h;
            }

            if local > 1.3 {
                let badge = Pill {
                    fill: pal.green,
                    outline: None,
                    text: pal.bg_top,
                    pad_x: l.sc(8.0),
                    pad_y: l.sc(3.0),
                    extra_h: l.sc(8.0),
                    radius: l.sc(3.0),
                };
                let badge_y = pill_y + pill_h + l.sc(14.0);
                let (badge_w, _) = badge.draw(layer, text, BADGE, l.text_x, badge_y, l.badge)?;
                text.draw(
                    layer,
                    BADGE_NOTE,
                    l.text_x + badge_w + l.sc(10.0),
                    badge_y + l.sc(3.0),
                    l.small,
                    pal.mid_gray,
                )?;
            }
            Ok(())
        })
    }

    fn call_to_action(
        &self,
        canvas: &mut Canvas,
        local: f64,
        text: &mut Typesetter,
    ) -> AnvilResult<()> {
        let l = &self.layout;
        let pal = &self.palette;
        let w = l.width();

        let center = Point::new(f64::from(w / 2), f64::from(l.height() / 2));
        let radius = (f64::from(l.height()) * 0.8) as u32;
        draw_radial_glow(canvas, &Glow::new(center, radius, pal.blue, 0.2))?;

        canvas.paint(|layer| {
            text.draw_centered(layer, TITLE, w, l.sc(40.0), l.big, pal.white)?;
            if local > 0.3 {
                text.draw_centered(layer, CTA_SUBTITLE, w, l.sc(110.0), l.subtitle, pal.light_gray)?;
            }
            if local > 0.6 {
                draw_url_button(layer, text, l, pal)?;
            }
            if local > 0.5 {
                l.draw_dots(layer, pal, |i| {
                    (w / 2 - l.sc(100.0) + i * l.sc(50.0), l.sc(200.0))
                });
            }
            Ok(())
        })
    }
}

fn draw_url_button(
    layer: &mut Layer,
    text: &mut Typesetter,
    l: &BannerLayout,
    pal: &Palette,
) -> AnvilResult<()> {
    let url = text.measure(CTA_URL, l.feature)?;
    let x = (l.width() - url.width) / 2;
    let y = l.sc(150.0);
    let pad = l.sc(10.0);
    layer.fill(
        &rounded_rect_px(
            x - pad * 2,
            y - pad,
            x + url.width + pad * 2,
            y + url.height + pad,
            f64::from(l.sc(6.0)),
        ),
        pal.blue,
    );
    text.draw(layer, CTA_URL, x, y, l.feature, pal.white)?;
    Ok(())
}

impl Animation for AnimatedBanner {
    type Scene = BannerScene;

    fn size(&self) -> Size {
        self.layout.size
    }

    fn timeline(&self) -> &Timeline<BannerScene> {
        &self.timeline
    }

    fn draw_backdrop(&self, canvas: &mut Canvas, _time: FrameTime) -> AnvilResult<()> {
        draw_gradient(canvas, self.palette.bg_top, self.palette.bg_bottom);
        draw_grid(canvas, 60, GRID)
    }

    fn render_scene(
        &self,
        canvas: &mut Canvas,
        hit: SceneHit<BannerScene>,
        _time: FrameTime,
        text: &mut Typesetter,
    ) -> AnvilResult<()> {
        let local = hit.clock.local_s;
        match hit.scene {
            BannerScene::Intro => self.intro(canvas, local, text),
            BannerScene::Features => self.features(canvas, local, text),
            BannerScene::CallToAction => self.call_to_action(canvas, local, text),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/banner_anim.rs"]
mod tests;
