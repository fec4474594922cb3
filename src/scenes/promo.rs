//! Promotional GIF: title card, feature list, pricing and call to action.

use kurbo::{Rect, RoundedRect};

use crate::animation::ease::{ease_in_out, ease_out};
use crate::animation::particle::Particle;
use crate::animation::timeline::{FrameTime, SceneHit, SceneWindow, Timeline};
use crate::foundation::core::{Point, Rgba8, Size};
use crate::foundation::error::AnvilResult;
use crate::foundation::math::px_rect;
use crate::render::canvas::{Canvas, Layer};
use crate::render::effects::{draw_gradient, draw_grid};
use crate::render::palette::Palette;
use crate::render::shapes::{
    draw_anvil, draw_particle, draw_shield, ellipse_px, rounded_rect_px,
};
use crate::render::text::{TextStyle, Typesetter};
use crate::scenes::Animation;

/// Promo frame size.
pub const PROMO_SIZE: Size = Size::new(800, 400);

const TITLE: TextStyle = TextStyle::bold(52);
const SUBTITLE: TextStyle = TextStyle::regular(22);
const FEATURE: TextStyle = TextStyle::bold(26);
const FEATURE_DESC: TextStyle = TextStyle::regular(18);
const BIG: u32 = 64;
const MEDIUM: TextStyle = TextStyle::bold(28);
const SMALL: TextStyle = TextStyle::regular(16);
const CTA: TextStyle = TextStyle::bold(30);

const PARTICLES: u64 = 8;
const GRID_SPACING: u32 = 80;

/// Scenes of the promo animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromoScene {
    /// Title, growing anvil, badge and taglines.
    Title,
    /// Four feature rows with score bars.
    Features,
    /// Pricing message and download button.
    CallToAction,
}

struct Feature {
    title: &'static str,
    desc: &'static str,
    color: Rgba8,
}

/// The 8 second promotional animation.
pub struct Promo {
    timeline: Timeline<PromoScene>,
    palette: Palette,
    particles: Vec<Particle>,
}

impl Promo {
    /// The 800x400 promo with its eight particles.
    pub fn new() -> AnvilResult<Self> {
        let timeline = Timeline::new(vec![
            SceneWindow::new(0.0, 2.5, PromoScene::Title),
            SceneWindow::new(2.5, 5.5, PromoScene::Features),
            SceneWindow::new(5.5, 8.0, PromoScene::CallToAction),
        ])?;
        let base_y = f64::from(PROMO_SIZE.height) - 20.0;
        let particles = (0..PARTICLES)
            .map(|i| Particle {
                base: Point::new(100.0 + i as f64 * 90.0, base_y),
                speed: 0.7 + i as f64 * 0.1,
                phase_frames: i * 10,
            })
            .collect();
        Ok(Self {
            timeline,
            palette: Palette::PROMO,
            particles,
        })
    }

    /// Embers rising along the bottom edge.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn features(&self) -> [Feature; 4] {
        let pal = &self.palette;
        [
            Feature {
                title: "AI Spam Detection",
                desc: "LLM scores each comment 0-100",
                color: pal.blue,
            },
            Feature {
                title: "6+ AI Providers",
                desc: "OpenAI, Claude, Gemini, free models",
                color: pal.purple,
            },
            Feature {
                title: "Smart IP Blocking",
                desc: "Auto-bans repeat offenders",
                color: pal.orange,
            },
            Feature {
                title: "Async Processing",
                desc: "Background queue, zero latency",
                color: pal.cyan,
            },
        ]
    }

    fn title_card(&self, layer: &mut Layer, sec: f64, text: &mut Typesetter) -> AnvilResult<()> {
        let pal = &self.palette;
        let w = PROMO_SIZE.width as i32;
        let ep = ease_out((sec / 0.8).min(1.0));

        let anvil_size = (22.0 * ep) as i32;
        if anvil_size > 5 {
            // Same silhouette as the store assets, in the promo palette.
            draw_anvil(layer, w / 2 - 180, 120, anvil_size, &pal.anvil);
        }

        let drift = (15.0 * (1.0 - ep)) as i32;
        text.draw_centered(layer, "SpamAnvil", w, 85 + drift, TITLE, pal.white)?;

        if sec > 0.5 {
            text.draw_centered(
                layer,
                "AI-Powered Anti-Spam for WordPress",
                w,
                150,
                SUBTITLE,
                pal.light_gray,
            )?;
        }

        if sec > 1.0 {
            let badge_ep = ease_out(((sec - 1.0) / 0.5).min(1.0));
            let label = "FREE & OPEN SOURCE";
            let bw = text.measure(label, FEATURE_DESC)?.width;
            let bx = (w - bw) / 2 - 12;
            let y = 200;
            layer.fill(
                &rounded_rect_px(bx - 4, y - 4, bx + bw + 16, y + 26, 4.0),
                pal.green.with_alpha((200.0 * badge_ep) as u8),
            );
            text.draw(layer, label, bx + 6, y, FEATURE_DESC, pal.bg_top)?;
        }

        if sec > 1.4 {
            text.draw_centered(
                layer,
                "Stop spam with ChatGPT, Claude, Gemini & more",
                w,
                250,
                FEATURE_DESC,
                pal.light_gray,
            )?;
            text.draw_centered(
                layer,
                "No subscription needed. Works with free AI models.",
                w,
                278,
                SMALL,
                pal.light_gray,
            )?;
        }

        if sec > 0.3 {
            let half = (300.0 * ease_out(((sec - 0.3) / 0.8).min(1.0))) as i32;
            let cx = w / 2;
            layer.line_px((cx - half, 145), (cx + half, 145), 1.0, pal.blue.with_alpha(60));
        }
        Ok(())
    }

    fn feature_list(&self, layer: &mut Layer, local: f64, text: &mut Typesetter) -> AnvilResult<()> {
        let pal = &self.palette;
        let w = PROMO_SIZE.width as i32;

        let header = text.draw_centered(layer, "SpamAnvil", w, 30, MEDIUM, pal.white)?;
        let shield = 12;
        draw_shield(
            layer,
            (w - header.width) / 2 - shield * 2,
            30 + header.height / 2,
            shield,
            pal.green,
        );
        layer.line_px((200, 65), (600, 65), 1.0, pal.blue.with_alpha(100));

        for (i, feature) in self.features().into_iter().enumerate() {
            let start = i as f64 * 0.6;
            if local < start {
                continue;
            }
            let progress = ((local - start) / 0.5).min(1.0);
            let ep = ease_out(progress);
            let y = 90 + i as i32 * 72;
            let dx = (30.0 * (1.0 - ep)) as i32;

            layer.fill(&ellipse_px(160 + dx, y + 8, 176 + dx, y + 24), feature.color);
            text.draw(layer, feature.title, 190 + dx, y + 4, FEATURE, pal.white)?;
            text.draw(layer, feature.desc, 190 + dx, y + 34, SMALL, pal.light_gray)?;

            let bar_x = 590;
            let bar_w = (120.0 * ease_in_out(progress)) as i32;
            layer.fill(
                &rounded_rect_px(bar_x, y + 10, bar_x + bar_w, y + 24, 3.0),
                feature.color.with_alpha(150),
            );
        }
        Ok(())
    }

    fn call_to_action(
        &self,
        layer: &mut Layer,
        local: f64,
        frame: u64,
        text: &mut Typesetter,
    ) -> AnvilResult<()> {
        let pal = &self.palette;
        let w = PROMO_SIZE.width as i32;

        let grow = 0.5 + 0.5 * ease_out((local / 0.6).min(1.0));
        let big = TextStyle::bold((f64::from(BIG) * grow) as u32);
        text.draw_centered(layer, "100% FREE", w, 60, big, pal.green)?;

        if local > 0.4 {
            text.draw_centered(
                layer,
                "No subscription. No premium tier.",
                w,
                140,
                SUBTITLE,
                pal.white,
            )?;
        }
        if local > 0.8 {
            text.draw_centered(
                layer,
                "Bring your own AI key (free options available)",
                w,
                175,
                FEATURE_DESC,
                pal.light_gray,
            )?;
        }

        if local > 1.2 {
            let cta_ep = ease_out(((local - 1.2) / 0.5).min(1.0));
            let pulse = 1.0 + 0.03 * (frame as f64 * 0.5).sin();
            let label = "Download on WordPress.org";
            let extent = text.measure(label, CTA)?;
            let x = (w - extent.width) / 2;
            let y = 250;
            let (pad_x, pad_y) = (30, 14);
            let button = px_rect(
                x - pad_x,
                y - pad_y,
                x + extent.width + pad_x,
                y + extent.height + pad_y + 4,
            );
            let button = Rect::from_center_size(button.center(), button.size() * pulse);

            let glow = pal.blue.with_alpha((20.0 * cta_ep) as u8);
            for g in (1..=4).rev() {
                let spread = f64::from(g * 2);
                layer.fill(
                    &RoundedRect::from_rect(button.inflate(spread, spread), 10.0 + spread),
                    glow,
                );
            }
            layer.fill(&RoundedRect::from_rect(button, 10.0), pal.blue);
            text.draw(layer, label, x, y, CTA, pal.white)?;
        }

        if local > 1.6 {
            text.draw_centered(
                layer,
                "Works with OpenAI  |  Claude  |  Gemini  |  Free Models",
                w,
                340,
                SMALL,
                pal.light_gray,
            )?;
            text.draw_centered(
                layer,
                "software.amato.com.br/spamanvil",
                w,
                365,
                SMALL,
                pal.blue,
            )?;
        }
        Ok(())
    }
}

impl Animation for Promo {
    type Scene = PromoScene;

    fn size(&self) -> Size {
        PROMO_SIZE
    }

    fn timeline(&self) -> &Timeline<PromoScene> {
        &self.timeline
    }

    fn draw_backdrop(&self, canvas: &mut Canvas, time: FrameTime) -> AnvilResult<()> {
        let pal = &self.palette;
        draw_gradient(canvas, pal.bg_top, pal.bg_bottom);
        let travel = f64::from(PROMO_SIZE.height) * 0.3;
        canvas.paint(|layer| {
            for p in &self.particles {
                draw_particle(layer, p, time.index.0, time.total_frames, travel, pal.blue);
            }
            Ok(())
        })?;
        draw_grid(canvas, GRID_SPACING, pal.white.with_alpha(5))
    }

    fn render_scene(
        &self,
        canvas: &mut Canvas,
        hit: SceneHit<PromoScene>,
        time: FrameTime,
        text: &mut Typesetter,
    ) -> AnvilResult<()> {
        let local = hit.clock.local_s;
        canvas.paint(|layer| match hit.scene {
            PromoScene::Title => self.title_card(layer, local, text),
            PromoScene::Features => self.feature_list(layer, local, text),
            PromoScene::CallToAction => self.call_to_action(layer, local, time.index.0, text),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/promo.rs"]
mod tests;
