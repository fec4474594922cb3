//! The SpamAnvil marketing assets: icon, banners, animated banner and promo.
//!
//! Static assets are plain functions of their size. Animations implement [`Animation`]: a
//! per-frame backdrop followed by one scene chosen by a single [`Timeline`] lookup.

use std::fmt::Debug;

use crate::animation::timeline::{FrameTime, SceneHit, Timeline};
use crate::foundation::core::Size;
use crate::foundation::error::AnvilResult;
use crate::render::canvas::Canvas;
use crate::render::text::Typesetter;

pub mod banner;
pub mod banner_anim;
pub mod icon;
pub mod promo;

/// A timeline-driven animation rendered one independent frame at a time.
pub trait Animation {
    /// Scene identifier stored in the timeline.
    type Scene: Copy + Debug;

    /// Frame size.
    fn size(&self) -> Size;

    /// Scene windows covering the whole animation.
    fn timeline(&self) -> &Timeline<Self::Scene>;

    /// Layers drawn on every frame regardless of scene.
    fn draw_backdrop(&self, canvas: &mut Canvas, time: FrameTime) -> AnvilResult<()>;

    /// Compose one scene on top of the backdrop.
    fn render_scene(
        &self,
        canvas: &mut Canvas,
        hit: SceneHit<Self::Scene>,
        time: FrameTime,
        text: &mut Typesetter,
    ) -> AnvilResult<()>;

    /// Render the complete frame at `time`.
    fn render_frame(&self, time: FrameTime, text: &mut Typesetter) -> AnvilResult<Canvas> {
        let mut canvas = Canvas::new(self.size())?;
        self.draw_backdrop(&mut canvas, time)?;
        let hit = self.timeline().require(time.secs())?;
        self.render_scene(&mut canvas, hit, time, text)?;
        Ok(canvas)
    }
}
