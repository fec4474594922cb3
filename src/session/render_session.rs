use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::encode::gif::GifSink;
use crate::encode::png::encode_static;
use crate::encode::sink::FrameSink;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::render::canvas::Canvas;
use crate::render::text::Typesetter;
use crate::scenes::Animation;
use crate::scenes::banner::render_banner;
use crate::scenes::banner_anim::AnimatedBanner;
use crate::scenes::icon::{render_icon, render_icon_resampled};
use crate::scenes::promo::Promo;
use crate::session::catalog::AssetKind;
use crate::session::config::AssetConfig;
use crate::session::sequencer::{SequenceStats, Sequencer};

/// One file written by a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenAsset {
    /// Which asset.
    pub kind: AssetKind,
    /// Where the file was written.
    pub path: PathBuf,
    /// File size.
    pub bytes: u64,
    /// 1 for still images.
    pub frames: u64,
}

/// Renders assets with one set of resolved fonts and one configuration.
pub struct RenderSession {
    config: AssetConfig,
    text: Typesetter,
}

impl RenderSession {
    /// Validate `config` and resolve its fonts.
    pub fn new(config: AssetConfig) -> AnvilResult<Self> {
        let text = Typesetter::new(&config.fonts);
        Self::with_typesetter(config, text)
    }

    /// Use an already resolved typesetter instead of the configured fonts.
    pub fn with_typesetter(config: AssetConfig, text: Typesetter) -> AnvilResult<Self> {
        config.validate()?;
        Ok(Self { config, text })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Fonts resolved for this session.
    pub fn typesetter(&self) -> &Typesetter {
        &self.text
    }

    /// Frame sequencing for an animated asset, at its configured frame rate.
    pub fn sequencer(&self, kind: AssetKind) -> AnvilResult<Sequencer> {
        let (settings, duration_s) = match (kind, kind.duration_s()) {
            (AssetKind::BannerGif, Some(d)) => (self.config.banner_gif, d),
            (AssetKind::Promo, Some(d)) => (self.config.promo_gif, d),
            _ => {
                return Err(AnvilError::validation(format!(
                    "{kind} is not an animated asset"
                )));
            }
        };
        Sequencer::new(settings.fps()?, duration_s)
    }

    /// Render a still asset.
    pub fn render_still(&mut self, kind: AssetKind) -> AnvilResult<Canvas> {
        let text = &mut self.text;
        match kind {
            AssetKind::Icon256 => render_icon(kind.size().width, text),
            AssetKind::Icon128 => render_icon_resampled(kind.size().width, text),
            AssetKind::Banner | AssetKind::BannerRetina => render_banner(kind.size(), text),
            AssetKind::BannerGif | AssetKind::Promo => Err(AnvilError::validation(format!(
                "{kind} is animated; render it frame by frame"
            ))),
        }
    }

    /// Render one frame of any asset; still assets only have frame 0.
    pub fn render_frame(&mut self, kind: AssetKind, frame: FrameIndex) -> AnvilResult<Canvas> {
        if !kind.is_animated() {
            if frame.0 != 0 {
                return Err(AnvilError::validation(format!(
                    "{kind} is a still image; only frame 0 exists"
                )));
            }
            return self.render_still(kind);
        }
        let time = self.sequencer(kind)?.frame_time(frame)?;
        match kind {
            AssetKind::BannerGif => AnimatedBanner::new(kind.size())?.render_frame(time, &mut self.text),
            _ => Promo::new()?.render_frame(time, &mut self.text),
        }
    }

    /// Render every frame of an animated asset in order into `sink`.
    pub fn stream_animation(
        &mut self,
        kind: AssetKind,
        sink: &mut dyn FrameSink,
    ) -> AnvilResult<SequenceStats> {
        let seq = self.sequencer(kind)?;
        match kind {
            AssetKind::BannerGif => {
                sequence(&AnimatedBanner::new(kind.size())?, &seq, sink, &mut self.text)
            }
            _ => sequence(&Promo::new()?, &seq, sink, &mut self.text),
        }
    }

    /// Encode an asset to file bytes: PNG for stills, looping GIF for animations.
    pub fn encode(&mut self, kind: AssetKind) -> AnvilResult<Vec<u8>> {
        if !kind.is_animated() {
            return encode_static(&self.render_still(kind)?);
        }
        let mut bytes = Vec::new();
        let mut sink = GifSink::new(&mut bytes, self.config.gif_speed);
        self.stream_animation(kind, &mut sink)?;
        drop(sink);
        Ok(bytes)
    }

    /// Render `kind` into `dir` under its catalog file name.
    #[tracing::instrument(skip(self))]
    pub fn write_asset(&mut self, kind: AssetKind, dir: &Path) -> AnvilResult<WrittenAsset> {
        let path = dir.join(kind.file_name());
        let frames = if kind.is_animated() {
            let file = File::create(&path)?;
            let mut writer = BufWriter::new(file);
            let mut sink = GifSink::new(&mut writer, self.config.gif_speed);
            let stats = self.stream_animation(kind, &mut sink)?;
            drop(sink);
            writer.flush()?;
            stats.frames
        } else {
            std::fs::write(&path, encode_static(&self.render_still(kind)?)?)?;
            1
        };
        let bytes = std::fs::metadata(&path)?.len();
        tracing::info!(asset = %kind, path = %path.display(), bytes, frames, "wrote asset");
        Ok(WrittenAsset {
            kind,
            path,
            bytes,
            frames,
        })
    }

    /// Render `kinds` into `dir`, creating it first. Stops at the first failure.
    pub fn render_to_dir(
        &mut self,
        kinds: &[AssetKind],
        dir: &Path,
    ) -> AnvilResult<Vec<WrittenAsset>> {
        std::fs::create_dir_all(dir)?;
        kinds
            .iter()
            .map(|&kind| self.write_asset(kind, dir))
            .collect()
    }

    /// Render every asset into the configured output directory.
    pub fn render_all(&mut self) -> AnvilResult<Vec<WrittenAsset>> {
        let dir = self.config.output_dir.clone();
        self.render_to_dir(&AssetKind::ALL, &dir)
    }
}

fn sequence<A: Animation>(
    anim: &A,
    seq: &Sequencer,
    sink: &mut dyn FrameSink,
    text: &mut Typesetter,
) -> AnvilResult<SequenceStats> {
    seq.run(anim.size(), sink, |time| anim.render_frame(time, text))
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
