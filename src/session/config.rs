use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::gif::DEFAULT_GIF_SPEED;
use crate::foundation::core::Fps;
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::render::text::FontCandidates;

/// Frame rate settings for one animated asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GifSettings {
    /// Whole frames per second.
    pub fps: u32,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self { fps: 12 }
    }
}

impl GifSettings {
    /// Validated frame rate.
    pub fn fps(&self) -> AnvilResult<Fps> {
        Fps::whole(self.fps)
    }
}

/// Session configuration, loaded from JSON. Every field is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Directory the assets are written to; created when missing.
    pub output_dir: PathBuf,
    /// Font files to try, per weight.
    pub fonts: FontCandidates,
    /// Animated banner frame rate.
    pub banner_gif: GifSettings,
    /// Promo frame rate.
    pub promo_gif: GifSettings,
    /// GIF quantizer speed, `1..=30`.
    pub gif_speed: i32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets"),
            fonts: FontCandidates::default(),
            banner_gif: GifSettings::default(),
            promo_gif: GifSettings::default(),
            gif_speed: DEFAULT_GIF_SPEED,
        }
    }
}

impl AssetConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> AnvilResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| AnvilError::config(format!("parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> AnvilResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AnvilError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Reject a zero frame rate or an out-of-range quantizer speed.
    pub fn validate(&self) -> AnvilResult<()> {
        self.banner_gif.fps()?;
        self.promo_gif.fps()?;
        if !(1..=30).contains(&self.gif_speed) {
            return Err(AnvilError::config(format!(
                "gif_speed must be in 1..=30, got {}",
                self.gif_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
