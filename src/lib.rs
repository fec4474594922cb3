//! anvilcast renders the SpamAnvil plugin's store assets procedurally.
//!
//! Every asset is a pure function of its size (and, for animations, the frame time):
//!
//! - Resolve fonts once into a [`Typesetter`]
//! - Create a [`RenderSession`] from an [`AssetConfig`]
//! - Write assets to a directory, render single frames, or stream an animation into a
//!   [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing, particles and scene timelines.
pub mod animation;
/// PNG and GIF encoding sinks.
pub mod encode;
/// Canvas, shapes, effects and text.
pub mod render;
/// Icon, banners and animated scenes.
pub mod scenes;
/// Asset catalog, configuration and the session API.
pub mod session;

pub use crate::foundation::core::{Fps, FrameIndex, Point, Rgba8, Size};
pub use crate::foundation::error::{AnvilError, AnvilResult};

pub use crate::animation::timeline::{FrameTime, SceneWindow, Timeline};
pub use crate::encode::gif::{DEFAULT_GIF_SPEED, GifSink, encode_animated};
pub use crate::encode::png::encode_static;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::canvas::Canvas;
pub use crate::render::palette::Palette;
pub use crate::render::text::{Face, FontCandidate, FontCandidates, TextStyle, Typesetter, Weight};
pub use crate::scenes::Animation;
pub use crate::session::catalog::AssetKind;
pub use crate::session::config::{AssetConfig, GifSettings};
pub use crate::session::render_session::{RenderSession, WrittenAsset};
pub use crate::session::sequencer::{SequenceStats, Sequencer};
