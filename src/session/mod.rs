/// The deliverable files.
pub mod catalog;
/// JSON configuration.
pub mod config;
/// Rendering and writing assets.
pub mod render_session;
/// Frame counts, timing and ordered streaming.
pub mod sequencer;
