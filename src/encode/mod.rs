//! Frame sinks and still/animated image encoders.

pub mod gif;
/// Still PNG output.
pub mod png;
/// The frame sink interface and an in-memory sink.
pub mod sink;
