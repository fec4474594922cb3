/// Easing curves.
pub mod ease;
/// Looping ember particles.
pub mod particle;
/// Scene windows and per-frame scene lookup.
pub mod timeline;
