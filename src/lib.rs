//! Manga Clash - two-fighter grid brawler
//!
//! Each turn both sides commit three actions, resolved one phase at a time
//! by [`combat::resolve_phase`]. Everything else in the crate feeds that
//! function or presents its results.

pub mod ai;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod render;
pub mod session;
