//! Screen rendering
//!
//! The layout is drawn once. After that only the status line and the
//! per-fixture data lines are repainted, and only when they are stale.

pub mod layout;
pub mod palette;
pub mod text;
pub mod tracker;

pub use tracker::{RenderReport, RenderTracker};
