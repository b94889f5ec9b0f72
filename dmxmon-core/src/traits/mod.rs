//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod surface;

pub use surface::{DrawSurface, Rgb565, TextStyle};
