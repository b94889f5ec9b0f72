//! ILI9341 drawing surface for dmxmon
//!
//! Implements [`dmxmon_core::traits::DrawSurface`] on top of any
//! [`dmxmon_hal::DisplayBus`], with a built-in 8x8 bitmap font.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod font;
pub mod ili9341;

pub use ili9341::{Ili9341, HEIGHT, WIDTH};
