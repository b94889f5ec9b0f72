//! Status LED
//!
//! The LED blinks fast while DMX data is arriving and slowly while the
//! monitor waits for it. Faults are signalled with fixed flash patterns.

pub mod blink;
pub mod flash;

pub use blink::{BlinkMode, IndicatorController};
pub use flash::{FlashPattern, FlashStep};
