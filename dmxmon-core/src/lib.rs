//! Board-agnostic core logic for the DMX512 bus monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - DMX channel universe and packet receiver
//! - Fixture descriptors
//! - Drawing surface trait
//! - Render tracker (partial redraw decisions)
//! - Status LED blink state machine and error flash patterns
//! - Per-tick monitor sequence

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod dmx;
pub mod indicator;
pub mod monitor;
pub mod render;
pub mod traits;

pub use monitor::{Monitor, MonitorError, TickReport};
