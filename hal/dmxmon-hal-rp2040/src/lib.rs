//! RP2040 board adapters for dmxmon
//!
//! Bridges embassy-rp peripherals (through the `embedded-hal` and
//! `embedded-io` traits they implement) to the `dmxmon-hal` contracts:
//!
//! - [`gpio::GpioOutput`] - status LED and display reset line
//! - [`uart::BufferedRx`] - interrupt-buffered UART receiver
//! - [`spi::SpiDisplayBus`] - SPI plus chip select and data/command lines
//!
//! [`pins`] holds the board wiring.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pins;
pub mod spi;
pub mod uart;

pub use gpio::GpioOutput;
pub use spi::{BusError, SpiDisplayBus};
pub use uart::BufferedRx;
