//! dmxmon Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware contracts the monitor logic is
//! written against. Board crates implement them on top of their HAL of
//! choice; tests implement them with simple mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dmxmon-core / dmxmon-display           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dmxmon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            ┌─────────────────┐
//!            │ dmxmon-hal-     │
//!            │    rp2040       │
//!            └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (status LED, display reset line)
//! - [`uart::UartRx`] - Non-blocking serial receive (RS485 transceiver)
//! - [`spi::DisplayBus`] - Command/data display bus (ILI9341 on SPI)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{DisplayBus, SpiConfig};
pub use uart::{UartConfig, UartRx};
