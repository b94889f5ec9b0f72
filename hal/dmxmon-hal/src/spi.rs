//! Display bus abstractions
//!
//! TFT controllers such as the ILI9341 sit on an SPI bus with two extra
//! lines: chip select and data/command. The [`DisplayBus`] trait hides
//! that line handling so drivers only see command bytes and data bytes.

/// Command/data display bus
///
/// Implementations assert chip select for the duration of each call and
/// drive the data/command line low for commands, high for data.
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Send a single command byte
    fn write_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Send parameter or pixel data
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send a command followed by its parameters
    fn command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.write_command(cmd)?;
        if !params.is_empty() {
            self.write_data(params)?;
        }
        Ok(())
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 40_000_000, // ILI9341 write cycle limit
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}
