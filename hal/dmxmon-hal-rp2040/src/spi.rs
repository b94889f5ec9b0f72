//! SPI display bus adapter
//!
//! Drives chip select and data/command around each SPI transfer so the
//! display driver only deals in command and data bytes.

use core::fmt;

use dmxmon_hal::DisplayBus;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Display bus error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError<E> {
    /// SPI transfer failed
    Spi(E),
    /// Chip select or data/command pin write failed
    Pin,
}

impl<E: fmt::Debug> fmt::Display for BusError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Spi(e) => write!(f, "SPI transfer failed: {:?}", e),
            BusError::Pin => write!(f, "display control pin write failed"),
        }
    }
}

/// ILI9341-style 4-wire SPI bus
///
/// CS is active low. DC is low for command bytes and high for data bytes.
pub struct SpiDisplayBus<SPI, CS, DC> {
    spi: SPI,
    cs: CS,
    dc: DC,
}

impl<SPI, CS, DC> SpiDisplayBus<SPI, CS, DC>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Create a bus, leaving the display deselected
    pub fn new(spi: SPI, mut cs: CS, dc: DC) -> Result<Self, BusError<SPI::Error>> {
        cs.set_high().map_err(|_| BusError::Pin)?;
        Ok(Self { spi, cs, dc })
    }

    /// Release the SPI bus and control pins
    pub fn release(self) -> (SPI, CS, DC) {
        (self.spi, self.cs, self.dc)
    }

    fn transfer(&mut self, data_mode: bool, bytes: &[u8]) -> Result<(), BusError<SPI::Error>> {
        self.cs.set_low().map_err(|_| BusError::Pin)?;
        let result = self.transfer_selected(data_mode, bytes);
        // Deselect even when the transfer failed
        let deselect = self.cs.set_high().map_err(|_| BusError::Pin);
        result.and(deselect)
    }

    fn transfer_selected(
        &mut self,
        data_mode: bool,
        bytes: &[u8],
    ) -> Result<(), BusError<SPI::Error>> {
        if data_mode {
            self.dc.set_high().map_err(|_| BusError::Pin)?;
        } else {
            self.dc.set_low().map_err(|_| BusError::Pin)?;
        }
        self.spi.write(bytes).map_err(BusError::Spi)?;
        self.spi.flush().map_err(BusError::Spi)
    }
}

impl<SPI, CS, DC> DisplayBus for SpiDisplayBus<SPI, CS, DC>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    type Error = BusError<SPI::Error>;

    fn write_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.transfer(false, &[cmd])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.transfer(true, data)
    }
}
