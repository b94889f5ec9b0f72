//! Board peripherals owned by the monitor task

use dmxmon_display::Ili9341;
use dmxmon_hal::spi::{Phase, Polarity, SpiConfig};
use dmxmon_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use dmxmon_hal_rp2040::{BufferedRx, GpioOutput, SpiDisplayBus};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_rp::uart::{self, BufferedUartRx};

/// Onboard status LED
pub type Led = GpioOutput<Output<'static>>;

/// RS485 receive side
pub type Serial = BufferedRx<BufferedUartRx>;

/// ILI9341 on SPI0 with CS, DC and RST on plain GPIOs
pub type Display = Ili9341<
    SpiDisplayBus<Spi<'static, SPI0, Blocking>, Output<'static>, Output<'static>>,
    GpioOutput<Output<'static>>,
>;

/// Everything the monitor loop drives
pub struct Device {
    pub serial: Serial,
    pub display: Display,
    pub led: Led,
}

/// Convert to the embassy-rp UART configuration
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

/// Convert to the embassy-rp SPI configuration
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}
