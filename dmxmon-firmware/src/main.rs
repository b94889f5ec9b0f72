//! DMX Monitor - DMX512 bus monitor firmware
//!
//! Reads DMX512 traffic through an RS485 transceiver on UART1 and shows
//! per-fixture channel values on an ILI9341 TFT. The onboard LED blinks
//! fast while frames arrive and slow while the bus is idle.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART1;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dmxmon_core::indicator::FlashPattern;
use dmxmon_display::{Ili9341, HEIGHT, WIDTH};
use dmxmon_hal::{SpiConfig, UartConfig};
use dmxmon_hal_rp2040::{pins, BufferedRx, GpioOutput, SpiDisplayBus};

use crate::device::{Device, Led};

mod config;
mod device;
mod tasks;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
// RX holds two full frames so one tick of latency never overruns
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

// Peripheral grabs below name pins directly; keep them in step with the pin map
const _: () = {
    core::assert!(pins::STATUS_LED == 25);
    core::assert!(pins::DISPLAY_SCK == 18);
    core::assert!(pins::DISPLAY_MOSI == 19);
    core::assert!(pins::DISPLAY_CS == 17);
    core::assert!(pins::DISPLAY_DC == 16);
    core::assert!(pins::DISPLAY_RST == 20);
    core::assert!(pins::UART_TX == 4);
    core::assert!(pins::UART_RX == 5);
};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("DMX monitor firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Status LED (GPIO25 on the Pico)
    let mut led: Led = GpioOutput::new(Output::new(p.PIN_25, Level::Low), false);

    // Display on SPI0, TX only
    let spi_config = SpiConfig {
        frequency: config::SPI_FREQUENCY_HZ,
        ..SpiConfig::default()
    };
    let spi = Spi::new_blocking_txonly(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        device::spi_config(&spi_config),
    );
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = GpioOutput::new(Output::new(p.PIN_20, Level::High), true);

    let bus = match SpiDisplayBus::new(spi, cs, dc) {
        Ok(bus) => bus,
        Err(e) => {
            error!("Display bus setup failed: {:?}", Debug2Format(&e));
            halt(&mut led).await
        }
    };

    let mut display = Ili9341::new(bus, rst);
    if let Err(e) = display.initialize(&mut Delay) {
        error!("Display init failed: {:?}", Debug2Format(&e));
        halt(&mut led).await
    }
    info!(
        "Display initialized: {}x{} @ {} Hz (SCK GP{}, MOSI GP{}, CS GP{}, DC GP{}, RST GP{})",
        WIDTH,
        HEIGHT,
        config::SPI_FREQUENCY_HZ,
        pins::DISPLAY_SCK,
        pins::DISPLAY_MOSI,
        pins::DISPLAY_CS,
        pins::DISPLAY_DC,
        pins::DISPLAY_RST
    );

    // DMX receive on UART1; TX is wired but idle
    let uart_config = UartConfig::with_baudrate(config::SERIAL_BAUD);

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 1024]);

    let uart = Uart::new_blocking(
        p.UART1,
        p.PIN_4,
        p.PIN_5,
        device::uart_config(&uart_config),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!(
        "UART initialized: {} baud on GP{}",
        config::SERIAL_BAUD,
        pins::UART_RX
    );

    let device = Device {
        serial: BufferedRx::new(rx),
        display,
        led,
    };

    spawner
        .spawn(tasks::monitor_task(device, &config::FIXTURES))
        .unwrap();

    info!("Monitor running");
}

/// Signal an unrecoverable startup failure until reset
async fn halt(led: &mut Led) -> ! {
    loop {
        tasks::play_pattern(led, FlashPattern::FATAL).await;
    }
}
