//! Board wiring
//!
//! GPIO numbers for the monitor board: RS485 transceiver on UART1,
//! ILI9341 on SPI0, status LED on the Pico's onboard LED.

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// UART1 TX (unused, the monitor never transmits)
pub const UART_TX: u8 = 4;
/// UART1 RX from the RS485 transceiver
pub const UART_RX: u8 = 5;

/// SPI0 clock
pub const DISPLAY_SCK: u8 = 18;
/// SPI0 MOSI
pub const DISPLAY_MOSI: u8 = 19;
/// Display chip select (active low)
pub const DISPLAY_CS: u8 = 17;
/// Display data/command select
pub const DISPLAY_DC: u8 = 16;
/// Display hardware reset (active low)
pub const DISPLAY_RST: u8 = 20;

/// Onboard status LED
pub const STATUS_LED: u8 = 25;

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// SPI peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiId {
    Spi0,
    Spi1,
}

/// Determine which UART can use a given GPIO pin
///
/// RP2040 has specific pin mappings for each UART.
pub const fn gpio_to_uart(gpio: u8) -> Option<UartId> {
    // UART0: GPIO 0/1, 12/13, 16/17, 28/29
    // UART1: GPIO 4/5, 8/9, 20/21, 24/25
    match gpio {
        0 | 1 | 12 | 13 | 16 | 17 | 28 | 29 => Some(UartId::Uart0),
        4 | 5 | 8 | 9 | 20 | 21 | 24 | 25 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Determine which SPI block can use a given GPIO pin for SCK/TX/RX/CSn
pub const fn gpio_to_spi(gpio: u8) -> Option<SpiId> {
    if gpio >= GPIO_COUNT {
        return None;
    }
    // Functions repeat every 16 pins: 0-7 SPI0, 8-15 SPI1
    if gpio % 16 < 8 {
        Some(SpiId::Spi0)
    } else {
        Some(SpiId::Spi1)
    }
}

const fn same_uart(a: Option<UartId>, b: UartId) -> bool {
    matches!(
        (a, b),
        (Some(UartId::Uart0), UartId::Uart0) | (Some(UartId::Uart1), UartId::Uart1)
    )
}

const fn same_spi(a: Option<SpiId>, b: SpiId) -> bool {
    matches!(
        (a, b),
        (Some(SpiId::Spi0), SpiId::Spi0) | (Some(SpiId::Spi1), SpiId::Spi1)
    )
}

// Wiring sanity checks
const _: () = assert!(same_uart(gpio_to_uart(UART_TX), UartId::Uart1));
const _: () = assert!(same_uart(gpio_to_uart(UART_RX), UartId::Uart1));
const _: () = assert!(same_spi(gpio_to_spi(DISPLAY_SCK), SpiId::Spi0));
const _: () = assert!(same_spi(gpio_to_spi(DISPLAY_MOSI), SpiId::Spi0));
const _: () = assert!(STATUS_LED < GPIO_COUNT);
const _: () = assert!(DISPLAY_RST < GPIO_COUNT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uart_mapping() {
        assert_eq!(gpio_to_uart(0), Some(UartId::Uart0));
        assert_eq!(gpio_to_uart(5), Some(UartId::Uart1));
        assert_eq!(gpio_to_uart(2), None);
    }

    #[test]
    fn test_spi_mapping() {
        assert_eq!(gpio_to_spi(18), Some(SpiId::Spi0));
        assert_eq!(gpio_to_spi(19), Some(SpiId::Spi0));
        assert_eq!(gpio_to_spi(10), Some(SpiId::Spi1));
        assert_eq!(gpio_to_spi(30), None);
    }

    #[test]
    fn test_display_control_pins_distinct() {
        let pins = [
            DISPLAY_SCK,
            DISPLAY_MOSI,
            DISPLAY_CS,
            DISPLAY_DC,
            DISPLAY_RST,
            STATUS_LED,
            UART_TX,
            UART_RX,
        ];
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
