//! GPIO output adapter

use dmxmon_hal::OutputPin;
use embedded_hal::digital::OutputPin as EhOutputPin;

/// Output pin wrapper that tracks its own level
///
/// RP2040 GPIO writes cannot fail, so errors from the inner pin are
/// dropped. The tracked level is what [`OutputPin::is_set_high`] reports.
pub struct GpioOutput<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin> GpioOutput<P> {
    /// Wrap a pin, driving it to the given initial level
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        let _ = if initial_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
        Self {
            pin,
            high: initial_high,
        }
    }

    /// Release the inner pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin> OutputPin for GpioOutput<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
