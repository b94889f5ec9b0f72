//! Liveness blink state machine

/// LED cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkMode {
    /// Receiving data
    Fast,
    /// Waiting for data
    Slow,
}

impl BlinkMode {
    pub const fn for_liveness(live: bool) -> Self {
        if live {
            BlinkMode::Fast
        } else {
            BlinkMode::Slow
        }
    }

    /// Time between toggles in milliseconds
    pub const fn period_ms(self) -> u32 {
        match self {
            BlinkMode::Fast => 250,
            BlinkMode::Slow => 1000,
        }
    }
}

/// Maps liveness to an LED level over time
///
/// Switching mode keeps the current LED level and the time of the last
/// toggle, so the new cadence starts from the existing phase.
#[derive(Debug, Clone)]
pub struct IndicatorController {
    mode: BlinkMode,
    led_on: bool,
    last_toggle_ms: u32,
}

impl Default for IndicatorController {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorController {
    /// Start in slow mode with the LED off
    pub const fn new() -> Self {
        Self {
            mode: BlinkMode::Slow,
            led_on: false,
            last_toggle_ms: 0,
        }
    }

    /// Advance to `now_ms`
    ///
    /// Returns the new LED level when it toggled, None otherwise. Timing
    /// is only as fine as the caller's tick.
    pub fn update(&mut self, live: bool, now_ms: u32) -> Option<bool> {
        self.mode = BlinkMode::for_liveness(live);
        if now_ms.wrapping_sub(self.last_toggle_ms) < self.mode.period_ms() {
            return None;
        }
        self.led_on = !self.led_on;
        self.last_toggle_ms = now_ms;
        Some(self.led_on)
    }

    pub fn mode(&self) -> BlinkMode {
        self.mode
    }

    /// Level the LED should currently show
    pub fn led_on(&self) -> bool {
        self.led_on
    }

    /// Restart the cadence from `now_ms` with the LED off
    ///
    /// Used after a flash pattern has taken over the LED.
    pub fn resync(&mut self, now_ms: u32) {
        self.led_on = false;
        self.last_toggle_ms = now_ms;
    }
}
