//! Error flash patterns

/// A burst of identical LED pulses followed by a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashPattern {
    pub pulses: u8,
    pub on_ms: u32,
    pub off_ms: u32,
    /// Extra wait after the last pulse
    pub pause_ms: u32,
}

/// One LED level held for a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashStep {
    pub led_on: bool,
    pub hold_ms: u32,
}

impl FlashPattern {
    /// A monitor tick failed; the loop carries on afterwards
    pub const RECOVERABLE: Self = Self {
        pulses: 5,
        on_ms: 100,
        off_ms: 100,
        pause_ms: 1000,
    };

    /// Display bring-up failed; repeated forever
    pub const FATAL: Self = Self {
        pulses: 10,
        on_ms: 200,
        off_ms: 200,
        pause_ms: 0,
    };

    /// The pattern as a sequence of LED levels
    ///
    /// The pause is folded into the final off step.
    pub fn steps(&self) -> impl Iterator<Item = FlashStep> {
        let pattern = *self;
        (0..pattern.pulses).flat_map(move |i| {
            let last = i + 1 == pattern.pulses;
            let off = if last {
                pattern.off_ms + pattern.pause_ms
            } else {
                pattern.off_ms
            };
            [
                FlashStep {
                    led_on: true,
                    hold_ms: pattern.on_ms,
                },
                FlashStep {
                    led_on: false,
                    hold_ms: off,
                },
            ]
        })
    }

    /// Total time the pattern occupies the LED
    pub fn duration_ms(&self) -> u32 {
        self.pulses as u32 * (self.on_ms + self.off_ms) + self.pause_ms
    }
}
