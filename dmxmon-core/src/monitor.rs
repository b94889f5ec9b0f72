//! Per-tick monitor sequence
//!
//! One tick reads the serial port, recomputes liveness, repaints stale
//! screen regions and advances the LED, in that order. The caller owns the
//! hardware and the cadence between ticks.

use core::fmt;

use dmxmon_hal::{OutputPin, UartRx};

use crate::config::Fixture;
use crate::dmx::{PacketReceiver, DMX_UNIVERSE_SIZE};
use crate::indicator::IndicatorController;
use crate::render::{RenderReport, RenderTracker};
use crate::traits::DrawSurface;

/// Most bytes taken from the serial port per tick
pub const READ_CHUNK: usize = DMX_UNIVERSE_SIZE;

/// Tick failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError<SE, DE> {
    /// Serial read failed
    Serial(SE),
    /// Display bus write failed
    Display(DE),
}

impl<SE: fmt::Debug, DE: fmt::Debug> fmt::Display for MonitorError<SE, DE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Serial(e) => write!(f, "serial read failed: {:?}", e),
            MonitorError::Display(e) => write!(f, "display write failed: {:?}", e),
        }
    }
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Bytes taken from the serial port (excess drained bytes not counted)
    pub bytes_read: usize,
    /// The chunk was accepted as a frame
    pub ingested: bool,
    /// Liveness after ingestion
    pub live: bool,
    pub render: RenderReport,
    /// New LED level if it toggled
    pub led: Option<bool>,
}

/// Receiver, render tracker and LED state for one monitor
pub struct Monitor {
    receiver: PacketReceiver,
    tracker: RenderTracker,
    indicator: IndicatorController,
}

impl Monitor {
    pub const fn new(fixtures: &'static [Fixture]) -> Self {
        Self {
            receiver: PacketReceiver::new(),
            tracker: RenderTracker::new(fixtures),
            indicator: IndicatorController::new(),
        }
    }

    /// Run one tick against the given hardware
    pub fn tick<R, S, L>(
        &mut self,
        now_ms: u32,
        serial: &mut R,
        surface: &mut S,
        led: &mut L,
    ) -> Result<TickReport, MonitorError<R::Error, S::Error>>
    where
        R: UartRx,
        S: DrawSurface,
        L: OutputPin,
    {
        let mut buf = [0u8; READ_CHUNK];
        let bytes_read = read_chunk(serial, &mut buf).map_err(MonitorError::Serial)?;
        let ingested = self.receiver.ingest(&buf[..bytes_read], now_ms);

        let live = self.receiver.is_live(now_ms);

        let render = self
            .tracker
            .tick(surface, &self.receiver, live, now_ms)
            .map_err(MonitorError::Display)?;

        let led_level = self.indicator.update(live, now_ms);
        if let Some(on) = led_level {
            led.set_state(on);
        }

        Ok(TickReport {
            bytes_read,
            ingested,
            live,
            render,
            led: led_level,
        })
    }

    pub fn receiver(&self) -> &PacketReceiver {
        &self.receiver
    }

    pub fn tracker(&self) -> &RenderTracker {
        &self.tracker
    }

    pub fn indicator_mut(&mut self) -> &mut IndicatorController {
        &mut self.indicator
    }
}

/// Take whatever is buffered, up to `buf.len()` bytes
///
/// When the buffer fills, the remaining backlog is read and discarded so
/// the next tick starts from fresh data.
fn read_chunk<R: UartRx>(serial: &mut R, buf: &mut [u8]) -> Result<usize, R::Error> {
    if !serial.is_readable()? {
        return Ok(0);
    }

    let mut len = 0;
    while len < buf.len() {
        let n = serial.read_available(&mut buf[len..])?;
        if n == 0 {
            break;
        }
        len += n;
    }

    if len == buf.len() {
        let mut scratch = [0u8; 64];
        while serial.read_available(&mut scratch)? > 0 {}
    }

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FIXTURES;
    use crate::traits::{Rgb565, TextStyle};
    use std::collections::VecDeque;
    use std::string::{String, ToString};
    use std::vec::Vec;

    struct MockSerial {
        pending: VecDeque<u8>,
        /// Largest read the mock serves at once
        burst: usize,
        fail: bool,
    }

    impl MockSerial {
        fn new() -> Self {
            Self {
                pending: VecDeque::new(),
                burst: 32,
                fail: false,
            }
        }

        fn push(&mut self, bytes: &[u8]) {
            self.pending.extend(bytes.iter().copied());
        }
    }

    impl UartRx for MockSerial {
        type Error = &'static str;

        fn is_readable(&mut self) -> Result<bool, Self::Error> {
            if self.fail {
                return Err("framing");
            }
            Ok(!self.pending.is_empty())
        }

        fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if self.fail {
                return Err("framing");
            }
            let n = buf.len().min(self.pending.len()).min(self.burst);
            for slot in buf.iter_mut().take(n) {
                *slot = self.pending.pop_front().unwrap_or(0);
            }
            Ok(n)
        }
    }

    struct MockSurface {
        texts: Vec<String>,
        fills: usize,
        fail: bool,
    }

    impl MockSurface {
        fn new() -> Self {
            Self {
                texts: Vec::new(),
                fills: 0,
                fail: false,
            }
        }
    }

    impl DrawSurface for MockSurface {
        type Error = u8;

        fn size(&self) -> (u16, u16) {
            (320, 240)
        }

        fn fill_rect(&mut self, _x: u16, _y: u16, _w: u16, _h: u16, _c: Rgb565) -> Result<(), u8> {
            if self.fail {
                return Err(7);
            }
            self.fills += 1;
            Ok(())
        }

        fn draw_text(&mut self, text: &str, _x: u16, _y: u16, _s: TextStyle) -> Result<(), u8> {
            if self.fail {
                return Err(7);
            }
            self.texts.push(text.to_string());
            Ok(())
        }
    }

    struct MockLed {
        high: bool,
        writes: u32,
    }

    impl OutputPin for MockLed {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct Rig {
        monitor: Monitor,
        serial: MockSerial,
        surface: MockSurface,
        led: MockLed,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                monitor: Monitor::new(&DEFAULT_FIXTURES),
                serial: MockSerial::new(),
                surface: MockSurface::new(),
                led: MockLed {
                    high: false,
                    writes: 0,
                },
            }
        }

        fn tick(&mut self, now: u32) -> Result<TickReport, MonitorError<&'static str, u8>> {
            self.monitor
                .tick(now, &mut self.serial, &mut self.surface, &mut self.led)
        }
    }

    #[test]
    fn test_idle_first_tick() {
        let mut rig = Rig::new();
        let report = rig.tick(0).unwrap();
        assert_eq!(report.bytes_read, 0);
        assert!(!report.ingested);
        assert!(!report.live);
        assert!(report.render.layout);
        assert!(rig.surface.texts.contains(&"STATUS: WAITING FOR DATA".to_string()));
        assert_eq!(report.led, None);
    }

    #[test]
    fn test_frame_flips_status_and_led_same_tick() {
        let mut rig = Rig::new();
        rig.tick(0).unwrap();
        rig.tick(50).unwrap();
        rig.surface.texts.clear();

        let frame: Vec<u8> = (0..30).map(|i| (i * 10) as u8).collect();
        rig.serial.push(&frame);
        let report = rig.tick(300).unwrap();

        assert_eq!(report.bytes_read, 30);
        assert!(report.ingested && report.live);
        assert!(report.render.status && report.render.data);
        assert_eq!(rig.surface.texts[0], "STATUS: RECEIVING DATA");
        assert_eq!(rig.surface.texts[1], " 10  20  30  40  50  60  70  80");
        // 300 ms since start exceeds the fast period, so the LED toggles now
        assert_eq!(report.led, Some(true));
        assert!(rig.led.high);
    }

    #[test]
    fn test_liveness_expires() {
        let mut rig = Rig::new();
        rig.serial.push(&[1; 40]);
        assert!(rig.tick(0).unwrap().live);
        assert!(rig.tick(1950).unwrap().live);
        rig.surface.texts.clear();

        let report = rig.tick(2000).unwrap();
        assert!(!report.live);
        assert!(report.render.status);
        assert_eq!(rig.surface.texts[0], "STATUS: WAITING FOR DATA");
    }

    #[test]
    fn test_short_chunk_not_ingested() {
        let mut rig = Rig::new();
        rig.serial.push(&[9; 10]);
        let report = rig.tick(0).unwrap();
        assert_eq!(report.bytes_read, 10);
        assert!(!report.ingested);
        assert_eq!(rig.monitor.receiver().packet_count(), 0);
    }

    #[test]
    fn test_backlog_is_capped_and_drained() {
        let mut rig = Rig::new();
        let backlog: Vec<u8> = (0..1200).map(|i| (i % 251) as u8).collect();
        rig.serial.push(&backlog);

        let report = rig.tick(0).unwrap();
        assert_eq!(report.bytes_read, READ_CHUNK);
        assert!(rig.serial.pending.is_empty());
        assert_eq!(
            rig.monitor.receiver().universe().as_slice(),
            &backlog[..READ_CHUNK]
        );
    }

    #[test]
    fn test_serial_error_skips_render() {
        let mut rig = Rig::new();
        rig.serial.fail = true;
        assert_eq!(rig.tick(0), Err(MonitorError::Serial("framing")));
        assert_eq!(rig.surface.fills, 0);
        assert!(!rig.monitor.tracker().layout_drawn());
    }

    #[test]
    fn test_display_error_skips_led() {
        let mut rig = Rig::new();
        rig.surface.fail = true;
        assert_eq!(rig.tick(5000), Err(MonitorError::Display(7)));
        assert_eq!(rig.led.writes, 0);

        rig.surface.fail = false;
        let report = rig.tick(5050).unwrap();
        assert!(report.render.layout);
        assert_eq!(report.led, Some(true));
    }

    #[test]
    fn test_error_display() {
        let err: MonitorError<&str, u8> = MonitorError::Display(7);
        assert_eq!(err.to_string(), "display write failed: 7");
    }
}
