//! Partial redraw tracking
//!
//! | Condition                               | Status | Data |
//! |-----------------------------------------|--------|------|
//! | First tick                              | yes    | yes  |
//! | Liveness changed                        | yes    | yes  |
//! | Data older than [`DATA_REFRESH_MS`]     | no     | yes  |
//! | Otherwise                               | no     | no   |
//!
//! The static layout is drawn exactly once, on the first tick.

use super::layout::*;
use super::palette;
use super::text;
use crate::config::Fixture;
use crate::dmx::PacketReceiver;
use crate::traits::{DrawSurface, Rgb565, TextStyle};

/// What a tick repainted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderReport {
    /// Static layout (title, fixture headers, labels)
    pub layout: bool,
    /// Status line
    pub status: bool,
    /// Fixture data lines
    pub data: bool,
}

impl RenderReport {
    /// Whether anything was drawn
    pub fn any(&self) -> bool {
        self.layout || self.status || self.data
    }
}

/// Decides which screen regions are stale and repaints them
///
/// State only advances once the corresponding draw succeeded, so a bus
/// fault leaves the region stale and it is retried on the next tick.
#[derive(Debug, Clone)]
pub struct RenderTracker {
    fixtures: &'static [Fixture],
    layout_drawn: bool,
    /// Liveness shown on the status line, None until first drawn
    drawn_live: Option<bool>,
    /// Data lines still show the previous liveness state
    data_dirty: bool,
    last_data_ms: Option<u32>,
}

impl RenderTracker {
    pub const fn new(fixtures: &'static [Fixture]) -> Self {
        Self {
            fixtures,
            layout_drawn: false,
            drawn_live: None,
            data_dirty: true,
            last_data_ms: None,
        }
    }

    /// Repaint whatever is stale for the given liveness
    pub fn tick<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        receiver: &PacketReceiver,
        live: bool,
        now_ms: u32,
    ) -> Result<RenderReport, S::Error> {
        let mut report = RenderReport::default();

        if !self.layout_drawn {
            self.draw_layout(surface)?;
            self.layout_drawn = true;
            report.layout = true;
        }

        if self.drawn_live != Some(live) {
            self.data_dirty = true;
            // The fill may land before the text fails; a partial draw shows nothing
            self.drawn_live = None;
            draw_status(surface, live)?;
            self.drawn_live = Some(live);
            report.status = true;
        }

        let data_due = match self.last_data_ms {
            Some(last) => now_ms.wrapping_sub(last) >= DATA_REFRESH_MS,
            None => true,
        };
        if self.data_dirty || data_due {
            self.draw_data(surface, receiver, live)?;
            self.data_dirty = false;
            self.last_data_ms = Some(now_ms);
            report.data = true;
        }

        Ok(report)
    }

    /// Whether the static layout has been drawn
    pub fn layout_drawn(&self) -> bool {
        self.layout_drawn
    }

    /// Liveness currently shown on the status line
    pub fn drawn_live(&self) -> Option<bool> {
        self.drawn_live
    }

    fn draw_layout<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(palette::BLACK)?;
        surface.draw_text(
            TITLE,
            TITLE_X,
            TITLE_Y,
            TextStyle::new(palette::WHITE)
                .with_background(palette::BLACK)
                .with_scale(TITLE_SCALE),
        )?;

        for (i, fixture) in self.fixtures.iter().enumerate() {
            let y = row_y(i);
            surface.draw_text(
                &text::header_line(fixture),
                LABEL_X,
                y,
                on_black(palette::YELLOW),
            )?;
            surface.draw_text(
                &text::address_line(fixture),
                LABEL_X,
                y.saturating_add(ADDRESS_OFFSET),
                on_black(palette::CYAN),
            )?;
            surface.draw_text(
                DATA_LABEL,
                LABEL_X,
                y.saturating_add(DATA_LABEL_OFFSET),
                on_black(palette::LABEL),
            )?;
        }
        Ok(())
    }

    fn draw_data<S: DrawSurface>(
        &self,
        surface: &mut S,
        receiver: &PacketReceiver,
        live: bool,
    ) -> Result<(), S::Error> {
        for (i, fixture) in self.fixtures.iter().enumerate() {
            let y = row_y(i).saturating_add(DATA_OFFSET);
            surface.fill_rect(DATA_X, y, DATA_W, DATA_H, palette::BLACK)?;
            if live {
                let line = text::values_line(&receiver.channels_for(fixture));
                surface.draw_text(&line, DATA_X, y, on_black(palette::WHITE))?;
            } else {
                let line = text::placeholder_line(fixture.channels);
                surface.draw_text(&line, DATA_X, y, on_black(palette::GRAY))?;
            }
        }
        Ok(())
    }
}

fn draw_status<S: DrawSurface>(surface: &mut S, live: bool) -> Result<(), S::Error> {
    surface.fill_rect(STATUS_X, STATUS_Y, STATUS_W, STATUS_H, palette::BLACK)?;
    let (label, color) = if live {
        (STATUS_LIVE, palette::GREEN)
    } else {
        (STATUS_WAITING, palette::RED)
    };
    surface.draw_text(label, STATUS_X, STATUS_Y, on_black(color))
}

fn on_black(foreground: Rgb565) -> TextStyle {
    TextStyle::new(foreground).with_background(palette::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FIXTURES;
    use std::string::{String, ToString};
    use std::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Fill(u16, u16, u16, u16, Rgb565),
        Text(String, u16, u16, TextStyle),
    }

    /// Records draw calls; can be told to fail the Nth call from now
    struct MockSurface {
        ops: Vec<Op>,
        fail_after: Option<usize>,
    }

    impl MockSurface {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
                fail_after: None,
            }
        }

        fn take(&mut self) -> Vec<Op> {
            core::mem::take(&mut self.ops)
        }

        fn check(&mut self) -> Result<(), ()> {
            match self.fail_after {
                Some(0) => Err(()),
                Some(n) => {
                    self.fail_after = Some(n - 1);
                    Ok(())
                }
                None => Ok(()),
            }
        }
    }

    impl DrawSurface for MockSurface {
        type Error = ();

        fn size(&self) -> (u16, u16) {
            (320, 240)
        }

        fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) -> Result<(), ()> {
            self.check()?;
            self.ops.push(Op::Fill(x, y, w, h, color));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, x: u16, y: u16, style: TextStyle) -> Result<(), ()> {
            self.check()?;
            self.ops.push(Op::Text(text.to_string(), x, y, style));
            Ok(())
        }
    }

    fn texts(ops: &[Op]) -> Vec<&str> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Text(t, ..) => Some(t.as_str()),
                Op::Fill(..) => None,
            })
            .collect()
    }

    fn ramp_receiver() -> PacketReceiver {
        let mut rx = PacketReceiver::new();
        let frame: Vec<u8> = (0..40).map(|i| (i * 10) as u8).collect();
        rx.ingest(&frame, 0);
        rx
    }

    #[test]
    fn test_first_tick_draws_everything() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();

        let report = tracker.tick(&mut surface, &rx, false, 0).unwrap();
        assert_eq!(
            report,
            RenderReport {
                layout: true,
                status: true,
                data: true
            }
        );

        let ops = surface.take();
        assert_eq!(ops[0], Op::Fill(0, 0, 320, 240, palette::BLACK));
        assert_eq!(
            ops[1],
            Op::Text(
                "DMX512 MONITOR".to_string(),
                10,
                10,
                TextStyle::new(palette::WHITE)
                    .with_background(palette::BLACK)
                    .with_scale(2)
            )
        );
        assert_eq!(
            texts(&ops),
            [
                "DMX512 MONITOR",
                "PicoSpot 1 - Moving Head",
                "DMX Address: 1-11",
                "Data:",
                "PicoSpot 2 - Moving Head",
                "DMX Address: 12-22",
                "Data:",
                "RGB LED 1 - Color Changer",
                "DMX Address: 23-27",
                "Data:",
                "RGB LED 2 - Color Changer",
                "DMX Address: 28-32",
                "Data:",
                "STATUS: WAITING FOR DATA",
                "-- -- -- -- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- -- -- -- --",
                "-- -- -- -- --",
                "-- -- -- -- --",
            ]
        );
        assert!(ops.contains(&Op::Fill(10, 30, 300, 15, palette::BLACK)));
        assert!(ops.contains(&Op::Fill(55, 75, 230, 15, palette::BLACK)));
        assert!(ops.contains(&Op::Text(
            "DMX Address: 12-22".to_string(),
            10,
            103,
            TextStyle::new(palette::CYAN).with_background(palette::BLACK)
        )));
        assert!(ops.contains(&Op::Text(
            "-- -- -- -- --".to_string(),
            55,
            201,
            TextStyle::new(palette::GRAY).with_background(palette::BLACK)
        )));
    }

    #[test]
    fn test_quiet_ticks_draw_nothing() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();
        tracker.tick(&mut surface, &rx, false, 0).unwrap();
        surface.take();

        for now in (50..2000).step_by(50) {
            let report = tracker.tick(&mut surface, &rx, false, now).unwrap();
            assert!(!report.any());
        }
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_periodic_data_refresh_only() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();
        tracker.tick(&mut surface, &rx, false, 0).unwrap();
        surface.take();

        let report = tracker.tick(&mut surface, &rx, false, 2000).unwrap();
        assert_eq!(
            report,
            RenderReport {
                layout: false,
                status: false,
                data: true
            }
        );
        let ops = surface.take();
        assert_eq!(ops.len(), 2 * DEFAULT_FIXTURES.len());
        assert!(!texts(&ops).iter().any(|t| t.starts_with("STATUS")));
    }

    #[test]
    fn test_flip_to_live_redraws_and_resets_timer() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = ramp_receiver();
        tracker.tick(&mut surface, &rx, false, 0).unwrap();
        surface.take();

        let report = tracker.tick(&mut surface, &rx, true, 1200).unwrap();
        assert!(report.status && report.data && !report.layout);
        let ops = surface.take();
        assert_eq!(
            ops[1],
            Op::Text(
                "STATUS: RECEIVING DATA".to_string(),
                10,
                30,
                TextStyle::new(palette::GREEN).with_background(palette::BLACK)
            )
        );
        assert_eq!(texts(&ops)[1], " 10  20  30  40  50  60  70  80");
        assert_eq!(tracker.drawn_live(), Some(true));

        // Timer restarted at the flip, not at the first data draw
        assert!(!tracker.tick(&mut surface, &rx, true, 2000).unwrap().any());
        assert!(!tracker.tick(&mut surface, &rx, true, 3199).unwrap().any());
        assert!(tracker.tick(&mut surface, &rx, true, 3200).unwrap().data);
    }

    #[test]
    fn test_layout_drawn_once() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();
        let mut layouts = 0;
        for step in 0..200u32 {
            let live = (step / 40) % 2 == 1;
            if tracker.tick(&mut surface, &rx, live, step * 50).unwrap().layout {
                layouts += 1;
            }
        }
        assert_eq!(layouts, 1);
        let clears = surface
            .ops
            .iter()
            .filter(|op| **op == Op::Fill(0, 0, 320, 240, palette::BLACK))
            .count();
        assert_eq!(clears, 1);
    }

    #[test]
    fn test_failed_status_draw_is_retried() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();
        tracker.tick(&mut surface, &rx, false, 0).unwrap();
        surface.take();

        surface.fail_after = Some(0);
        assert!(tracker.tick(&mut surface, &rx, true, 100).is_err());
        assert_eq!(tracker.drawn_live(), None);

        surface.fail_after = None;
        let report = tracker.tick(&mut surface, &rx, true, 150).unwrap();
        assert!(report.status && report.data);
    }

    #[test]
    fn test_status_text_failure_then_flip_back_redraws() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();
        tracker.tick(&mut surface, &rx, false, 0).unwrap();
        surface.take();

        // Status fill lands, status text fails: the line is now blank
        surface.fail_after = Some(1);
        assert!(tracker.tick(&mut surface, &rx, true, 100).is_err());
        assert_eq!(surface.take(), [Op::Fill(10, 30, 300, 15, palette::BLACK)]);

        // Liveness drops back before the retry; the blank line must still be repainted
        surface.fail_after = None;
        let report = tracker.tick(&mut surface, &rx, false, 150).unwrap();
        assert!(report.status);
        assert_eq!(texts(&surface.take())[0], "STATUS: WAITING FOR DATA");
        assert_eq!(tracker.drawn_live(), Some(false));

        for now in (200..1850).step_by(50) {
            assert!(!tracker.tick(&mut surface, &rx, false, now).unwrap().status);
        }
    }

    #[test]
    fn test_failed_data_draw_after_flip_is_retried() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = ramp_receiver();
        tracker.tick(&mut surface, &rx, false, 0).unwrap();
        surface.take();

        // Status fill and text succeed, first data fill fails
        surface.fail_after = Some(2);
        assert!(tracker.tick(&mut surface, &rx, true, 100).is_err());
        assert_eq!(tracker.drawn_live(), Some(true));

        surface.fail_after = None;
        surface.take();
        let report = tracker.tick(&mut surface, &rx, true, 150).unwrap();
        assert!(!report.status);
        assert!(report.data);
        assert_eq!(texts(&surface.ops)[0], " 10  20  30  40  50  60  70  80");
    }

    #[test]
    fn test_failed_layout_is_redrawn() {
        let mut surface = MockSurface::new();
        let mut tracker = RenderTracker::new(&DEFAULT_FIXTURES);
        let rx = PacketReceiver::new();

        surface.fail_after = Some(3);
        assert!(tracker.tick(&mut surface, &rx, false, 0).is_err());
        assert!(!tracker.layout_drawn());

        surface.fail_after = None;
        let report = tracker.tick(&mut surface, &rx, false, 50).unwrap();
        assert!(report.layout && report.status && report.data);
    }
}
