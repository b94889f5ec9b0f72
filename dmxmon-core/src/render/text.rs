//! Fixed-capacity text formatting for screen lines

use core::fmt::Write;

use heapless::String;

use super::layout::DATA_PREVIEW_CHANNELS;
use crate::config::Fixture;
use crate::dmx::FixtureChannels;

/// Longest line kept for drawing
///
/// Wider than the screen at scale 1, so truncation never changes what is
/// visible.
pub const LINE_CAPACITY: usize = 64;

pub type Line = String<LINE_CAPACITY>;

/// "PicoSpot 1 - Moving Head"
pub fn header_line(fixture: &Fixture) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "{} - {}", fixture.name, fixture.kind);
    line
}

/// "DMX Address: 1-11"
pub fn address_line(fixture: &Fixture) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "DMX Address: {}-{}",
        fixture.address,
        fixture.end_address()
    );
    line
}

/// First channel values, each right-aligned to three digits
pub fn values_line(channels: &FixtureChannels<'_>) -> Line {
    let mut line = Line::new();
    for (i, value) in channels.iter().take(DATA_PREVIEW_CHANNELS).enumerate() {
        if i > 0 && line.push(' ').is_err() {
            break;
        }
        if write!(line, "{:3}", value).is_err() {
            break;
        }
    }
    line
}

/// "-- " per channel with the trailing space dropped
pub fn placeholder_line(channels: u16) -> Line {
    let mut line = Line::new();
    for i in 0..channels {
        let piece = if i == 0 { "--" } else { " --" };
        if line.push_str(piece).is_err() {
            break;
        }
    }
    line
}
