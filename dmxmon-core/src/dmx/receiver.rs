//! DMX packet receiver
//!
//! Framing is a length heuristic: any serial chunk of at least
//! [`MIN_FRAME_LEN`] bytes is taken as the start of a frame and copied over
//! the leading slots of the universe. There is no break or start-code
//! detection, so shorter chunks are dropped without merging.

use super::universe::ChannelUniverse;
use crate::config::Fixture;

/// Shortest serial chunk accepted as a frame
pub const MIN_FRAME_LEN: usize = 25;

/// Link is considered live for this long after the last accepted frame
pub const LIVENESS_TIMEOUT_MS: u32 = 2000;

/// Channel values for one fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixtureChannels<'a> {
    /// Fixture range lies inside the universe
    Live(&'a [u8]),
    /// Fixture range falls outside the universe; reads as this many zeros
    OutOfRange(usize),
}

impl<'a> FixtureChannels<'a> {
    /// Number of channel values
    pub fn len(&self) -> usize {
        match self {
            FixtureChannels::Live(values) => values.len(),
            FixtureChannels::OutOfRange(count) => *count,
        }
    }

    /// Whether the fixture has no channels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`, relative to the fixture's start address
    pub fn get(&self, index: usize) -> Option<u8> {
        match self {
            FixtureChannels::Live(values) => values.get(index).copied(),
            FixtureChannels::OutOfRange(count) => (index < *count).then_some(0),
        }
    }

    /// Iterate over the channel values
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        let (values, zeros): (&'a [u8], usize) = match *self {
            FixtureChannels::Live(values) => (values, 0),
            FixtureChannels::OutOfRange(count) => (&[], count),
        };
        values
            .iter()
            .copied()
            .chain(core::iter::repeat(0).take(zeros))
    }
}

/// Slice `count` channels starting at `address` out of `slots`
///
/// Slot 0 carries the start code, so channel `n` is slot `n` and address 0
/// never names a channel. Any range that does not fit reads as zeros.
pub(crate) fn fixture_window(slots: &[u8], address: u16, count: u16) -> FixtureChannels<'_> {
    let count = count as usize;
    if address == 0 {
        return FixtureChannels::OutOfRange(count);
    }
    let start = address as usize;
    match slots.get(start..start + count) {
        Some(values) => FixtureChannels::Live(values),
        None => FixtureChannels::OutOfRange(count),
    }
}

/// Turns serial chunks into channel data and a liveness signal
#[derive(Debug, Clone)]
pub struct PacketReceiver {
    universe: ChannelUniverse,
    /// Time of the last accepted chunk (ms), None until the first one
    last_update_ms: Option<u32>,
    packet_count: u32,
}

impl Default for PacketReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketReceiver {
    /// Create a receiver with a zeroed universe and no packets seen
    pub const fn new() -> Self {
        Self {
            universe: ChannelUniverse::new(),
            last_update_ms: None,
            packet_count: 0,
        }
    }

    /// Feed one serial chunk
    ///
    /// Returns true when the chunk was long enough to be accepted.
    pub fn ingest(&mut self, bytes: &[u8], now_ms: u32) -> bool {
        if bytes.len() < MIN_FRAME_LEN {
            return false;
        }
        self.universe.overwrite_leading(bytes);
        self.last_update_ms = Some(now_ms);
        self.packet_count = self.packet_count.wrapping_add(1);
        true
    }

    /// Channel values for a fixture
    pub fn channels_for(&self, fixture: &Fixture) -> FixtureChannels<'_> {
        fixture_window(self.universe.as_slice(), fixture.address, fixture.channels)
    }

    /// Whether a frame was accepted within the last [`LIVENESS_TIMEOUT_MS`]
    pub fn is_live(&self, now_ms: u32) -> bool {
        match self.last_update_ms {
            Some(last) => now_ms.wrapping_sub(last) < LIVENESS_TIMEOUT_MS,
            None => false,
        }
    }

    /// Number of accepted chunks
    pub fn packet_count(&self) -> u32 {
        self.packet_count
    }

    /// Time of the last accepted chunk
    pub fn last_update_ms(&self) -> Option<u32> {
        self.last_update_ms
    }

    /// The underlying universe
    pub fn universe(&self) -> &ChannelUniverse {
        &self.universe
    }
}
