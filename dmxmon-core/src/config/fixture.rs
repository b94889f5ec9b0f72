//! Fixture descriptors
//!
//! A fixture occupies a contiguous block of DMX channels. The firmware
//! compiles its fixture table in from `monitor.toml`; the build script runs
//! [`validate_fixture`] on every entry so bad entries never reach the device.

use core::fmt;

use crate::dmx::DMX_CHANNEL_COUNT;

/// Maximum fixture name or type label length
pub const MAX_LABEL_LEN: usize = 24;

/// Maximum fixtures shown on screen
pub const MAX_FIXTURES: usize = 8;

/// Fixture validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixtureError {
    /// Start address outside 1..=512
    AddressOutOfRange(u16),
    /// Fixture declares zero channels
    NoChannels,
    /// Fixture name is empty
    EmptyName,
    /// Last channel would lie past channel 512
    RangeExceedsUniverse { address: u16, channels: u16 },
    /// Name or type label longer than [`MAX_LABEL_LEN`]
    LabelTooLong,
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::AddressOutOfRange(addr) => {
                write!(f, "start address {} outside 1-{}", addr, DMX_CHANNEL_COUNT)
            }
            FixtureError::NoChannels => write!(f, "fixture has no channels"),
            FixtureError::EmptyName => write!(f, "fixture name is empty"),
            FixtureError::RangeExceedsUniverse { address, channels } => write!(
                f,
                "channels {}-{} run past channel {}",
                address,
                *address as u32 + *channels as u32 - 1,
                DMX_CHANNEL_COUNT
            ),
            FixtureError::LabelTooLong => {
                write!(f, "name or type longer than {} characters", MAX_LABEL_LEN)
            }
        }
    }
}

/// A lighting fixture patched into the universe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fixture {
    /// Display name
    pub name: &'static str,
    /// First DMX channel (1-based)
    pub address: u16,
    /// Number of consecutive channels
    pub channels: u16,
    /// Fixture type label (e.g. "Moving Head")
    pub kind: &'static str,
}

impl Fixture {
    pub const fn new(name: &'static str, address: u16, channels: u16, kind: &'static str) -> Self {
        Self {
            name,
            address,
            channels,
            kind,
        }
    }

    /// Last DMX channel used by this fixture
    ///
    /// Computed in u32 so that misconfigured fixtures cannot overflow.
    pub const fn end_address(&self) -> u32 {
        (self.address as u32 + self.channels as u32).saturating_sub(1)
    }
}

/// Check a fixture entry fits the universe and its labels fit the screen
pub fn validate_fixture(
    name: &str,
    address: u16,
    channels: u16,
    kind: &str,
) -> Result<(), FixtureError> {
    validate_range(address, channels)?;
    if name.is_empty() {
        return Err(FixtureError::EmptyName);
    }
    if name.len() > MAX_LABEL_LEN || kind.len() > MAX_LABEL_LEN {
        return Err(FixtureError::LabelTooLong);
    }
    Ok(())
}

/// Check a channel block `address..address + channels` fits channels 1-512
pub fn validate_range(address: u16, channels: u16) -> Result<(), FixtureError> {
    if address == 0 || address > DMX_CHANNEL_COUNT {
        return Err(FixtureError::AddressOutOfRange(address));
    }
    if channels == 0 {
        return Err(FixtureError::NoChannels);
    }
    if address as u32 + channels as u32 - 1 > DMX_CHANNEL_COUNT as u32 {
        return Err(FixtureError::RangeExceedsUniverse { address, channels });
    }
    Ok(())
}

/// Bench rig patch: two 11-channel spots and two 5-channel RGB pars
#[cfg(test)]
pub(crate) const DEFAULT_FIXTURES: [Fixture; 4] = [
    Fixture::new("PicoSpot 1", 1, 11, "Moving Head"),
    Fixture::new("PicoSpot 2", 12, 11, "Moving Head"),
    Fixture::new("RGB LED 1", 23, 5, "Color Changer"),
    Fixture::new("RGB LED 2", 28, 5, "Color Changer"),
];
