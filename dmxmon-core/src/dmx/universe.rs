//! Channel universe buffer

/// Start code slot plus 512 channel slots
pub const DMX_UNIVERSE_SIZE: usize = 513;

/// Number of addressable DMX channels (1..=512)
pub const DMX_CHANNEL_COUNT: u16 = 512;

/// Most recently observed value of every slot in one DMX universe
///
/// Index 0 holds the start code slot and is never read by fixtures.
/// Channel `n` lives at index `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelUniverse {
    slots: [u8; DMX_UNIVERSE_SIZE],
}

impl Default for ChannelUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelUniverse {
    /// Create a universe with every slot at zero
    pub const fn new() -> Self {
        Self {
            slots: [0; DMX_UNIVERSE_SIZE],
        }
    }

    /// Overwrite the leading slots with `data`
    ///
    /// Bytes past the end of the universe are dropped. Returns the number
    /// of slots written.
    pub fn overwrite_leading(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(DMX_UNIVERSE_SIZE);
        self.slots[..n].copy_from_slice(&data[..n]);
        n
    }

    /// All slots including the start code slot
    pub fn as_slice(&self) -> &[u8] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let u = ChannelUniverse::new();
        assert_eq!(u.as_slice().len(), DMX_UNIVERSE_SIZE);
        assert!(u.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_overwrite_keeps_tail() {
        let mut u = ChannelUniverse::new();
        u.overwrite_leading(&[7; 40]);
        assert_eq!(u.overwrite_leading(&[1, 2, 3]), 3);
        assert_eq!(&u.as_slice()[..5], &[1, 2, 3, 7, 7]);
        assert_eq!(u.as_slice()[39], 7);
        assert_eq!(u.as_slice()[40], 0);
    }

    #[test]
    fn test_overwrite_truncates_oversized() {
        let mut u = ChannelUniverse::new();
        let data = [9u8; DMX_UNIVERSE_SIZE + 20];
        assert_eq!(u.overwrite_leading(&data), DMX_UNIVERSE_SIZE);
        assert_eq!(u.as_slice().len(), DMX_UNIVERSE_SIZE);
    }
}
