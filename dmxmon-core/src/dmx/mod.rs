//! DMX512 channel data
//!
//! The receiver turns raw serial chunks into a channel universe and
//! derives link liveness from the time of the last accepted chunk.

pub mod receiver;
pub mod universe;

pub use receiver::{FixtureChannels, PacketReceiver, LIVENESS_TIMEOUT_MS, MIN_FRAME_LEN};
pub use universe::{ChannelUniverse, DMX_CHANNEL_COUNT, DMX_UNIVERSE_SIZE};
