//! Embassy async tasks

pub mod monitor;

pub use monitor::{monitor_task, play_pattern};
