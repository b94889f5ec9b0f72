//! Compiled-in monitor configuration
//!
//! Generated from monitor.toml by build.rs, which has already checked
//! every fixture range against the universe.

use dmxmon_core::config::Fixture;

include!(concat!(env!("OUT_DIR"), "/monitor_config.rs"));
