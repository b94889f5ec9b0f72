//! Configuration types
//!
//! Board-agnostic descriptors for the compiled-in monitor configuration.

pub mod fixture;

pub use fixture::*;
