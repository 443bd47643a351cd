//! Utility Module
//!
//! This module provides the small building blocks the engine leans on:
//!
//! - [`math`]: scalar interpolation helpers (`lerp`, `inv_lerp`, `remap`)
//! - [`time`]: the [`Clock`](time::Clock) abstraction and its system/manual
//!   implementations
//!
//! # Clocks
//!
//! Playback never reads wall-clock time directly; it goes through a
//! [`Clock`](time::Clock) so hosts (and tests) can substitute their own
//! time source.
//!
//! ```rust,ignore
//! use cadence::utils::time::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! clock.advance(16.7);
//! assert_eq!(clock.now_ms(), 16.7);
//! ```

pub mod math;
pub mod time;
