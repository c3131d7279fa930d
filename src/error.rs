//! Error types for the laser-tag core.
//!
//! The core is designed to be infallible at steady state (bare-metal, no
//! recovery path for true hardware faults). The only fallible paths are
//! operations that take a caller-supplied, runtime-checked channel index
//! (e.g. [`crate::detector::HitDetector::set_channel_ignored`]); per-index
//! setters documented elsewhere as "silently clamp" stay infallible by
//! design.

use core::fmt;

/// A caller supplied a channel index, or a table meant to be indexed by
/// channel, that doesn't match [`crate::config::CHANNEL_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelIndexError {
    pub index: usize,
}

impl fmt::Display for ChannelIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "channel index {} out of range 0..{}",
            self.index,
            crate::config::CHANNEL_COUNT
        )
    }
}
