//! Numeric core for the laser-tag badge signal path: a fixed-capacity
//! circular buffer, a decimating FIR stage, a 10-channel IIR bank and
//! incremental power estimation, plus the coefficient tables that drive
//! them.
//!
//! This crate has no knowledge of interrupts, pins or timing; it is pure
//! math over `f64` samples, consumed by `lasertag-core`'s filter bank and
//! hit detector.
#![cfg_attr(not(test), no_std)]

pub mod coefficients;
pub mod fir;
pub mod iir;
pub mod power;
pub mod queue;

pub use fir::DecimatingFir;
pub use iir::IirBank;
pub use power::PowerEstimator;
pub use queue::CircularBuffer;

/// Raw-sample rate the pipeline is designed for (100 kHz ticks).
pub const SAMPLE_FREQUENCY_HZ: u32 = 100_000;
/// New-inputs-per-FIR-output decimation factor.
pub const DECIMATION_FACTOR: u32 = 10;
/// Carrier tick-period table (100 kHz ticks per full cycle), one per
/// channel; shared with the transmitter so both sides agree on frequency.
pub const FREQUENCY_TICK_TABLE: [u16; iir::CHANNEL_COUNT] =
    [68, 58, 50, 44, 38, 34, 30, 28, 26, 24];
