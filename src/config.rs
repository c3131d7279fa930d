//! Wire-visible constants shared by every module in this crate.
//!
//! Plays the same role as the teacher's `hardware::design_parameters`:
//! every tick count, table and pin assignment an implementer needs to stay
//! bit-compatible with the reference firmware lives here as a typed
//! `pub const`, not scattered through the state machines.

/// Periodic tick rate the ISR is driven at (100 kHz, 10 microsecond ticks).
pub const TICK_FREQUENCY_HZ: u32 = 100_000;

/// Number of player frequencies / IIR channels.
pub const CHANNEL_COUNT: usize = dsp::iir::CHANNEL_COUNT;

/// Half-period tick counts for each of the ten carrier frequencies, shared
/// by the transmitter and the IIR design.
pub const FREQUENCY_TICK_TABLE: [u16; CHANNEL_COUNT] = dsp::FREQUENCY_TICK_TABLE;

/// Lockout monostable duration (0.5 s at the 100 kHz tick rate).
pub const LOCKOUT_TIMER_EXPIRE_TICKS: u32 = 50_000;

/// Hit-LED monostable duration (0.5 s at the 100 kHz tick rate).
pub const HIT_LED_TIMER_EXPIRE_TICKS: u32 = 50_000;

/// Trigger debounce duration (50 ms at the 100 kHz tick rate).
pub const DEBOUNCE_EXPIRE_TICKS: u32 = 5_000;

/// Transmitter non-continuous-mode pulse duration (200 ms).
pub const TRANSMITTER_PULSE_DURATION_TICKS: u32 = 20_000;

/// Number of taps in the FIR low-pass kernel.
pub const FIR_TAP_COUNT: usize = dsp::fir::TAP_COUNT;

/// New raw samples the decimating FIR consumes per output.
pub const FIR_DECIMATION_FACTOR: u32 = dsp::DECIMATION_FACTOR;

/// Feed-forward (B) coefficient count per IIR channel.
pub const IIR_B_COEFFICIENT_COUNT: usize = dsp::iir::B_COEFFICIENT_COUNT;

/// Feedback (A) coefficient count per IIR channel.
pub const IIR_A_COEFFICIENT_COUNT: usize = dsp::iir::A_COEFFICIENT_COUNT;

/// Depth of the per-channel output history window used for power estimation.
pub const POWER_WINDOW_SIZE: usize = dsp::iir::OUTPUT_QUEUE_SIZE;

/// Capacity of the single-producer/single-consumer ADC ring buffer.
pub const ADC_RING_CAPACITY: usize = 20_001;

/// Default hit-detection threshold margin above the 5th-largest power.
pub const DEFAULT_FUDGE_FACTOR: u32 = 3_000;

/// Index (into the descending-sorted power array) used as the threshold
/// basis; the 5th-largest of ten, not a true statistical median.
pub const MEDIAN_RANK: usize = 4;

/// Starting shot count a fresh trigger is loaded with.
pub const STARTING_SHOT_COUNT: u16 = 10;

/// Transmitter output pin (JF-1 on the reference hardware).
pub const TRANSMITTER_OUTPUT_PIN: u8 = 13;

/// Hit-LED output pin (JF-3 on the reference hardware).
pub const HIT_LED_OUTPUT_PIN: u8 = 11;

/// Trigger auxiliary input pin (JF-2 on the reference hardware).
pub const TRIGGER_INPUT_PIN: u8 = 10;
