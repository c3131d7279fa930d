//! Hit-detection decision rule.
//!
//! Grounded on `detector.c`: drain the ADC ring buffer, feed the filter
//! bank one decimation epoch at a time, and after every epoch run the
//! insertion-sort-by-power decision rule gated on the lockout and hit-LED
//! timers. `detector.c`'s insertion sort walks an unsigned loop index down
//! from `i - 1` with a `j >= 0` guard that underflows once `j` wraps past
//! zero on an unsigned type; a stable descending [`slice::sort_by`] gives
//! the same observable ordering (ties keep the lower original index, since
//! the sort is stable and the input order is `0..CHANNEL_COUNT`) without
//! the bug.

use core::cmp::Ordering;

use crate::config::{CHANNEL_COUNT, DEFAULT_FUDGE_FACTOR, FIR_DECIMATION_FACTOR, MEDIAN_RANK};
use crate::core::LaserTagCore;
use crate::filter::FilterBank;
use crate::platform::{interrupt_free, DigitalOutput};
use crate::ring_buffer::AdcRingBuffer;
use crate::timers::{HitLedTimer, LockoutTimer};

/// 12-bit ADC full scale.
const ADC_MAX_VALUE: f64 = 4095.0;

/// Runs the decision rule over the filter bank's power estimates.
pub struct HitDetector {
    ignore_mask: [bool; CHANNEL_COUNT],
    ignore_all: bool,
    ignore_self: bool,
    hit_detected: bool,
    last_hit_channel: usize,
    hit_counts: [u32; CHANNEL_COUNT],
    fudge_factor: u32,
    invocation_count: u8,
    force_compute_power: bool,
    test_powers: Option<[f64; CHANNEL_COUNT]>,
}

impl HitDetector {
    /// Construct a detector with the given per-channel ignore mask.
    /// `ignoreSelf` starts `true`, matching `detector_init`.
    pub fn new(ignore_mask: [bool; CHANNEL_COUNT]) -> Self {
        Self {
            ignore_mask,
            ignore_all: false,
            ignore_self: true,
            hit_detected: false,
            last_hit_channel: 0,
            hit_counts: [0; CHANNEL_COUNT],
            fudge_factor: DEFAULT_FUDGE_FACTOR,
            invocation_count: 0,
            force_compute_power: true,
            test_powers: None,
        }
    }

    pub fn hit_detected(&self) -> bool {
        self.hit_detected
    }

    pub fn last_hit_channel(&self) -> usize {
        self.last_hit_channel
    }

    pub fn clear_hit(&mut self) {
        self.hit_detected = false;
    }

    pub fn ignore_all_hits(&mut self, flag: bool) {
        self.ignore_all = flag;
    }

    /// Toggle whether hits on a single channel are ignored, without
    /// replacing the whole mask passed to [`Self::new`]. Game-mode loops
    /// use this to blacklist or re-admit a specific opposing frequency at
    /// runtime; `detector.c` itself only ever replaces the whole mask via
    /// `detector_init`, but a validated single-index setter is the natural
    /// Rust-idiomatic extension once the mask is a fixed-size field rather
    /// than a pointer the caller re-supplies wholesale.
    pub fn set_channel_ignored(
        &mut self,
        channel: usize,
        ignored: bool,
    ) -> Result<(), crate::error::ChannelIndexError> {
        if channel >= CHANNEL_COUNT {
            return Err(crate::error::ChannelIndexError { index: channel });
        }
        self.ignore_mask[channel] = ignored;
        Ok(())
    }

    pub fn set_ignore_self(&mut self, flag: bool) {
        self.ignore_self = flag;
    }

    pub fn hit_counts(&self) -> [u32; CHANNEL_COUNT] {
        self.hit_counts
    }

    pub fn set_fudge_factor(&mut self, factor: u32) {
        self.fudge_factor = factor;
    }

    pub fn fudge_factor(&self) -> u32 {
        self.fudge_factor
    }

    /// Inject fixed power values in place of the filter bank's, for
    /// deterministic decision-rule testing (`detector.c`'s `testPowerData`
    /// path). `None` returns to reading the filter bank normally.
    pub fn set_test_powers(&mut self, powers: Option<[f64; CHANNEL_COUNT]>) {
        self.test_powers = powers;
    }

    /// Scale a raw 12-bit ADC reading into the FIR input's `(-1, 1]` range.
    pub fn scaled_adc_value(raw: u16) -> f64 {
        2.0 * f64::from(raw) / ADC_MAX_VALUE - 1.0
    }

    /// Drain every sample the ISR has queued so far, running the filter
    /// bank and (on FIR epoch boundaries) the decision rule. See
    /// [`crate::detector::run`] for the version wired to a
    /// [`LaserTagCore`].
    #[allow(clippy::too_many_arguments)]
    pub fn run<const N: usize, LedPin: DigitalOutput>(
        &mut self,
        filter: &mut FilterBank,
        adc_ring: &mut AdcRingBuffer<N>,
        lockout_timer: &mut LockoutTimer,
        hit_led_timer: &mut HitLedTimer<LedPin>,
        my_frequency: usize,
        interrupts_currently_enabled: bool,
    ) {
        let element_count = adc_ring.count();
        for _ in 0..element_count {
            let raw = if interrupts_currently_enabled {
                interrupt_free(|| adc_ring.pop())
            } else {
                adc_ring.pop()
            };

            let scaled = Self::scaled_adc_value(raw);
            filter.add_input(scaled);
            self.invocation_count += 1;

            if self.invocation_count as usize == FIR_DECIMATION_FACTOR as usize {
                self.invocation_count = 0;
                filter.run_epoch(self.force_compute_power);
                self.force_compute_power = false;

                if lockout_timer.running() || hit_led_timer.running() || self.hit_detected {
                    log::trace!("hit evaluation suppressed: lockout or hit-LED active, or a hit is already pending");
                } else {
                    self.evaluate(filter, lockout_timer, hit_led_timer, my_frequency);
                }
            }
        }
    }

    fn evaluate<LedPin: DigitalOutput>(
        &mut self,
        filter: &FilterBank,
        lockout_timer: &mut LockoutTimer,
        hit_led_timer: &mut HitLedTimer<LedPin>,
        my_frequency: usize,
    ) {
        let powers = self.test_powers.unwrap_or_else(|| filter.current_power_values());

        let mut indices: [usize; CHANNEL_COUNT] = core::array::from_fn(|i| i);
        indices.sort_by(|&a, &b| {
            powers[b].partial_cmp(&powers[a]).unwrap_or(Ordering::Equal)
        });

        let threshold = powers[indices[MEDIAN_RANK]] * f64::from(self.fudge_factor);
        let winner = indices[0];
        let max = powers[winner];

        let is_hit = max > threshold
            && !self.ignore_mask[winner]
            && !self.ignore_all
            && !(winner == my_frequency && self.ignore_self);

        if is_hit {
            self.last_hit_channel = winner;
            lockout_timer.start();
            hit_led_timer.start();
            self.hit_counts[winner] += 1;
            self.hit_detected = true;
            log::info!("hit declared on channel {winner}");
        }
    }
}

/// Run the detector against a [`LaserTagCore`]'s own filter bank, ADC ring
/// and timers, reading the transmitter's current frequency for the
/// self-ignore check. Splits `core` into disjoint field borrows rather than
/// routing through method calls, since the detector and the ISR dispatcher
/// are the only two callers that ever need more than one of these fields
/// live at once, and they never run at the same instant.
pub fn run<Aux, Button, TxPin, LedPin, const N: usize>(
    core: &mut LaserTagCore<Aux, Button, TxPin, LedPin, N>,
    interrupts_currently_enabled: bool,
) where
    TxPin: DigitalOutput,
    LedPin: DigitalOutput,
{
    let my_frequency = core.transmitter.frequency_number();
    let LaserTagCore {
        detector,
        filter_bank,
        adc_ring,
        lockout_timer,
        hit_led_timer,
        ..
    } = core;
    detector.run(
        filter_bank,
        adc_ring,
        lockout_timer,
        hit_led_timer,
        my_frequency,
        interrupts_currently_enabled,
    );
}
