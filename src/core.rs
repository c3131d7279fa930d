//! Aggregates every stateful component into one badge instance.
//!
//! The ISR dispatcher ([`crate::isr::dispatch`]) and the foreground detector
//! loop ([`crate::detector::run`]) are the only two call sites that ever
//! need more than one field live at once, and per Section 5's sole-writer
//! rule they never run at the same instant. An earlier sketch of this module
//! handed each caller a disjoint `IsrOwned`/`ForegroundOwned` half returned
//! from a `split()` call, but that doesn't actually fit: the detector has to
//! start the lockout and hit-LED timers on a hit, and the trigger has to
//! kick the transmitter, both of which are legitimate single-field writes
//! across the boundary in the original firmware too. So `LaserTagCore` stays
//! one aggregate, and each caller destructures exactly the fields it needs.

use crate::config::ADC_RING_CAPACITY;
use crate::detector::HitDetector;
use crate::filter::FilterBank;
use crate::platform::{DigitalInput, DigitalOutput};
use crate::ring_buffer::AdcRingBuffer;
use crate::timers::{HitLedTimer, LockoutTimer};
use crate::transmitter::Transmitter;
use crate::trigger::Trigger;

/// One badge's full signal-processing and timing core, generic over the
/// concrete pin/input types the platform layer supplies.
pub struct LaserTagCore<Aux, Button, TxPin, LedPin, const N: usize = ADC_RING_CAPACITY> {
    // Ticked once per 100 kHz interrupt, in this order, by `isr::dispatch`.
    pub lockout_timer: LockoutTimer,
    pub hit_led_timer: HitLedTimer<LedPin>,
    pub trigger: Trigger<Aux, Button>,
    pub transmitter: Transmitter<TxPin>,

    // Drained and advanced by the foreground `detector::run` loop.
    pub filter_bank: FilterBank,
    pub detector: HitDetector,

    /// The single producer (ISR push)/consumer (foreground pop) primitive
    /// shared across the boundary; see `isr.c`'s `adcBuffer` and
    /// Section 9's design notes on single-producer/single-consumer discipline.
    pub adc_ring: AdcRingBuffer<N>,
}

impl<Aux, Button, TxPin, LedPin, const N: usize> LaserTagCore<Aux, Button, TxPin, LedPin, N>
where
    Aux: DigitalInput,
    Button: DigitalInput,
    TxPin: DigitalOutput,
    LedPin: DigitalOutput,
{
    /// Assemble a fresh core from its input/output peripherals and the
    /// per-channel ignore mask handed to the hit detector.
    pub fn new(
        aux: Aux,
        button: Button,
        transmitter_pin: TxPin,
        hit_led_pin: LedPin,
        ignore_mask: [bool; crate::config::CHANNEL_COUNT],
    ) -> Self {
        let mut hit_led_timer = HitLedTimer::new(hit_led_pin);
        // `detector.c`'s detector_init() unconditionally calls
        // hitLedTimer_enable(); preserve that coupling here so a real hit
        // can actually start the indicator.
        hit_led_timer.enable();
        Self {
            lockout_timer: LockoutTimer::new(),
            hit_led_timer,
            trigger: Trigger::new(aux, button),
            transmitter: Transmitter::new(transmitter_pin),
            filter_bank: FilterBank::new(),
            detector: HitDetector::new(ignore_mask),
            adc_ring: AdcRingBuffer::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHANNEL_COUNT;
    use crate::platform::AdcSource;

    #[derive(Default)]
    struct NullPin;
    impl DigitalOutput for NullPin {
        fn set(&mut self, _high: bool) {}
    }

    struct FixedInput(bool);
    impl DigitalInput for FixedInput {
        fn is_active(&mut self) -> bool {
            self.0
        }
    }

    struct MidScaleAdc;
    impl AdcSource for MidScaleAdc {
        fn sample(&mut self) -> u16 {
            2047
        }
    }

    struct NullSound;
    impl crate::platform::SoundSink for NullSound {
        fn tick(&mut self) {}
    }

    #[test]
    fn new_core_starts_with_nothing_running_or_queued() {
        let core: LaserTagCore<FixedInput, FixedInput, NullPin, NullPin, 64> = LaserTagCore::new(
            FixedInput(false),
            FixedInput(false),
            NullPin,
            NullPin,
            [false; CHANNEL_COUNT],
        );
        assert!(!core.lockout_timer.running());
        assert!(!core.hit_led_timer.running());
        assert!(!core.transmitter.running());
        assert_eq!(core.adc_ring.count(), 0);
    }

    #[test]
    fn new_core_enables_the_hit_led_timer_so_start_actually_runs_it() {
        // detector.c's detector_init() unconditionally calls
        // hitLedTimer_enable(); LaserTagCore::new must preserve that, or a
        // real hit's hit_led_timer.start() would be a silent no-op.
        let mut core: LaserTagCore<FixedInput, FixedInput, NullPin, NullPin, 64> = LaserTagCore::new(
            FixedInput(false),
            FixedInput(false),
            NullPin,
            NullPin,
            [false; CHANNEL_COUNT],
        );
        core.hit_led_timer.start();
        assert!(core.hit_led_timer.running());
    }

    #[test]
    fn isr_tick_pushes_one_sample_into_the_ring() {
        let mut core: LaserTagCore<FixedInput, FixedInput, NullPin, NullPin, 64> = LaserTagCore::new(
            FixedInput(false),
            FixedInput(false),
            NullPin,
            NullPin,
            [false; CHANNEL_COUNT],
        );
        let mut adc = MidScaleAdc;
        let mut sound = NullSound;
        crate::isr::dispatch(&mut core, &mut adc, &mut sound);
        assert_eq!(core.adc_ring.count(), 1);
    }
}
