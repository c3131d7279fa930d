//! Per-tick fan-out invoked at exactly 100 kHz.
//!
//! Grounded on `isr.c`'s `isr_function`: advance the four tick-driven state
//! machines in a fixed order, then sample and enqueue one ADC value. The
//! dispatcher owns this ordering contract; nothing else may call these
//! components' `tick` methods directly.

use crate::core::LaserTagCore;
use crate::platform::{AdcSource, DigitalInput, DigitalOutput, SoundSink};

/// Advance every ISR-owned component by one tick and enqueue one fresh ADC
/// sample, in the order `isr.c` establishes: lockout, hit-LED, trigger,
/// transmitter, sound, then the sample push.
pub fn dispatch<Aux, Button, TxPin, LedPin, Adc, Sound, const N: usize>(
    core: &mut LaserTagCore<Aux, Button, TxPin, LedPin, N>,
    adc: &mut Adc,
    sound: &mut Sound,
) where
    Aux: DigitalInput,
    Button: DigitalInput,
    TxPin: DigitalOutput,
    LedPin: DigitalOutput,
    Adc: AdcSource,
    Sound: SoundSink,
{
    core.lockout_timer.tick();
    core.hit_led_timer.tick();
    if core.trigger.tick() {
        core.transmitter.run();
    }
    core.transmitter.tick();
    sound.tick();
    core.adc_ring.push(adc.sample());
}
