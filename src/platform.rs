//! Hardware-facing seams the core consumes but never implements.
//!
//! Section 6's "required platform primitives" live behind these traits so
//! the rest of the crate stays `no_std` and hardware-agnostic; a concrete
//! badge firmware supplies the impls (MMIO pin/ADC drivers, audio mixer),
//! none of which are this crate's concern.

/// A synchronous source of one 12-bit ADC sample per call.
pub trait AdcSource {
    /// Read one raw sample in `0..=4095`.
    fn sample(&mut self) -> u16;
}

/// A single digital output pin (transmitter carrier, hit-LED indicator).
pub trait DigitalOutput {
    fn set(&mut self, high: bool);
}

/// A single digital input pin (trigger button or auxiliary gun input).
pub trait DigitalInput {
    fn is_active(&mut self) -> bool;
}

/// The "audio tick" `isr.c` dispatches every cycle; sound generation itself
/// is out of scope, but the ISR still owns calling into it once per tick.
pub trait SoundSink {
    fn tick(&mut self);
}

/// Run `f` with interrupts masked, matching the single load/store critical
/// section Section 4.1/4.3/5 call for around the ring buffer's consumer-side
/// pop. Built on `critical-section` instead of a hand-rolled primitive so it
/// gets a real Cortex-M backend in firmware and a `std`-mutex backend in
/// host tests for free.
pub fn interrupt_free<R>(f: impl FnOnce() -> R) -> R {
    critical_section::with(|_| f())
}
