//! Square-wave carrier generator state machine.
//!
//! Grounded on `transmitter.c`: a four-state machine (`init`, `off`, `high`,
//! `low`) ticked at 100 kHz, driving one output pin at a 50% duty cycle
//! whose half-period comes from [`crate::config::FREQUENCY_TICK_TABLE`].

use crate::config::{
    FREQUENCY_TICK_TABLE, TRANSMITTER_PULSE_DURATION_TICKS,
};
use crate::platform::DigitalOutput;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Init,
    Off,
    High,
    Low,
}

/// The transmitter state machine. Generic over the output pin so it stays
/// hardware-agnostic; a host test supplies a fake [`DigitalOutput`].
pub struct Transmitter<P> {
    state: State,
    pin: P,
    half_period_counter: u32,
    pulse_duration_counter: u32,
    frequency_number: usize,
    start_requested: bool,
    continuous_mode: bool,
}

impl<P: DigitalOutput> Transmitter<P> {
    /// Construct a transmitter driving `pin`, starting in `init`.
    pub fn new(pin: P) -> Self {
        Self {
            state: State::Init,
            pin,
            half_period_counter: 0,
            pulse_duration_counter: 0,
            frequency_number: 0,
            start_requested: false,
            continuous_mode: false,
        }
    }

    /// Request a start. Takes effect the next time [`Self::tick`] observes
    /// the `off` state.
    pub fn run(&mut self) {
        self.start_requested = true;
    }

    /// True while actively driving a carrier, or while a start is pending.
    pub fn running(&self) -> bool {
        matches!(self.state, State::High | State::Low) || self.start_requested
    }

    /// Select one of the ten carrier frequencies. Latched immediately in
    /// continuous mode or while stopped (`init`/`off`); ignored mid-pulse in
    /// non-continuous mode, where the frequency used for a pulse is fixed at
    /// the moment the pulse starts. An out-of-range index is silently
    /// ignored (Section 7: "implementations should validate indices at the
    /// API boundary and silently clamp or ignore updates outside [0, 9]").
    pub fn set_frequency_number(&mut self, frequency_number: usize) {
        if frequency_number >= FREQUENCY_TICK_TABLE.len() {
            return;
        }
        if self.continuous_mode || matches!(self.state, State::Init | State::Off) {
            self.frequency_number = frequency_number;
        }
    }

    pub fn frequency_number(&self) -> usize {
        self.frequency_number
    }

    /// Toggle continuous mode. While off, a single [`Self::run`] call
    /// produces exactly one 200 ms pulse; while on, the carrier runs
    /// indefinitely and the frequency register may be updated live.
    pub fn set_continuous_mode(&mut self, continuous: bool) {
        self.continuous_mode = continuous;
    }

    /// Advance the state machine by one 100 kHz tick.
    pub fn tick(&mut self) {
        let half_period = FREQUENCY_TICK_TABLE[self.frequency_number] as u32 / 2;

        // State updates.
        match self.state {
            State::Init => {
                self.state = State::Off;
                self.pin.set(false);
            }
            State::Off => {
                if self.start_requested {
                    self.state = State::High;
                    self.start_requested = false;
                    self.half_period_counter = 0;
                    self.pulse_duration_counter = 0;
                    self.pin.set(true);
                }
            }
            State::High => {
                if self.pulse_duration_counter > TRANSMITTER_PULSE_DURATION_TICKS
                    && !self.continuous_mode
                {
                    self.state = State::Off;
                    self.pin.set(false);
                } else if self.half_period_counter >= half_period {
                    self.half_period_counter = 0;
                    self.state = State::Low;
                    self.pin.set(false);
                }
            }
            State::Low => {
                if self.pulse_duration_counter > TRANSMITTER_PULSE_DURATION_TICKS
                    && !self.continuous_mode
                {
                    self.state = State::Off;
                } else if self.half_period_counter >= half_period {
                    self.half_period_counter = 0;
                    self.state = State::High;
                    self.pin.set(true);
                }
            }
        }

        // State actions.
        match self.state {
            State::Init | State::Off => {}
            State::High | State::Low => {
                self.half_period_counter += 1;
                self.pulse_duration_counter += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePin {
        high: bool,
    }

    impl DigitalOutput for FakePin {
        fn set(&mut self, high: bool) {
            self.high = high;
        }
    }

    #[test]
    fn starts_off_after_one_tick() {
        let mut tx = Transmitter::new(FakePin::default());
        assert!(!tx.running());
        tx.tick(); // init -> off
        assert!(!tx.running());
    }

    #[test]
    fn run_drives_exactly_one_pulse_of_the_expected_length() {
        let mut tx = Transmitter::new(FakePin::default());
        tx.tick(); // init -> off
        tx.set_frequency_number(0); // half-period table[0] = 68
        tx.run();
        assert!(tx.running());

        let mut ticks = 0;
        while tx.running() && ticks < 30_000 {
            tx.tick();
            ticks += 1;
        }
        // The source's strict `>` comparison against an un-reset counter
        // that increments once per tick means the pulse actually runs a
        // couple of ticks past the nominal duration; assert it is in that
        // neighborhood rather than pinning an exact fencepost.
        assert!(
            ticks >= TRANSMITTER_PULSE_DURATION_TICKS as usize
                && ticks <= TRANSMITTER_PULSE_DURATION_TICKS as usize + 5,
            "ticks = {ticks}"
        );
        assert!(!tx.pin.high);
    }

    #[test]
    fn out_of_range_frequency_is_silently_ignored() {
        let mut tx = Transmitter::new(FakePin::default());
        tx.tick(); // init -> off
        tx.set_frequency_number(3);
        tx.set_frequency_number(10); // out of range; must not replace 3
        assert_eq!(tx.frequency_number(), 3);
    }

    #[test]
    fn frequency_is_latched_during_a_noncontinuous_pulse() {
        let mut tx = Transmitter::new(FakePin::default());
        tx.tick(); // init -> off
        tx.set_frequency_number(2);
        tx.run();
        tx.tick(); // off -> high, latches frequency 2
        tx.set_frequency_number(5); // ignored mid-pulse
        assert_eq!(tx.frequency_number(), 2);
    }

    #[test]
    fn continuous_mode_never_returns_to_off_and_allows_live_frequency_changes() {
        let mut tx = Transmitter::new(FakePin::default());
        tx.tick(); // init -> off
        tx.set_continuous_mode(true);
        tx.set_frequency_number(0);
        tx.run();
        for _ in 0..(TRANSMITTER_PULSE_DURATION_TICKS as usize * 2) {
            tx.tick();
            assert!(tx.running());
        }
        tx.set_frequency_number(3); // live update allowed in continuous mode
        assert_eq!(tx.frequency_number(), 3);
    }
}
