//! Fixed-duration monostables that gate hit detection and drive the hit
//! indicator.
//!
//! Grounded on `lockoutTimer.c` (two states) and `hitLedTimer.c` (three
//! states, with an enable/disable latch layered on top).

use crate::config::{HIT_LED_TIMER_EXPIRE_TICKS, LOCKOUT_TIMER_EXPIRE_TICKS};
use crate::platform::DigitalOutput;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LockoutState {
    Init,
    Running,
}

/// Suppresses re-detection for half a second after a hit.
pub struct LockoutTimer {
    state: LockoutState,
    counter: u32,
}

impl Default for LockoutTimer {
    fn default() -> Self {
        Self {
            state: LockoutState::Init,
            counter: 0,
        }
    }
}

impl LockoutTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to `init`.
    pub fn init(&mut self) {
        *self = Self::default();
    }

    /// Start (or restart) the timer.
    pub fn start(&mut self) {
        self.counter = 0;
        self.state = LockoutState::Running;
    }

    pub fn running(&self) -> bool {
        self.state == LockoutState::Running
    }

    /// Advance by one 100 kHz tick.
    pub fn tick(&mut self) {
        if self.state == LockoutState::Running && self.counter >= LOCKOUT_TIMER_EXPIRE_TICKS {
            self.state = LockoutState::Init;
        }
        self.counter += 1;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HitLedState {
    Init,
    Running,
    Disabled,
}

/// Drives the gun's hit-indicator LED for half a second after a hit.
/// Inactive (frozen in `disabled`) until [`HitLedTimer::enable`] is called.
pub struct HitLedTimer<P> {
    pin: P,
    state: HitLedState,
    counter: u32,
    enabled: bool,
}

impl<P: DigitalOutput> HitLedTimer<P> {
    /// Construct a disabled timer driving `pin`; call [`Self::enable`]
    /// before starting it.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            state: HitLedState::Init,
            counter: 0,
            enabled: false,
        }
    }

    /// Allow the timer to run again; takes effect on the next [`Self::tick`]
    /// while currently `disabled`.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Force the timer to `disabled` immediately, interrupting any run in
    /// progress; it stays there until [`Self::enable`] is called.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.state = HitLedState::Disabled;
    }

    /// Start (or restart) the timer. No-op while disabled.
    pub fn start(&mut self) {
        if self.enabled {
            self.counter = 0;
            self.state = HitLedState::Running;
        }
    }

    pub fn running(&self) -> bool {
        self.state == HitLedState::Running
    }

    /// Advance by one 100 kHz tick.
    pub fn tick(&mut self) {
        // State updates.
        match self.state {
            HitLedState::Init => {}
            HitLedState::Running => {
                if self.counter >= HIT_LED_TIMER_EXPIRE_TICKS {
                    self.state = HitLedState::Init;
                }
            }
            HitLedState::Disabled => {
                if self.enabled {
                    self.state = HitLedState::Init;
                }
            }
        }

        // State actions.
        match self.state {
            HitLedState::Init => self.pin.set(false),
            HitLedState::Running => {
                self.pin.set(true);
                self.counter += 1;
            }
            HitLedState::Disabled => self.pin.set(false),
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
    fn lockout_runs_for_exactly_the_expire_duration() {
        let mut timer = LockoutTimer::new();
        timer.start();
        assert!(timer.running());
        for _ in 0..LOCKOUT_TIMER_EXPIRE_TICKS {
            timer.tick();
        }
        assert!(!timer.running());
    }

    #[test]
    fn lockout_init_stops_it_immediately() {
        let mut timer = LockoutTimer::new();
        timer.start();
        timer.init();
        assert!(!timer.running());
    }

    #[test]
    fn hit_led_ignores_start_while_disabled() {
        let mut timer = HitLedTimer::new(FakePin::default());
        timer.start();
        assert!(!timer.running());
    }

    #[test]
    fn hit_led_runs_after_enable_and_start() {
        let mut timer = HitLedTimer::new(FakePin::default());
        timer.enable();
        timer.start();
        assert!(timer.running());
        timer.tick();
        assert!(timer.pin.high);
        for _ in 0..HIT_LED_TIMER_EXPIRE_TICKS {
            timer.tick();
        }
        assert!(!timer.running());
        assert!(!timer.pin.high);
    }

    #[test]
    fn disabling_mid_run_forces_led_off() {
        let mut timer = HitLedTimer::new(FakePin::default());
        timer.enable();
        timer.start();
        timer.tick();
        timer.disable();
        timer.tick();
        assert!(!timer.running());
        assert!(!timer.pin.high);
    }
}
