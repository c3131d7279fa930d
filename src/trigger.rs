//! Press/release debouncer for the gun trigger, driving shot accounting
//! and (indirectly) the transmitter.
//!
//! Grounded on `trigger.c`. The logical trigger signal is the OR of an
//! auxiliary input pin (the physical gun) and a button; if the auxiliary
//! pin reads active at construction time the gun is assumed disconnected
//! and permanently ignored (Section 4.5, Section 7 "Hardware absent").
//!
//! `transmitter_run()` is a direct function call in the original, made from
//! inside `trigger_tick()` itself so the transmitter sees the new pulse
//! request within the same ISR cycle, ahead of its own tick. Rather than
//! hand the trigger a reference to the transmitter, [`Trigger::tick`]
//! reports whether a shot was just fired; `isr::dispatch` forwards that
//! into `Transmitter::run` between the two ticks, preserving the ordering
//! without coupling the two state machines to each other.

use crate::config::{DEBOUNCE_EXPIRE_TICKS, STARTING_SHOT_COUNT};
use crate::platform::DigitalInput;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Init,
    NotPressed,
    DebouncePress,
    Pressed,
    DebounceRelease,
}

pub struct Trigger<Aux, Button> {
    aux: Aux,
    button: Button,
    ignore_aux: bool,
    enabled: bool,
    state: State,
    counter: u32,
    shot_fired: bool,
    shots_remaining: u16,
}

impl<Aux: DigitalInput, Button: DigitalInput> Trigger<Aux, Button> {
    /// Construct and latch the auxiliary-input-disconnected check: if the
    /// combined trigger signal already reads active, the auxiliary input is
    /// assumed unplugged and ignored for the lifetime of this object.
    pub fn new(aux: Aux, button: Button) -> Self {
        let mut trigger = Self {
            aux,
            button,
            ignore_aux: false,
            enabled: false,
            state: State::Init,
            counter: 0,
            shot_fired: false,
            shots_remaining: STARTING_SHOT_COUNT,
        };
        if trigger.is_pressed() {
            trigger.ignore_aux = true;
        }
        trigger
    }

    fn is_pressed(&mut self) -> bool {
        (!self.ignore_aux && self.aux.is_active()) || self.button.is_active()
    }

    /// Enable the state machine; trigger presses are ignored until this is
    /// called.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the state machine; it snaps back to `init` on the next tick.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn remaining_shot_count(&self) -> u16 {
        self.shots_remaining
    }

    pub fn set_remaining_shot_count(&mut self, count: u16) {
        self.shots_remaining = count;
    }

    /// True only while in the `pressed` state (and its `debounce_release`
    /// prefix before the release debounce confirms).
    pub fn shot_fired(&self) -> bool {
        self.shot_fired
    }

    /// Advance the state machine by one 100 kHz tick. Returns `true` on the
    /// tick a debounced press is confirmed, signaling the caller to start
    /// the transmitter.
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            self.state = State::Init;
        }

        let mut request_transmitter_run = false;
        let pressed = self.is_pressed();

        // State updates.
        match self.state {
            State::Init => {
                self.shot_fired = false;
                if self.enabled {
                    self.state = State::NotPressed;
                }
            }
            State::NotPressed => {
                if pressed && self.shots_remaining > 0 {
                    self.counter = 0;
                    self.state = State::DebouncePress;
                }
            }
            State::DebouncePress => {
                if !pressed {
                    self.state = State::NotPressed;
                } else if self.counter > DEBOUNCE_EXPIRE_TICKS {
                    self.state = State::Pressed;
                    self.shot_fired = true;
                    request_transmitter_run = true;
                    log::debug!("trigger press debounced, firing");
                }
            }
            State::Pressed => {
                if !pressed {
                    self.state = State::DebounceRelease;
                    self.counter = 0;
                }
            }
            State::DebounceRelease => {
                if pressed {
                    self.state = State::Pressed;
                } else if self.counter > DEBOUNCE_EXPIRE_TICKS {
                    self.state = State::NotPressed;
                    self.shot_fired = false;
                    self.shots_remaining -= 1;
                }
            }
        }

        // State actions.
        match self.state {
            State::Init => self.counter = 0,
            State::NotPressed | State::Pressed => {}
            State::DebouncePress | State::DebounceRelease => self.counter += 1,
        }

        request_transmitter_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedInput(bool);

    impl DigitalInput for FixedInput {
        fn is_active(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn aux_input_active_at_construction_is_permanently_ignored() {
        let mut trigger = Trigger::new(FixedInput(true), FixedInput(false));
        trigger.enable();
        for _ in 0..(DEBOUNCE_EXPIRE_TICKS as usize + 10) {
            trigger.tick();
        }
        // Aux reads active the whole time, but it was latched as
        // disconnected, and the button never goes active, so no shot fires.
        assert!(!trigger.shot_fired());
    }

    #[test]
    fn short_press_never_reaches_pressed_state() {
        let mut trigger = Trigger::new(FixedInput(false), FixedInput(false));
        trigger.enable();
        trigger.button.0 = true;
        for _ in 0..(DEBOUNCE_EXPIRE_TICKS as usize - 1) {
            trigger.tick();
        }
        trigger.button.0 = false;
        for _ in 0..10 {
            trigger.tick();
        }
        assert!(!trigger.shot_fired());
    }

    #[test]
    fn sustained_press_fires_exactly_once_and_decrements_shots() {
        let mut trigger = Trigger::new(FixedInput(false), FixedInput(false));
        trigger.enable();
        trigger.set_remaining_shot_count(10);
        trigger.button.0 = true;

        let mut fired = 0;
        for _ in 0..(DEBOUNCE_EXPIRE_TICKS as usize + 2) {
            if trigger.tick() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(trigger.shot_fired());
        assert_eq!(trigger.remaining_shot_count(), 10);

        trigger.button.0 = false;
        for _ in 0..(DEBOUNCE_EXPIRE_TICKS as usize + 2) {
            trigger.tick();
        }
        assert!(!trigger.shot_fired());
        assert_eq!(trigger.remaining_shot_count(), 9);
    }

    #[test]
    fn zero_remaining_shots_blocks_new_presses() {
        let mut trigger = Trigger::new(FixedInput(false), FixedInput(false));
        trigger.enable();
        trigger.set_remaining_shot_count(0);
        trigger.button.0 = true;
        for _ in 0..(DEBOUNCE_EXPIRE_TICKS as usize + 10) {
            trigger.tick();
        }
        assert!(!trigger.shot_fired());
    }
}
