//! The decimating FIR stage: a fixed 81-tap low-pass filter run once per
//! `DECIMATION` raw samples.

use crate::coefficients::FIR_COEFFICIENTS;
use crate::queue::CircularBuffer;

/// Number of taps in the FIR kernel.
pub const TAP_COUNT: usize = 81;

/// The decimating FIR filter. Holds the 81-sample delay line (`xQueue` in
/// the original); the kernel itself is the fixed, pre-computed
/// [`FIR_COEFFICIENTS`] table.
#[derive(Clone)]
pub struct DecimatingFir {
    x_queue: CircularBuffer<f64, TAP_COUNT>,
}

impl Default for DecimatingFir {
    fn default() -> Self {
        Self {
            x_queue: CircularBuffer::new(),
        }
    }
}

impl DecimatingFir {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one new (scaled) input sample onto the delay line. Called once
    /// per raw ADC tick, independent of decimation.
    pub fn add_input(&mut self, x: f64) {
        self.x_queue.overwrite_push(x);
    }

    /// Run the FIR convolution over the current delay line contents.
    ///
    /// Call exactly once per `DECIMATION` inputs; the delay line always
    /// holds the 81 most recent samples regardless of when this is called,
    /// but the filter bank's epoch discipline (Section 4.2's invariant)
    /// requires calling this only at decimation boundaries.
    pub fn compute(&self) -> f64 {
        let mut y = 0.0;
        for i in 0..TAP_COUNT {
            y += self.x_queue.read_element_at(TAP_COUNT - 1 - i) * FIR_COEFFICIENTS[i];
        }
        y
    }

    /// Read-only view of the coefficient table, for test harnesses.
    pub fn coefficients() -> &'static [f64; TAP_COUNT] {
        &FIR_COEFFICIENTS
    }

    /// Read-only view of the delay line, for test harnesses.
    pub fn delay_line(&self) -> &CircularBuffer<f64, TAP_COUNT> {
        &self.x_queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_table_has_81_taps() {
        assert_eq!(DecimatingFir::coefficients().len(), 81);
    }

    #[test]
    fn delay_line_drops_oldest_input() {
        let mut fir = DecimatingFir::new();
        for i in 0..TAP_COUNT {
            fir.add_input(i as f64);
        }
        assert_eq!(fir.delay_line().oldest(), 0.0);
        fir.add_input(1000.0);
        // The sample at index 0 (value 0.0) has now been dropped.
        assert_eq!(fir.delay_line().oldest(), 1.0);
        assert_eq!(fir.delay_line().newest(), 1000.0);
    }

    #[test]
    fn dc_input_is_passed_at_unity_gain() {
        // The coefficients are normalized to sum to 1.0, so a constant
        // input should settle to (approximately) that same constant.
        let mut fir = DecimatingFir::new();
        for _ in 0..TAP_COUNT {
            fir.add_input(0.5);
        }
        let y = fir.compute();
        assert!((y - 0.5).abs() < 1e-9, "y = {y}");
    }

    #[test]
    fn zero_input_yields_zero_output() {
        let fir = DecimatingFir::new();
        assert_eq!(fir.compute(), 0.0);
    }
}
