//! Running power estimate over an IIR channel's output window.
//!
//! Power for a channel is the sum of squares of the last `N` output
//! samples (`N` = [`crate::iir::OUTPUT_QUEUE_SIZE`] in the filter bank).
//! Recomputing that sum from scratch every tick is O(N); the incremental
//! path instead subtracts the square of the sample that just fell out of
//! the window and adds the square of the one that just entered it, making
//! steady-state computation O(1) per channel per FIR epoch.

use crate::queue::CircularBuffer;

/// Per-channel power accumulator over a window of `N` samples.
///
/// Correct incremental operation requires that [`Self::compute`] be called
/// exactly once per FIR epoch for this channel, on an `output_queue` that
/// has advanced by exactly one element since the previous call — otherwise
/// `oldest` no longer matches the queue's actual oldest element and the
/// incremental update silently drifts. [`Self::compute`] with `force = true`
/// resynchronizes it.
#[derive(Clone, Copy, Default)]
pub struct PowerEstimator<const N: usize> {
    current_power: f64,
    oldest: f64,
}

impl<const N: usize> PowerEstimator<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_power(&self) -> f64 {
        self.current_power
    }

    /// Recompute this channel's power from `output_queue`.
    ///
    /// * `force = true`: sum the squares of every element in the window
    ///   (cold start, or to correct drift after a missed epoch).
    /// * `force = false`: update incrementally from the previously recorded
    ///   power and oldest sample.
    pub fn compute(&mut self, output_queue: &CircularBuffer<f64, N>, force: bool) -> f64 {
        if force {
            let mut sum = 0.0;
            for i in 0..N {
                let v = output_queue.read_element_at(i);
                sum += v * v;
            }
            self.current_power = sum;
        } else {
            let newest = output_queue.newest();
            self.current_power =
                self.current_power - self.oldest * self.oldest + newest * newest;
        }
        self.oldest = output_queue.oldest();
        self.current_power
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_computation_on_zero_queue_is_zero() {
        let q: CircularBuffer<f64, 2000> = CircularBuffer::new();
        let mut p: PowerEstimator<2000> = PowerEstimator::new();
        assert_eq!(p.compute(&q, true), 0.0);
    }

    #[test]
    fn incremental_matches_forced_recomputation() {
        let mut q: CircularBuffer<f64, 8> = CircularBuffer::new();
        let mut forced: PowerEstimator<8> = PowerEstimator::new();
        let mut incremental: PowerEstimator<8> = PowerEstimator::new();

        for i in 0..8 {
            q.overwrite_push(i as f64);
        }
        forced.compute(&q, true);
        incremental.compute(&q, true);

        for v in [8.0, 9.0, 10.0, 11.0, -3.0, 42.0] {
            q.overwrite_push(v);
            let f = forced.compute(&q, true);
            let i = incremental.compute(&q, false);
            assert!(
                (f - i).abs() <= 1e-6 * f.abs().max(1.0),
                "forced={f} incremental={i}"
            );
        }
    }

    #[test]
    fn forced_recompute_resynchronizes_after_drift() {
        // Simulate a missed epoch: push two samples but only run one
        // incremental compute, then force a recompute and confirm it
        // recovers the exact value.
        let mut q: CircularBuffer<f64, 4> = CircularBuffer::new();
        let mut est: PowerEstimator<4> = PowerEstimator::new();
        for i in 1..=4 {
            q.overwrite_push(i as f64);
        }
        est.compute(&q, true);

        q.overwrite_push(5.0);
        q.overwrite_push(6.0); // second push without an intervening compute

        let forced = est.compute(&q, true);
        let expected: f64 = [3.0, 4.0, 5.0, 6.0].iter().map(|v| v * v).sum();
        assert_eq!(forced, expected);
    }
}
