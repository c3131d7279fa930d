//! The 10-channel IIR bank driven by the FIR stage's decimated output.
//!
//! Each channel has its own feedback (`zQueue`) and output history
//! (`outputQueue`), but all ten channels read from one shared feed-forward
//! history (`yQueue`), which holds the FIR stage's last 11 outputs.

use crate::coefficients::{IIR_A_COEFFICIENTS, IIR_B_COEFFICIENTS};
use crate::queue::CircularBuffer;

/// Number of channels in the bank (one per player frequency).
pub const CHANNEL_COUNT: usize = 10;
/// Number of feed-forward (B) coefficients per channel; also the size of
/// the shared `yQueue`.
pub const B_COEFFICIENT_COUNT: usize = 11;
/// Number of feedback (A) coefficients per channel; also the size of each
/// channel's `zQueue`.
pub const A_COEFFICIENT_COUNT: usize = 10;
/// Depth of each channel's output history window used for power estimation.
pub const OUTPUT_QUEUE_SIZE: usize = 2000;

/// Per-channel IIR state: feedback history and output history.
#[derive(Clone)]
pub struct IirChannel {
    z_queue: CircularBuffer<f64, A_COEFFICIENT_COUNT>,
    output_queue: CircularBuffer<f64, OUTPUT_QUEUE_SIZE>,
}

impl Default for IirChannel {
    fn default() -> Self {
        Self {
            z_queue: CircularBuffer::new(),
            output_queue: CircularBuffer::new(),
        }
    }
}

impl IirChannel {
    pub fn output_queue(&self) -> &CircularBuffer<f64, OUTPUT_QUEUE_SIZE> {
        &self.output_queue
    }

    pub fn z_queue(&self) -> &CircularBuffer<f64, A_COEFFICIENT_COUNT> {
        &self.z_queue
    }
}

/// The full bank: the shared feed-forward history plus all ten channels.
#[derive(Clone)]
pub struct IirBank {
    y_queue: CircularBuffer<f64, B_COEFFICIENT_COUNT>,
    channels: [IirChannel; CHANNEL_COUNT],
}

impl Default for IirBank {
    fn default() -> Self {
        Self {
            y_queue: CircularBuffer::new(),
            channels: Default::default(),
        }
    }
}

impl IirBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new FIR output onto the shared feed-forward history. Call
    /// once per FIR epoch, before running any channel.
    pub fn push_fir_output(&mut self, y: f64) {
        self.y_queue.overwrite_push(y);
    }

    /// Run channel `k`'s IIR filter against the current `yQueue` contents,
    /// push its output onto that channel's `zQueue` and `outputQueue`, and
    /// return the new output. Call once per channel, per FIR epoch, after
    /// [`Self::push_fir_output`].
    pub fn run_channel(&mut self, k: usize) -> f64 {
        let b_coeffs = &IIR_B_COEFFICIENTS[k];
        let a_coeffs = &IIR_A_COEFFICIENTS[k];
        let channel = &mut self.channels[k];

        let mut b = 0.0;
        for i in 0..B_COEFFICIENT_COUNT {
            b += self.y_queue.read_element_at(B_COEFFICIENT_COUNT - 1 - i) * b_coeffs[i];
        }
        let mut a = 0.0;
        for i in 0..A_COEFFICIENT_COUNT {
            a += channel.z_queue.read_element_at(A_COEFFICIENT_COUNT - 1 - i) * a_coeffs[i];
        }

        let out = b - a;
        channel.z_queue.overwrite_push(out);
        channel.output_queue.overwrite_push(out);
        out
    }

    pub fn channel(&self, k: usize) -> &IirChannel {
        &self.channels[k]
    }

    pub fn y_queue(&self) -> &CircularBuffer<f64, B_COEFFICIENT_COUNT> {
        &self.y_queue
    }

    pub fn b_coefficients(k: usize) -> &'static [f64; B_COEFFICIENT_COUNT] {
        &IIR_B_COEFFICIENTS[k]
    }

    pub fn a_coefficients(k: usize) -> &'static [f64; A_COEFFICIENT_COUNT] {
        &IIR_A_COEFFICIENTS[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_yields_zero_output_on_every_channel() {
        let mut bank = IirBank::new();
        bank.push_fir_output(0.0);
        for k in 0..CHANNEL_COUNT {
            assert_eq!(bank.run_channel(k), 0.0);
        }
    }

    #[test]
    fn coefficient_tables_are_well_formed() {
        for k in 0..CHANNEL_COUNT {
            assert_eq!(IirBank::b_coefficients(k).len(), B_COEFFICIENT_COUNT);
            assert_eq!(IirBank::a_coefficients(k).len(), A_COEFFICIENT_COUNT);
        }
    }

    #[test]
    fn running_a_channel_updates_its_histories() {
        let mut bank = IirBank::new();
        bank.push_fir_output(1.0);
        let out = bank.run_channel(3);
        assert_eq!(bank.channel(3).output_queue().newest(), out);
        assert_eq!(bank.channel(3).z_queue().newest(), out);
        // Other channels are untouched.
        assert_eq!(bank.channel(4).output_queue().newest(), 0.0);
    }
}
