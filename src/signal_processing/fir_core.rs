/// Core FIR filter state
///
/// Owns the circular sample history, tap coefficients, and convolution
/// logic. Concrete filters (the 9 kHz lowpass) wrap this and supply their
/// coefficient table. One instance per stream; pushing samples out of order
/// or skipping samples desynchronizes the filter from its designed transfer
/// function.
pub struct FirCore {
    taps: Vec<f64>,
    history: Vec<f64>,
    pos: usize,
}

impl FirCore {
    /// Create a new FIR core with the given tap coefficients.
    ///
    /// The history starts zeroed, so the first `taps.len() - 1` outputs are
    /// a warm-up transient.
    pub fn new(taps: Vec<f64>) -> Self {
        Self {
            history: vec![0.0; taps.len()],
            taps,
            pos: 0,
        }
    }

    /// Store one input sample in the history ring, advancing the write
    /// cursor modulo the tap count.
    pub fn push(&mut self, sample: f64) {
        self.history[self.pos] = sample;
        self.pos += 1;
        if self.pos == self.taps.len() {
            self.pos = 0;
        }
    }

    /// Convolve the coefficient table against the current history.
    ///
    /// Tap 0 pairs the most recently pushed sample. Read-only: repeated
    /// calls between pushes return the identical value.
    pub fn output(&self) -> f64 {
        let n = self.taps.len();
        let mut acc = 0.0f64;

        // The newest sample sits just behind the write cursor; walk the
        // ring newest-to-oldest as two contiguous reverse ranges to avoid
        // modulo arithmetic in the inner convolution loop.
        let mut tap_i = 0usize;
        for hist_idx in (0..self.pos).rev() {
            acc += self.taps[tap_i] * self.history[hist_idx];
            tap_i += 1;
        }
        for hist_idx in (self.pos..n).rev() {
            acc += self.taps[tap_i] * self.history[hist_idx];
            tap_i += 1;
        }
        debug_assert_eq!(tap_i, n);
        acc
    }

    /// Push one sample and produce the corresponding filtered sample.
    pub fn process(&mut self, sample: f64) -> f64 {
        self.push(sample);
        self.output()
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        (self.taps.len() - 1) / 2
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_impulse_walks_taps_in_order() {
        // Asymmetric taps pin the pairing convention: tap 0 must multiply
        // the newest sample, so an impulse replays the table tap-for-tap.
        let taps = vec![1.0, 2.0, 3.0, 4.0];
        let mut core = FirCore::new(taps.clone());

        for (i, &expected) in taps.iter().enumerate() {
            let input = if i == 0 { 1.0 } else { 0.0 };
            assert_relative_eq!(core.process(input), expected);
        }
    }

    #[test]
    fn test_output_is_idempotent_between_pushes() {
        let mut core = FirCore::new(vec![0.25, 0.5, 0.25]);
        core.push(1.0);
        core.push(-2.0);

        let first = core.output();
        for _ in 0..10 {
            assert_eq!(core.output(), first);
        }
    }

    #[test]
    fn test_zero_history_before_any_push() {
        let core = FirCore::new(vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(core.output(), 0.0);
    }

    #[test]
    fn test_impulse_fully_flushed_after_n_pushes() {
        // After N further pushes the impulse has left the history ring
        // entirely, so it contributes nothing to any later output.
        let n = 5;
        let mut core = FirCore::new(vec![0.3; n]);
        core.push(1.0);
        for _ in 0..n {
            core.push(0.0);
        }
        assert_eq!(core.output(), 0.0);
    }

    #[test]
    fn test_wraparound_keeps_newest_n_samples() {
        // Push N + 2 distinct values through a 3-tap core; the output must
        // be the dot product of the last 3 pushes only.
        let mut core = FirCore::new(vec![1.0, 10.0, 100.0]);
        for x in [7.0, -3.0, 2.0, 4.0, 5.0] {
            core.push(x);
        }
        // newest-to-oldest: 5, 4, 2
        assert_relative_eq!(core.output(), 5.0 + 40.0 + 200.0);
    }

    #[test]
    fn test_process_equals_push_then_output() {
        let taps = vec![0.5, -0.25, 0.125];
        let mut a = FirCore::new(taps.clone());
        let mut b = FirCore::new(taps);

        for x in [1.0, 2.0, -1.5, 0.75, -0.3, 8.0] {
            let ya = a.process(x);
            b.push(x);
            assert_eq!(ya, b.output());
        }
    }

    #[test]
    fn test_process_buffer_matches_per_sample() {
        let taps = vec![0.2, 0.3, 0.5];
        let input = [1.0, -1.0, 2.0, -2.0, 0.5];

        let mut per_sample = FirCore::new(taps.clone());
        let expected: Vec<f64> = input.iter().map(|&x| per_sample.process(x)).collect();

        let mut buffered = FirCore::new(taps);
        let mut buffer = input;
        buffered.process_buffer(&mut buffer);

        assert_eq!(buffer.to_vec(), expected);
    }
}
