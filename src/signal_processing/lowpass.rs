use super::{Filter, FirCore};

/// Number of taps in the lowpass kernel.
pub const LOWPASS_TAP_COUNT: usize = 50;

/// Sample rate the kernel was designed for, in Hz. Filtering other rates
/// works mechanically but scales the realized cutoff proportionally.
pub const DESIGN_SAMPLE_RATE_HZ: u32 = 31250;

/// Upper edge of the passband, in Hz at the design rate.
pub const PASSBAND_EDGE_HZ: f64 = 9000.0;

/// Lower edge of the stopband, in Hz at the design rate.
pub const STOPBAND_EDGE_HZ: f64 = 10_000.0;

/// Equiripple lowpass kernel, designed for a 31250 Hz sample rate:
///
/// * 0 Hz - 9000 Hz: gain 1, ripple < 1 dB
/// * 10000 Hz - 15625 Hz: gain 0, attenuation < -40 dB
///
/// Tap 0 pairs the most recently pushed sample. The table is symmetric
/// (linear phase); group delay is (N - 1) / 2 samples.
pub const LOWPASS_TAPS: [f64; LOWPASS_TAP_COUNT] = [
    1.805216164624956141e-3,
    -1.375823434064202440e-2,
    -2.034100671972354987e-2,
    -3.302244948012035921e-4,
    9.432272708817020929e-3,
    -7.512384841214225437e-3,
    -4.750777839628765251e-3,
    1.226611038264202938e-2,
    -3.062623894883626831e-3,
    -1.280105545306112376e-2,
    1.272083791721238984e-2,
    6.898287299981280610e-3,
    -2.066644432199511716e-2,
    5.912970164479879401e-3,
    2.202316617172679278e-2,
    -2.317378054909733504e-2,
    -1.196011365013038147e-2,
    3.938712032662081142e-2,
    -1.276821970724848973e-2,
    -4.596530268123527607e-2,
    5.471547124718781352e-2,
    2.930755097867086822e-2,
    -1.262782119506489220e-1,
    6.368615562346423287e-2,
    5.159046451858749771e-1,
    5.159046451858749771e-1,
    6.368615562346423287e-2,
    -1.262782119506489220e-1,
    2.930755097867086822e-2,
    5.471547124718781352e-2,
    -4.596530268123527607e-2,
    -1.276821970724848973e-2,
    3.938712032662081142e-2,
    -1.196011365013038147e-2,
    -2.317378054909733504e-2,
    2.202316617172679278e-2,
    5.912970164479879401e-3,
    -2.066644432199511716e-2,
    6.898287299981280610e-3,
    1.272083791721238984e-2,
    -1.280105545306112376e-2,
    -3.062623894883626831e-3,
    1.226611038264202938e-2,
    -4.750777839628765251e-3,
    -7.512384841214225437e-3,
    9.432272708817020929e-3,
    -3.302244948012035921e-4,
    -2.034100671972354987e-2,
    -1.375823434064202440e-2,
    1.805216164624956141e-3,
];

/// Fixed 50-tap 9 kHz low-pass filter
///
/// Wraps `FirCore` with the compile-time coefficient table above. Create one
/// instance per audio stream and feed it every sample in arrival order.
pub struct Lowpass9k {
    core: FirCore,
}

impl Lowpass9k {
    /// Create a fresh filter with zeroed history.
    pub fn new() -> Self {
        Self {
            core: FirCore::new(LOWPASS_TAPS.to_vec()),
        }
    }

    /// Store one input sample in the filter history.
    pub fn push(&mut self, sample: f64) {
        self.core.push(sample);
    }

    /// Produce the filtered sample for the current history. Read-only.
    pub fn output(&self) -> f64 {
        self.core.output()
    }

    /// Push one sample and produce the corresponding filtered sample.
    pub fn process(&mut self, sample: f64) -> f64 {
        self.core.process(sample)
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        self.core.process_buffer(buffer)
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.core.num_taps()
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        self.core.group_delay_samples()
    }
}

impl Default for Lowpass9k {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for Lowpass9k {
    fn process(&mut self, sample: f64) -> f64 {
        Lowpass9k::process(self, sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_count() {
        let filter = Lowpass9k::new();
        assert_eq!(filter.num_taps(), LOWPASS_TAP_COUNT);
        assert_eq!(filter.group_delay_samples(), 24);
    }

    #[test]
    fn test_kernel_is_linear_phase() {
        for i in 0..LOWPASS_TAP_COUNT {
            assert_eq!(LOWPASS_TAPS[i], LOWPASS_TAPS[LOWPASS_TAP_COUNT - 1 - i]);
        }
    }

    #[test]
    fn test_dc_gain_within_passband_ripple() {
        let gain: f64 = LOWPASS_TAPS.iter().sum();
        let gain_db = 20.0 * gain.log10();
        assert!(
            gain_db.abs() < 1.0,
            "DC gain {:.3} dB outside passband ripple",
            gain_db
        );
    }
}
