use crate::error::SimulationError;
/// Immutable recorded ECG trace with a fixed sample rate.
#[derive(Debug)]
pub struct RecordedSignal {
    samples: Vec<f32>,
    sample_rate_hz: f32,
}
impl RecordedSignal {
    pub fn new(samples: Vec<f32>, sample_rate_hz: f32) -> Result<Self, SimulationError> {
        if sample_rate_hz <= 0.0 || !sample_rate_hz.is_finite() {
            return Err(SimulationError::MalformedData(
                "sample rate must be greater than zero".into(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate_hz,
        })
    }
    pub fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
    /// Sliding window positioned by simulation time. The start index is
    /// clamped so the returned slice always stays inside the recording;
    /// a signal shorter than the window yields the whole signal.
    pub fn window(&self, sim_time: f64, window_len: usize) -> &[f32] {
        let window_len = window_len.min(self.samples.len());
        let max_start = self.samples.len() - window_len;
        let start = (sim_time.max(0.0) * self.sample_rate_hz as f64) as usize;
        let start = start.min(max_start);
        &self.samples[start..start + window_len]
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn ramp(len: usize) -> RecordedSignal {
        RecordedSignal::new((0..len).map(|i| i as f32).collect(), 360.0).unwrap()
    }
    #[test]
    fn rejects_non_positive_sample_rate() {
        assert!(RecordedSignal::new(vec![0.0], 0.0).is_err());
        assert!(RecordedSignal::new(vec![0.0], -1.0).is_err());
    }
    #[test]
    fn window_starts_at_floor_of_sample_position() {
        let signal = ramp(1000);
        let window = signal.window(1.0, 500);
        assert_eq!(window.len(), 500);
        assert_eq!(window[0], 360.0);
    }
    #[test]
    fn window_stays_in_bounds_for_any_time() {
        let signal = ramp(1000);
        for sim_time in [0.0, 0.5, 2.0, 1_000.0, 1.0e12] {
            let window = signal.window(sim_time, 500);
            assert_eq!(window.len(), 500);
            assert!(window[0] <= 500.0);
        }
        assert_eq!(signal.window(1.0e12, 500)[0], 500.0);
    }
    #[test]
    fn short_signal_yields_whole_signal() {
        let signal = ramp(100);
        let window = signal.window(3.0, 500);
        assert_eq!(window.len(), 100);
        assert_eq!(window[0], 0.0);
    }
}
