use crate::phase::PhaseTimeline;
/// Beat-rate estimates derived from QRS timing. The recorded ("real") BPM
/// is fixed once at load; the virtual BPM tracks triggers fired by the
/// running simulation and is recomputed every tick.
#[derive(Clone, Copy, Debug)]
pub struct BpmEstimator {
    real_bpm: f32,
    first_qrs_time: f32,
    last_qrs_time: f32,
}
impl BpmEstimator {
    /// Average rate over the recorded QRS entry timestamps. Fewer than two
    /// QRS phases is not an error; the estimate degrades to 0.
    pub fn from_timeline(timeline: &PhaseTimeline) -> Self {
        let mut count = 0u32;
        let mut first = -1.0f32;
        let mut last = -1.0f32;
        for entry in timeline.qrs_entries() {
            count += 1;
            let entry = entry as f32;
            if first < 0.0 {
                first = entry;
            }
            last = entry;
        }
        let real_bpm = if count > 1 && last > first {
            60.0 * (count - 1) as f32 / (last - first)
        } else {
            0.0
        };
        Self {
            real_bpm,
            first_qrs_time: first,
            last_qrs_time: last,
        }
    }
    pub fn real_bpm(&self) -> f32 {
        self.real_bpm
    }
    /// Entry time of the first QRS phase, or -1 when the recording has none.
    pub fn first_qrs_time(&self) -> f32 {
        self.first_qrs_time
    }
    pub fn last_qrs_time(&self) -> f32 {
        self.last_qrs_time
    }
    /// Live estimate from the triggers fired since the last wrap.
    pub fn virtual_bpm(virtual_qrs_count: u32, simulation_time: f64) -> f32 {
        if simulation_time > 0.0 {
            (60.0 * f64::from(virtual_qrs_count) / simulation_time) as f32
        } else {
            0.0
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::{Phase, PhaseLabel};
    fn qrs_at(entries: &[f64]) -> PhaseTimeline {
        let phases = entries
            .iter()
            .map(|&entry| Phase {
                entry_time: entry,
                duration: 0.1,
                label: PhaseLabel::Qrs,
            })
            .collect();
        PhaseTimeline::new(phases).unwrap()
    }
    #[test]
    fn three_beats_over_two_seconds_is_sixty_bpm() {
        let estimator = BpmEstimator::from_timeline(&qrs_at(&[0.0, 1.0, 2.0]));
        assert_eq!(estimator.real_bpm(), 60.0);
        assert_eq!(estimator.first_qrs_time(), 0.0);
        assert_eq!(estimator.last_qrs_time(), 2.0);
    }
    #[test]
    fn fewer_than_two_beats_degrades_to_zero() {
        assert_eq!(BpmEstimator::from_timeline(&qrs_at(&[])).real_bpm(), 0.0);
        assert_eq!(BpmEstimator::from_timeline(&qrs_at(&[1.0])).real_bpm(), 0.0);
    }
    #[test]
    fn virtual_bpm_is_zero_at_time_zero() {
        assert_eq!(BpmEstimator::virtual_bpm(5, 0.0), 0.0);
    }
    #[test]
    fn virtual_bpm_tracks_trigger_rate() {
        assert_eq!(BpmEstimator::virtual_bpm(2, 2.0), 60.0);
        assert_eq!(BpmEstimator::virtual_bpm(0, 10.0), 0.0);
    }
}
