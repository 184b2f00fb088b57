use std::fmt;
use crate::error::SimulationError;
/// Named interval of the cardiac cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseLabel {
    /// Atrial depolarization up to the start of the QRS complex.
    Pq,
    /// Ventricular depolarization; one heartbeat.
    Qrs,
    /// Ventricular repolarization.
    St,
    /// Gap between annotated intervals.
    Idle,
}
impl PhaseLabel {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "PQ" => Some(PhaseLabel::Pq),
            "QRS" => Some(PhaseLabel::Qrs),
            "ST" => Some(PhaseLabel::St),
            "Idle" => Some(PhaseLabel::Idle),
            _ => None,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseLabel::Pq => "PQ",
            PhaseLabel::Qrs => "QRS",
            PhaseLabel::St => "ST",
            PhaseLabel::Idle => "Idle",
        }
    }
}
impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Seconds from the start of the recording.
    pub entry_time: f64,
    /// Seconds the phase lasts.
    pub duration: f64,
    pub label: PhaseLabel,
}
/// Ordered list of annotated phases covering one pass of the recording.
/// Immutable once built; entry times must be non-decreasing.
#[derive(Debug)]
pub struct PhaseTimeline {
    phases: Vec<Phase>,
    total_duration: f64,
}
impl PhaseTimeline {
    pub fn new(phases: Vec<Phase>) -> Result<Self, SimulationError> {
        for phase in &phases {
            if !phase.entry_time.is_finite() || !phase.duration.is_finite() || phase.duration < 0.0 {
                return Err(SimulationError::MalformedData(format!(
                    "phase {} has invalid timing (entry {}, duration {})",
                    phase.label, phase.entry_time, phase.duration
                )));
            }
        }
        for pair in phases.windows(2) {
            if pair[1].entry_time < pair[0].entry_time {
                return Err(SimulationError::MalformedData(format!(
                    "phase entry times must be non-decreasing: {:.4} follows {:.4}",
                    pair[1].entry_time, pair[0].entry_time
                )));
            }
        }
        let total_duration = phases
            .last()
            .map(|p| p.entry_time + p.duration)
            .unwrap_or(0.0);
        Ok(Self {
            phases,
            total_duration,
        })
    }
    /// Entry time of the last phase plus its duration; 0 for an empty list.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }
    pub fn len(&self) -> usize {
        self.phases.len()
    }
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }
    /// Entry timestamps of the QRS phases, in order.
    pub fn qrs_entries(&self) -> impl Iterator<Item = f64> + '_ {
        self.phases
            .iter()
            .filter(|p| p.label == PhaseLabel::Qrs)
            .map(|p| p.entry_time)
    }
}
