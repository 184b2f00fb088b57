use std::fs;
use std::path::Path;
use log::info;
use serde::Deserialize;
use crate::error::SimulationError;
use crate::phase::{Phase, PhaseLabel, PhaseTimeline};
use crate::signal::RecordedSignal;
/// One record of the phases artifact produced by the offline analysis step.
#[derive(Clone, Debug, Deserialize)]
pub struct PhaseRecord {
    /// Seconds from the start of the recording.
    pub entry: f64,
    /// Seconds the phase lasts.
    pub duration: f64,
    /// Phase name; one of "PQ", "QRS", "ST", "Idle".
    pub phase: String,
}
/// Parse the phases artifact: a JSON array of `{entry, duration, phase}`
/// records in entry-time order. Any shape mismatch fails the whole load.
pub fn parse_phases(text: &str) -> Result<PhaseTimeline, SimulationError> {
    let records: Vec<PhaseRecord> = serde_json::from_str(text)?;
    let mut phases = Vec::with_capacity(records.len());
    for record in &records {
        let label = PhaseLabel::parse(&record.phase).ok_or_else(|| {
            SimulationError::MalformedData(format!("unknown phase label {:?}", record.phase))
        })?;
        phases.push(Phase {
            entry_time: record.entry,
            duration: record.duration,
            label,
        });
    }
    let timeline = PhaseTimeline::new(phases)?;
    info!(
        "loaded {} phases, total duration {:.2}s",
        timeline.len(),
        timeline.total_duration()
    );
    Ok(timeline)
}
/// Parse the plot artifact: a JSON array of amplitude samples.
pub fn parse_samples(text: &str, sample_rate_hz: f32) -> Result<RecordedSignal, SimulationError> {
    let samples: Vec<f32> = serde_json::from_str(text)?;
    let signal = RecordedSignal::new(samples, sample_rate_hz)?;
    info!("loaded {} recorded samples at {} Hz", signal.len(), sample_rate_hz);
    Ok(signal)
}
pub fn load_phases_file(path: impl AsRef<Path>) -> Result<PhaseTimeline, SimulationError> {
    parse_phases(&read_artifact(path.as_ref())?)
}
pub fn load_samples_file(
    path: impl AsRef<Path>,
    sample_rate_hz: f32,
) -> Result<RecordedSignal, SimulationError> {
    parse_samples(&read_artifact(path.as_ref())?, sample_rate_hz)
}
fn read_artifact(path: &Path) -> Result<String, SimulationError> {
    fs::read_to_string(path).map_err(|source| SimulationError::MissingData {
        path: path.display().to_string(),
        source,
    })
}
