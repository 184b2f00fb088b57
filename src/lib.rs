pub mod animation;
pub mod bpm;
pub mod coordinator;
pub mod error;
pub mod loader;
pub mod phase;
pub mod pulse;
pub mod signal;
pub mod synth;
pub mod view;
pub use animation::{frame_range, AnimationClip, PhaseAnimationMapper};
pub use bpm::BpmEstimator;
pub use coordinator::{SimulationConfig, SimulationCoordinator, SimulationState};
pub use error::SimulationError;
pub use loader::{load_phases_file, load_samples_file, parse_phases, parse_samples, PhaseRecord};
pub use phase::{Phase, PhaseLabel, PhaseTimeline};
pub use pulse::{PulseDriver, PulseSink, PulseTarget};
pub use signal::RecordedSignal;
pub use synth::{InjectionQueue, SegmentShape, SegmentTemplates, WaveformSynthesizer};
pub use view::{GraphLayout, GraphPoint, PolylineSink};
