use log::debug;
use crate::animation::{AnimationClip, PhaseAnimationMapper};
use crate::bpm::BpmEstimator;
use crate::error::SimulationError;
use crate::loader;
use crate::phase::{PhaseLabel, PhaseTimeline};
use crate::pulse::{PulseDriver, PulseSink, PulseTarget};
use crate::signal::RecordedSignal;
use crate::synth::WaveformSynthesizer;
/// Tunable constants shared by the whole simulation.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Sample rate of the recorded trace and the synthetic clock
    /// (MIT-BIH recordings are 360 Hz).
    pub sample_rate_hz: f32,
    /// Display points kept by the synthetic trace.
    pub points_on_screen: usize,
    /// Seconds a contraction pulse takes to fade out.
    pub pulse_duration: f32,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 360.0,
            points_on_screen: 500,
            pulse_duration: 0.5,
        }
    }
}
/// Master-clock state. Owned by the coordinator and mutated only inside
/// `tick` (and by a full reload); everything else reads snapshots.
#[derive(Clone, Copy, Debug)]
pub struct SimulationState {
    pub simulation_time: f64,
    pub time_scale: f32,
    pub phase_cursor: usize,
    pub virtual_qrs_count: u32,
    pub real_bpm: f32,
    pub first_qrs_time: f32,
    pub last_qrs_time: f32,
}
impl SimulationState {
    fn at_load(estimator: &BpmEstimator, time_scale: f32) -> Self {
        Self {
            simulation_time: 0.0,
            time_scale,
            phase_cursor: 0,
            virtual_qrs_count: 0,
            real_bpm: estimator.real_bpm(),
            first_qrs_time: estimator.first_qrs_time(),
            last_qrs_time: estimator.last_qrs_time(),
        }
    }
}
/// Owns the simulation and fans one external frame tick out to the phase
/// timeline, the animation mapper, the pulse fades and the synthesizer.
pub struct SimulationCoordinator<C: AnimationClip, S: PulseSink> {
    config: SimulationConfig,
    state: SimulationState,
    timeline: PhaseTimeline,
    recorded: RecordedSignal,
    synth: WaveformSynthesizer,
    mapper: PhaseAnimationMapper<C>,
    pulses: PulseDriver<S>,
}
impl<C: AnimationClip, S: PulseSink> SimulationCoordinator<C, S> {
    pub fn new(
        config: SimulationConfig,
        timeline: PhaseTimeline,
        recorded: RecordedSignal,
        clip: C,
        pulse_sink: S,
    ) -> Self {
        let estimator = BpmEstimator::from_timeline(&timeline);
        Self {
            state: SimulationState::at_load(&estimator, 1.0),
            timeline,
            recorded,
            synth: WaveformSynthesizer::new(config.sample_rate_hz, config.points_on_screen),
            mapper: PhaseAnimationMapper::new(clip),
            pulses: PulseDriver::new(pulse_sink, config.pulse_duration),
            config,
        }
    }
    /// Build a coordinator straight from the two raw artifact payloads.
    pub fn from_text(
        config: SimulationConfig,
        plot_text: &str,
        phases_text: &str,
        clip: C,
        pulse_sink: S,
    ) -> Result<Self, SimulationError> {
        let timeline = loader::parse_phases(phases_text)?;
        let recorded = loader::parse_samples(plot_text, config.sample_rate_hz)?;
        Ok(Self::new(config, timeline, recorded, clip, pulse_sink))
    }
    /// Replace both artifacts and reinitialize the whole simulation. Either
    /// payload failing to parse leaves the running simulation untouched.
    pub fn reload_from_text(
        &mut self,
        plot_text: &str,
        phases_text: &str,
    ) -> Result<(), SimulationError> {
        let timeline = loader::parse_phases(phases_text)?;
        let recorded = loader::parse_samples(plot_text, self.config.sample_rate_hz)?;
        let estimator = BpmEstimator::from_timeline(&timeline);
        self.timeline = timeline;
        self.recorded = recorded;
        self.synth =
            WaveformSynthesizer::new(self.config.sample_rate_hz, self.config.points_on_screen);
        self.mapper.stop();
        self.pulses.reset();
        self.state = SimulationState::at_load(&estimator, 1.0);
        Ok(())
    }
    /// Advance the master clock by one frame and dispatch every phase whose
    /// entry time has been reached, each exactly once per loop pass. Once
    /// the clock passes the total duration the simulation restarts
    /// discontinuously: time, cursor and the virtual beat counter reset.
    pub fn tick(&mut self, dt: f32) {
        self.state.simulation_time += f64::from(dt * self.state.time_scale);
        self.cross_phases();
        if self.state.simulation_time > self.timeline.total_duration() {
            self.state.simulation_time = 0.0;
            self.state.phase_cursor = 0;
            self.state.virtual_qrs_count = 0;
        }
        self.mapper.advance(dt);
        self.pulses.advance(dt);
        self.synth.advance(dt);
    }
    fn cross_phases(&mut self) {
        while let Some(phase) = self.timeline.get(self.state.phase_cursor).copied() {
            if self.state.simulation_time < phase.entry_time {
                break;
            }
            debug!(
                "starting phase {} at {:.2}s",
                phase.label, self.state.simulation_time
            );
            self.mapper
                .play_phase(phase.label, phase.duration as f32, self.state.time_scale);
            match phase.label {
                PhaseLabel::Pq => self.pulses.trigger(PulseTarget::Atrial),
                PhaseLabel::Qrs => {
                    self.state.virtual_qrs_count += 1;
                    self.synth.trigger();
                    self.pulses.trigger(PulseTarget::Ventricular);
                }
                PhaseLabel::St | PhaseLabel::Idle => {}
            }
            self.state.phase_cursor += 1;
        }
    }
    /// External speed input, mapped one-to-one onto the time scale. Applies
    /// to the master clock and the sample clock; an interpolation already
    /// in flight keeps the scale it started with.
    pub fn set_time_scale(&mut self, value: f32) {
        let value = value.max(0.0);
        self.state.time_scale = value;
        self.synth.set_time_scale(value);
    }
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
    pub fn state(&self) -> &SimulationState {
        &self.state
    }
    pub fn timeline(&self) -> &PhaseTimeline {
        &self.timeline
    }
    pub fn real_bpm(&self) -> f32 {
        self.state.real_bpm
    }
    pub fn virtual_bpm(&self) -> f32 {
        BpmEstimator::virtual_bpm(self.state.virtual_qrs_count, self.state.simulation_time)
    }
    /// Recorded-trace window at the current simulation time.
    pub fn recorded_window(&self, window_len: usize) -> &[f32] {
        self.recorded.window(self.state.simulation_time, window_len)
    }
    /// Oldest-to-newest view of the synthetic display buffer.
    pub fn synthetic_display(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.synth.display()
    }
    pub fn synthesizer(&self) -> &WaveformSynthesizer {
        &self.synth
    }
    pub fn mapper(&self) -> &PhaseAnimationMapper<C> {
        &self.mapper
    }
    pub fn pulses(&self) -> &PulseDriver<S> {
        &self.pulses
    }
}
