use std::collections::VecDeque;
use std::f32::consts::PI;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
/// Seconds of flat line enqueued ahead of the P wave.
const LEAD_IN_SECS: f32 = 0.200;
/// Nominal gap between the P wave and the QRS deflections, and after the S dip.
const SEGMENT_GAP_SECS: f32 = 0.010;
/// Uniform jitter applied to every produced sample.
const JITTER_AMPLITUDE: f32 = 0.015;
const DRIFT_AMPLITUDE: f32 = 0.03;
const DRIFT_FREQUENCY_HZ: f32 = 0.5;
/// One PQRST deflection, sampled once at construction.
#[derive(Clone, Debug)]
pub struct SegmentShape {
    samples: Vec<f32>,
}
impl SegmentShape {
    /// Gaussian pulse `height * exp(-60 * (t - 0.5)^2)` over `length` points,
    /// `t` normalized to `[0, 1]`. A negative height produces a dip.
    pub fn gaussian(length: usize, height: f32) -> Self {
        let span = length.saturating_sub(1).max(1) as f32;
        let samples = (0..length)
            .map(|i| {
                let t = i as f32 / span;
                height * (-60.0 * (t - 0.5).powi(2)).exp()
            })
            .collect();
        Self { samples }
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
}
/// The five deflection shapes making up one synthetic heartbeat.
#[derive(Clone, Debug)]
pub struct SegmentTemplates {
    pub p_wave: SegmentShape,
    pub q_dip: SegmentShape,
    pub r_spike: SegmentShape,
    pub s_dip: SegmentShape,
    pub t_wave: SegmentShape,
}
impl Default for SegmentTemplates {
    fn default() -> Self {
        Self {
            p_wave: SegmentShape::gaussian(30, 0.3),
            q_dip: SegmentShape::gaussian(10, -0.2),
            r_spike: SegmentShape::gaussian(20, 1.0),
            s_dip: SegmentShape::gaussian(10, -0.3),
            t_wave: SegmentShape::gaussian(40, 0.5),
        }
    }
}
/// FIFO of synthetic samples waiting to be consumed by the sample clock.
#[derive(Debug, Default)]
pub struct InjectionQueue {
    pending: VecDeque<f32>,
}
impl InjectionQueue {
    pub fn push_blank(&mut self, count: usize) {
        for _ in 0..count {
            self.pending.push_back(0.0);
        }
    }
    pub fn push_shape(&mut self, shape: &SegmentShape) {
        self.pending.extend(shape.samples().iter().copied());
    }
    pub fn pop(&mut self) -> Option<f32> {
        self.pending.pop_front()
    }
    pub fn len(&self) -> usize {
        self.pending.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.pending.iter().copied()
    }
}
/// Produces the scrolling synthetic ECG trace. Triggered complexes sit in
/// the injection queue until the synthesizer's own sample clock consumes
/// them; the display buffer keeps a fixed number of the newest samples.
///
/// The sample clock is deliberately separate from the frame clock driving
/// `advance`: samples are produced at a fixed rate while frames arrive at
/// whatever rate the caller runs, and both honor the same time scale.
pub struct WaveformSynthesizer {
    templates: SegmentTemplates,
    queue: InjectionQueue,
    display: VecDeque<f32>,
    display_len: usize,
    sample_rate_hz: f32,
    time_scale: f32,
    accumulated_secs: f32,
    drift_clock: f32,
    rng: StdRng,
}
impl WaveformSynthesizer {
    pub fn new(sample_rate_hz: f32, display_len: usize) -> Self {
        Self::with_rng(sample_rate_hz, display_len, StdRng::from_entropy())
    }
    /// Deterministic jitter for tests.
    pub fn with_seed(sample_rate_hz: f32, display_len: usize, seed: u64) -> Self {
        Self::with_rng(sample_rate_hz, display_len, StdRng::seed_from_u64(seed))
    }
    fn with_rng(sample_rate_hz: f32, display_len: usize, rng: StdRng) -> Self {
        let mut display = VecDeque::with_capacity(display_len);
        display.extend(std::iter::repeat(0.0).take(display_len));
        Self {
            templates: SegmentTemplates::default(),
            queue: InjectionQueue::default(),
            display,
            display_len,
            sample_rate_hz,
            time_scale: 1.0,
            accumulated_secs: 0.0,
            drift_clock: 0.0,
            rng,
        }
    }
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }
    pub fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }
    pub fn templates(&self) -> &SegmentTemplates {
        &self.templates
    }
    pub fn pending(&self) -> &InjectionQueue {
        &self.queue
    }
    /// Enqueue one full PQRST complex: lead-in blank, P, a gap absorbing the
    /// P wave's own length, then Q, R, S back to back, a short blank, and T.
    pub fn trigger(&mut self) {
        let lead_in = (self.sample_rate_hz * LEAD_IN_SECS).round() as usize;
        let gap = (self.sample_rate_hz * SEGMENT_GAP_SECS).round() as usize;
        self.queue.push_blank(lead_in);
        self.queue.push_shape(&self.templates.p_wave);
        self.queue
            .push_blank(gap.saturating_sub(self.templates.p_wave.len()));
        self.queue.push_shape(&self.templates.q_dip);
        self.queue.push_shape(&self.templates.r_spike);
        self.queue.push_shape(&self.templates.s_dip);
        self.queue.push_blank(gap);
        self.queue.push_shape(&self.templates.t_wave);
    }
    /// Advance the sample clock by one frame. Consumes however many whole
    /// sample periods have accumulated, keeping the fractional remainder,
    /// and zero-fills when the queue runs dry.
    pub fn advance(&mut self, dt: f32) {
        self.accumulated_secs += dt * self.time_scale;
        self.drift_clock += dt;
        let due = (self.accumulated_secs * self.sample_rate_hz).floor() as usize;
        self.accumulated_secs -= due as f32 / self.sample_rate_hz;
        for _ in 0..due {
            let base = self.queue.pop().unwrap_or(0.0);
            let jitter = self.rng.gen_range(-JITTER_AMPLITUDE..=JITTER_AMPLITUDE);
            let drift =
                DRIFT_AMPLITUDE * (2.0 * PI * DRIFT_FREQUENCY_HZ * self.drift_clock).sin();
            if self.display.len() == self.display_len {
                self.display.pop_front();
            }
            self.display.push_back(base + jitter + drift);
        }
    }
    pub fn display_len(&self) -> usize {
        self.display.len()
    }
    /// Oldest-to-newest view of the display buffer.
    pub fn display(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.display.iter().copied()
    }
}
