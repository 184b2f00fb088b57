use anyhow::{bail, Context, Result};
use log::debug;
use heartsim::{
    AnimationClip, GraphLayout, GraphPoint, PolylineSink, PulseSink, PulseTarget,
    SimulationConfig, SimulationCoordinator,
};
/// Headless stand-in for the heart animation: remembers where the clip
/// was scrubbed to.
#[derive(Default)]
struct HeadlessClip {
    position: f32,
}
impl AnimationClip for HeadlessClip {
    fn length_secs(&self) -> f32 {
        2.0
    }
    fn frame_rate(&self) -> f32 {
        30.0
    }
    fn set_normalized_time(&mut self, normalized: f32) {
        self.position = normalized;
    }
}
struct LoggingPulses;
impl PulseSink for LoggingPulses {
    fn set_alpha(&mut self, target: PulseTarget, alpha: f32) {
        debug!("pulse {target:?} alpha {alpha:.2}");
    }
}
/// Counts polyline vertices instead of drawing them.
#[derive(Default)]
struct HeadlessLine {
    last_len: usize,
}
impl PolylineSink for HeadlessLine {
    fn draw_polyline(&mut self, points: &[GraphPoint]) {
        self.last_len = points.len();
    }
}
fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let (Some(plot_path), Some(phases_path)) = (args.next(), args.next()) else {
        bail!("usage: heartsim <plot.json> <phases.json> [seconds] [speed]");
    };
    let seconds: f32 = match args.next() {
        Some(raw) => raw.parse().context("seconds must be a number")?,
        None => 10.0,
    };
    let speed: f32 = match args.next() {
        Some(raw) => raw.parse().context("speed must be a number")?,
        None => 1.0,
    };
    let config = SimulationConfig::default();
    let timeline = heartsim::load_phases_file(&phases_path)?;
    let recorded = heartsim::load_samples_file(&plot_path, config.sample_rate_hz)?;
    let mut sim = SimulationCoordinator::new(
        config,
        timeline,
        recorded,
        HeadlessClip::default(),
        LoggingPulses,
    );
    sim.set_time_scale(speed);
    let frame_dt = 1.0 / 60.0;
    let frames = (seconds / frame_dt).ceil() as u64;
    for _ in 0..frames {
        sim.tick(frame_dt);
    }
    let mut line = HeadlessLine::default();
    let recorded_layout = GraphLayout::recorded();
    line.draw_polyline(
        &recorded_layout.project(
            sim.recorded_window(recorded_layout.points_on_screen)
                .iter()
                .copied(),
        ),
    );
    let recorded_points = line.last_len;
    line.draw_polyline(&GraphLayout::synthetic().project(sim.synthetic_display()));
    println!(
        "simulated {seconds:.1}s at {speed:.1}x: Real BPM: {:.1} | Virtual BPM: {:.1}",
        sim.real_bpm(),
        sim.virtual_bpm()
    );
    println!(
        "recorded window: {recorded_points} points, synthetic display: {} points",
        line.last_len
    );
    Ok(())
}
