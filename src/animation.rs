use crate::phase::PhaseLabel;
/// Playback surface of the external heart animation. The clip reports its
/// length and frame rate once at initialization and is scrubbed manually
/// through normalized positions.
pub trait AnimationClip {
    /// Clip length in seconds.
    fn length_secs(&self) -> f32;
    /// Frames per second of the clip.
    fn frame_rate(&self) -> f32;
    /// Scrub the clip to a normalized position in `[0, 1]`.
    fn set_normalized_time(&mut self, normalized: f32);
}
/// Frame range of each phase within the clip.
pub fn frame_range(label: PhaseLabel) -> (f32, f32) {
    match label {
        PhaseLabel::Pq => (0.0, 14.0),
        PhaseLabel::Qrs => (15.0, 30.0),
        PhaseLabel::St => (31.0, 60.0),
        PhaseLabel::Idle => (0.0, 0.0),
    }
}
#[derive(Clone, Copy, Debug)]
struct ActiveInterpolation {
    start_frame: f32,
    end_frame: f32,
    elapsed: f32,
    duration: f32,
    time_scale: f32,
}
/// Maps phase progress onto clip frames. At most one interpolation is
/// active; starting a phase while another is playing supersedes it.
pub struct PhaseAnimationMapper<C: AnimationClip> {
    clip: C,
    total_frames: f32,
    active: Option<ActiveInterpolation>,
}
impl<C: AnimationClip> PhaseAnimationMapper<C> {
    pub fn new(clip: C) -> Self {
        let total_frames = clip.length_secs() * clip.frame_rate();
        Self {
            clip,
            total_frames,
            active: None,
        }
    }
    pub fn total_frames(&self) -> f32 {
        self.total_frames
    }
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }
    pub fn clip(&self) -> &C {
        &self.clip
    }
    /// Begin interpolating across the phase's frame range over `duration`
    /// seconds of scaled time. The time scale is captured here; later
    /// speed changes do not affect an interpolation already in flight.
    pub fn play_phase(&mut self, label: PhaseLabel, duration: f32, time_scale: f32) {
        let (start_frame, end_frame) = frame_range(label);
        self.active = Some(ActiveInterpolation {
            start_frame,
            end_frame,
            elapsed: 0.0,
            duration,
            time_scale,
        });
    }
    /// Drop any in-flight interpolation without touching the clip.
    pub fn stop(&mut self) {
        self.active = None;
    }
    pub fn advance(&mut self, dt: f32) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let progress = if active.duration > 0.0 {
            (active.elapsed / active.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let frame = active.start_frame + (active.end_frame - active.start_frame) * progress;
        self.clip.set_normalized_time(normalized(frame, self.total_frames));
        active.elapsed += dt * active.time_scale;
        if active.elapsed >= active.duration {
            // Land exactly on the end frame before going idle.
            let end = normalized(active.end_frame, self.total_frames);
            self.clip.set_normalized_time(end);
            self.active = None;
        }
    }
}
fn normalized(frame: f32, total_frames: f32) -> f32 {
    if total_frames > 0.0 {
        frame / total_frames
    } else {
        0.0
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    /// 60-frame clip, so a normalized position is `frame / 60`.
    struct RecordingClip {
        positions: Vec<f32>,
    }
    impl RecordingClip {
        fn new() -> Self {
            Self {
                positions: Vec::new(),
            }
        }
    }
    impl AnimationClip for RecordingClip {
        fn length_secs(&self) -> f32 {
            2.0
        }
        fn frame_rate(&self) -> f32 {
            30.0
        }
        fn set_normalized_time(&mut self, normalized: f32) {
            self.positions.push(normalized);
        }
    }
    #[test]
    fn interpolates_linearly_across_the_frame_range() {
        let mut mapper = PhaseAnimationMapper::new(RecordingClip::new());
        mapper.play_phase(PhaseLabel::Qrs, 1.0, 1.0);
        for _ in 0..4 {
            mapper.advance(0.25);
        }
        assert!(mapper.is_idle());
        let positions = &mapper.clip().positions;
        // Emitted at progress 0, 0.25, 0.5, 0.75, then the exact end frame.
        assert!((positions[0] - 15.0 / 60.0).abs() < 1e-6);
        assert!((positions[1] - 18.75 / 60.0).abs() < 1e-6);
        assert!((positions[2] - 22.5 / 60.0).abs() < 1e-6);
        assert!((positions[3] - 26.25 / 60.0).abs() < 1e-6);
        assert!((positions.last().unwrap() - 30.0 / 60.0).abs() < 1e-6);
    }
    #[test]
    fn snaps_to_end_frame_when_duration_elapses() {
        let mut mapper = PhaseAnimationMapper::new(RecordingClip::new());
        mapper.play_phase(PhaseLabel::Pq, 0.5, 1.0);
        mapper.advance(0.5);
        assert!(mapper.is_idle());
        assert_eq!(*mapper.clip().positions.last().unwrap(), 14.0 / 60.0);
    }
    #[test]
    fn new_phase_supersedes_the_active_one() {
        let mut mapper = PhaseAnimationMapper::new(RecordingClip::new());
        mapper.play_phase(PhaseLabel::Pq, 10.0, 1.0);
        mapper.advance(0.1);
        mapper.play_phase(PhaseLabel::St, 1.0, 1.0);
        mapper.advance(0.0);
        // First emission of the new interpolation starts at the ST range.
        assert!((mapper.clip().positions.last().unwrap() - 31.0 / 60.0).abs() < 1e-6);
    }
    #[test]
    fn time_scale_is_captured_at_phase_start() {
        let mut mapper = PhaseAnimationMapper::new(RecordingClip::new());
        mapper.play_phase(PhaseLabel::Qrs, 1.0, 2.0);
        mapper.advance(0.25);
        mapper.advance(0.25);
        // Scaled elapsed time hits the duration after 0.5 s of frame time.
        assert!(mapper.is_idle());
    }
    #[test]
    fn zero_duration_phase_completes_immediately() {
        let mut mapper = PhaseAnimationMapper::new(RecordingClip::new());
        mapper.play_phase(PhaseLabel::Qrs, 0.0, 1.0);
        mapper.advance(1.0 / 60.0);
        assert!(mapper.is_idle());
        assert_eq!(*mapper.clip().positions.last().unwrap(), 30.0 / 60.0);
    }
    #[test]
    fn advance_without_active_phase_is_a_no_op() {
        let mut mapper = PhaseAnimationMapper::new(RecordingClip::new());
        mapper.advance(1.0);
        assert!(mapper.clip().positions.is_empty());
    }
}
