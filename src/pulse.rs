/// Chamber highlighted by a contraction pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseTarget {
    Atrial,
    Ventricular,
}
/// Applies a pulse alpha to the target's visual material. Values arrive
/// already clamped to `[0, 1]` and take effect immediately.
pub trait PulseSink {
    fn set_alpha(&mut self, target: PulseTarget, alpha: f32);
}
#[derive(Clone, Copy, Debug)]
struct Fade {
    elapsed: f32,
}
/// Runs the bounded alpha fades behind the atrial and ventricular pulses.
/// Each fade decays linearly from the base alpha to zero over the pulse
/// duration; retriggering a target restarts its fade from the top.
pub struct PulseDriver<S: PulseSink> {
    sink: S,
    pulse_duration: f32,
    base_alpha: f32,
    atrial: Option<Fade>,
    ventricular: Option<Fade>,
}
impl<S: PulseSink> PulseDriver<S> {
    pub fn new(sink: S, pulse_duration: f32) -> Self {
        Self {
            sink,
            pulse_duration: pulse_duration.max(f32::EPSILON),
            base_alpha: 1.0,
            atrial: None,
            ventricular: None,
        }
    }
    pub fn sink(&self) -> &S {
        &self.sink
    }
    pub fn is_fading(&self, target: PulseTarget) -> bool {
        match target {
            PulseTarget::Atrial => self.atrial.is_some(),
            PulseTarget::Ventricular => self.ventricular.is_some(),
        }
    }
    /// Start (or restart) the target's fade. Last trigger wins.
    pub fn trigger(&mut self, target: PulseTarget) {
        let fade = Some(Fade { elapsed: 0.0 });
        match target {
            PulseTarget::Atrial => self.atrial = fade,
            PulseTarget::Ventricular => self.ventricular = fade,
        }
    }
    /// Clear both fades without emitting anything.
    pub fn reset(&mut self) {
        self.atrial = None;
        self.ventricular = None;
    }
    /// Fades run on unscaled frame time.
    pub fn advance(&mut self, dt: f32) {
        Self::advance_fade(
            &mut self.atrial,
            PulseTarget::Atrial,
            dt,
            self.pulse_duration,
            self.base_alpha,
            &mut self.sink,
        );
        Self::advance_fade(
            &mut self.ventricular,
            PulseTarget::Ventricular,
            dt,
            self.pulse_duration,
            self.base_alpha,
            &mut self.sink,
        );
    }
    fn advance_fade(
        fade: &mut Option<Fade>,
        target: PulseTarget,
        dt: f32,
        duration: f32,
        base_alpha: f32,
        sink: &mut S,
    ) {
        let Some(state) = fade.as_mut() else {
            return;
        };
        state.elapsed += dt;
        if state.elapsed >= duration {
            sink.set_alpha(target, 0.0);
            *fade = None;
        } else {
            let alpha = base_alpha * (1.0 - state.elapsed / duration);
            sink.set_alpha(target, alpha);
        }
    }
}
