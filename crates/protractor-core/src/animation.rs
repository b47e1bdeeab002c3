//! Frame clock, value tracker and ramps.
//!
//! Animations are sampled on a virtual clock: a ramp of duration `d` at
//! `fps` frames per second yields `ceil(d * fps)` frames whose progress runs
//! from `1/n` to exactly `1.0`.

use serde::{Deserialize, Serialize};

/// Default frame rate.
pub const DEFAULT_FPS: u32 = 60;

/// Steepness of the [`RateFunction::Smooth`] sigmoid.
const SMOOTH_INFLECTION: f64 = 10.0;

/// A continuously settable scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueTracker {
    value: f64,
}

impl ValueTracker {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn get(&self) -> f64 {
        self.value
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }
}

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateFunction {
    /// Constant speed.
    Linear,
    /// Slow in, slow out.
    #[default]
    Smooth,
}

impl RateFunction {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            RateFunction::Linear => t,
            RateFunction::Smooth => {
                let error = sigmoid(-SMOOTH_INFLECTION / 2.0);
                let raw = sigmoid(SMOOTH_INFLECTION * (t - 0.5));
                ((raw - error) / (1.0 - 2.0 * error)).clamp(0.0, 1.0)
            }
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Virtual clock that turns durations into frame counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    pub fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self { fps: fps.max(1) }
    }

    /// Seconds covered by one frame.
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.fps.max(1) as f64
    }

    /// Number of frames needed to cover `duration` seconds.
    /// Zero for non-positive durations, otherwise at least one.
    pub fn frame_count(&self, duration: f64) -> usize {
        if duration <= 0.0 || !duration.is_finite() {
            return 0;
        }
        // Guard against 1.5 * 60 landing a hair above 90.
        let exact = duration * self.fps.max(1) as f64;
        ((exact - 1e-9).ceil() as usize).max(1)
    }

    /// Linear progress of each frame of a `duration`-long animation.
    pub fn progress(&self, duration: f64) -> impl Iterator<Item = f64> + use<> {
        let n = self.frame_count(duration);
        (1..=n).map(move |k| k as f64 / n as f64)
    }
}

/// Animate a scalar from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
    pub rate: RateFunction,
}

impl Ramp {
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            rate: RateFunction::default(),
        }
    }

    pub fn with_rate(mut self, rate: RateFunction) -> Self {
        self.rate = rate;
        self
    }

    /// Value at linear progress `t`.
    pub fn sample(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * self.rate.apply(t)
    }

    /// Per-frame values under `clock`, ending exactly on `to`.
    pub fn frames<'a>(&'a self, clock: &FrameClock) -> impl Iterator<Item = f64> + use<'a> {
        clock.progress(self.duration).map(move |t| self.sample(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_get_set() {
        let mut tracker = ValueTracker::default();
        assert!(tracker.get().abs() < f64::EPSILON);
        tracker.set(1.5);
        assert!((tracker.get() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rate_endpoints() {
        for rate in [RateFunction::Linear, RateFunction::Smooth] {
            assert!(rate.apply(0.0).abs() < 1e-12);
            assert!((rate.apply(1.0) - 1.0).abs() < 1e-12);
        }
        assert!((RateFunction::Smooth.apply(0.5) - 0.5).abs() < 1e-12);
        assert!(RateFunction::Smooth.apply(0.1) < 0.1);
    }

    #[test]
    fn test_frame_count() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_count(2.0), 120);
        assert_eq!(clock.frame_count(1.5), 90);
        assert_eq!(clock.frame_count(0.001), 1);
        assert_eq!(clock.frame_count(0.0), 0);
        assert_eq!(clock.frame_count(-1.0), 0);
    }

    #[test]
    fn test_ramp_ends_on_target() {
        let clock = FrameClock::new(30);
        let ramp = Ramp::new(0.0, 163f64.to_radians(), 4.0 / 360.0 * 163.0)
            .with_rate(RateFunction::Linear);
        let values: Vec<f64> = ramp.frames(&clock).collect();
        assert_eq!(values.len(), clock.frame_count(ramp.duration));
        assert!((values.last().copied().unwrap() - 163f64.to_radians()).abs() < 1e-12);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linear_ramp_is_even() {
        let clock = FrameClock::new(4);
        let ramp = Ramp::new(0.0, 1.0, 1.0).with_rate(RateFunction::Linear);
        let values: Vec<f64> = ramp.frames(&clock).collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0]);
    }
}
