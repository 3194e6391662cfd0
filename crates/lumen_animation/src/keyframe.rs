//! Keyframe animations
//!
//! A `KeyframeAnimation` interpolates a scalar value through a sorted set of
//! keyframes over a fixed duration, with optional start delay, finite or
//! infinite iteration, and yoyo (forward/reverse alternating) playback.
//! Yoyo with infinite iterations is what drives the ambient loops: floating
//! hero ornaments, the pulsing scroll indicator, the loading spinner.

use crate::easing::Easing;

/// A single keyframe: a value at a normalized time position
#[derive(Clone, Copy, Debug)]
pub struct Keyframe {
    /// Position within the animation, 0.0 to 1.0
    pub time: f32,
    /// Value at this position
    pub value: f32,
    /// Easing applied over the segment that ends at this keyframe
    pub easing: Easing,
}

/// Infinite iteration count for `iterations`
pub const INFINITE: i32 = -1;

/// A timed scalar animation over a set of keyframes
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    duration_ms: f32,
    keyframes: Vec<Keyframe>,
    delay_ms: f32,
    /// Elapsed time; negative while waiting out the delay
    elapsed_ms: f32,
    playing: bool,
    /// Total iterations to play; `INFINITE` loops forever
    iterations: i32,
    completed: i32,
    yoyo: bool,
    reversed: bool,
}

impl KeyframeAnimation {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms.max(1) as f32,
            keyframes: Vec::new(),
            delay_ms: 0.0,
            elapsed_ms: 0.0,
            playing: false,
            iterations: 1,
            completed: 0,
            yoyo: false,
            reversed: false,
        }
    }

    /// Add a keyframe at normalized time `time` (builder style)
    pub fn keyframe(mut self, time: f32, value: f32, easing: Easing) -> Self {
        let kf = Keyframe {
            time: time.clamp(0.0, 1.0),
            value,
            easing,
        };
        // Keep sorted on insert so sampling can scan in order
        let idx = self
            .keyframes
            .iter()
            .position(|k| k.time > kf.time)
            .unwrap_or(self.keyframes.len());
        self.keyframes.insert(idx, kf);
        self
    }

    /// Convenience: a two-keyframe animation from `from` to `to`
    pub fn tween(duration_ms: u32, from: f32, to: f32, easing: Easing) -> Self {
        Self::new(duration_ms)
            .keyframe(0.0, from, Easing::Linear)
            .keyframe(1.0, to, easing)
    }

    /// Delay before playback begins, in milliseconds
    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms as f32;
        self
    }

    /// Number of iterations; `INFINITE` (-1) loops forever
    pub fn iterations(mut self, count: i32) -> Self {
        self.iterations = count;
        self
    }

    /// Loop forever
    pub fn loop_infinite(mut self) -> Self {
        self.iterations = INFINITE;
        self
    }

    /// Reverse direction on each iteration (ping-pong)
    pub fn yoyo(mut self, enabled: bool) -> Self {
        self.yoyo = enabled;
        self
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Start (or restart) playback from the beginning, honoring the delay
    pub fn start(&mut self) {
        self.elapsed_ms = -self.delay_ms;
        self.completed = 0;
        self.reversed = false;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < 0.0 {
            return; // still in the delay window
        }

        while self.elapsed_ms >= self.duration_ms {
            self.completed += 1;
            let more = self.iterations == INFINITE || self.completed < self.iterations;
            if more {
                if self.yoyo {
                    self.reversed = !self.reversed;
                }
                self.elapsed_ms -= self.duration_ms;
            } else {
                self.elapsed_ms = self.duration_ms;
                self.playing = false;
                break;
            }
        }
    }

    /// Playback progress within the current iteration, 0.0 to 1.0
    ///
    /// Accounts for yoyo reversal: on reverse iterations progress runs
    /// from 1.0 back down to 0.0.
    pub fn progress(&self) -> f32 {
        let raw = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        if self.reversed {
            1.0 - raw
        } else {
            raw
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        self.sample(self.progress())
    }

    /// Sample the keyframe track at an arbitrary progress
    pub fn sample(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        let Some(first) = self.keyframes.first() else {
            return 0.0;
        };
        if p <= first.time {
            return first.value;
        }
        for pair in self.keyframes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if p <= b.time {
                let span = (b.time - a.time).max(f32::EPSILON);
                let local = (p - a.time) / span;
                return a.value + (b.value - a.value) * b.easing.apply(local);
            }
        }
        self.keyframes.last().map(|k| k.value).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_once_and_stops() {
        let mut anim = KeyframeAnimation::tween(1000, 0.0, 100.0, Easing::Linear);
        anim.start();
        assert!(anim.is_playing());
        assert_eq!(anim.value(), 0.0);

        anim.tick(500.0);
        assert!((anim.value() - 50.0).abs() < 0.01);

        anim.tick(600.0);
        assert!(!anim.is_playing());
        assert_eq!(anim.value(), 100.0);
    }

    #[test]
    fn test_delay_holds_initial_value() {
        let mut anim = KeyframeAnimation::tween(1000, 5.0, 10.0, Easing::Linear).delay(300);
        anim.start();

        anim.tick(200.0);
        assert!(anim.is_playing());
        assert_eq!(anim.value(), 5.0);

        anim.tick(100.0);
        anim.tick(500.0);
        assert!((anim.value() - 7.5).abs() < 0.01);
    }

    #[test]
    fn test_infinite_yoyo_oscillates() {
        let mut anim = KeyframeAnimation::tween(100, 0.0, 1.0, Easing::Linear)
            .loop_infinite()
            .yoyo(true);
        anim.start();

        anim.tick(50.0);
        assert!((anim.value() - 0.5).abs() < 0.01);

        // Into the second (reversed) iteration: 150ms -> halfway back down
        anim.tick(100.0);
        assert!(anim.is_playing());
        assert!((anim.value() - 0.5).abs() < 0.01);

        // 175ms -> a quarter remaining on the reverse pass
        anim.tick(25.0);
        assert!((anim.value() - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_finite_iterations_complete() {
        let mut anim = KeyframeAnimation::tween(100, 0.0, 1.0, Easing::Linear).iterations(3);
        anim.start();
        anim.tick(250.0);
        assert!(anim.is_playing());
        anim.tick(100.0);
        assert!(!anim.is_playing());
    }

    #[test]
    fn test_multi_keyframe_sampling() {
        let anim = KeyframeAnimation::new(1000)
            .keyframe(0.0, 0.0, Easing::Linear)
            .keyframe(0.5, 100.0, Easing::Linear)
            .keyframe(1.0, 50.0, Easing::Linear);

        assert_eq!(anim.sample(0.0), 0.0);
        assert!((anim.sample(0.25) - 50.0).abs() < 0.01);
        assert_eq!(anim.sample(0.5), 100.0);
        assert!((anim.sample(0.75) - 75.0).abs() < 0.01);
        assert_eq!(anim.sample(1.0), 50.0);
    }

    #[test]
    fn test_keyframes_sort_on_insert() {
        let anim = KeyframeAnimation::new(1000)
            .keyframe(1.0, 10.0, Easing::Linear)
            .keyframe(0.0, 0.0, Easing::Linear);
        assert_eq!(anim.sample(0.0), 0.0);
        assert_eq!(anim.sample(1.0), 10.0);
    }

    #[test]
    fn test_empty_track_samples_zero() {
        let anim = KeyframeAnimation::new(500);
        assert_eq!(anim.sample(0.5), 0.0);
    }
}
