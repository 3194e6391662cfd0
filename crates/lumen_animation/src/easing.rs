//! Easing functions
//!
//! Maps normalized time (0.0 to 1.0) to eased progress. The set mirrors the
//! curves the site choreography actually uses: quadratic and cubic outs for
//! entrances, sine in-out for ambient oscillation, and an overshooting
//! back-out for card pops.

/// An easing curve applied to normalized animation time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// No easing, constant rate
    #[default]
    Linear,
    /// Quadratic ease-in (slow start)
    QuadIn,
    /// Quadratic ease-out (slow end)
    QuadOut,
    /// Quadratic ease-in-out
    QuadInOut,
    /// Cubic ease-out (sharper deceleration than QuadOut)
    CubicOut,
    /// Cubic ease-in-out (used for animated anchor scrolling)
    CubicInOut,
    /// Sinusoidal ease-in-out (ambient float/pulse loops)
    SineInOut,
    /// Overshoots past the target, then settles back
    BackOut,
}

impl Easing {
    /// Apply the curve to a normalized time value
    ///
    /// Input is clamped to [0.0, 1.0]. Output is in [0.0, 1.0] for every
    /// curve except `BackOut`, which briefly exceeds 1.0 before settling.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::SineInOut,
            Easing::BackOut,
        ] {
            assert!(easing.apply(0.0).abs() < EPS, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
        assert!((Easing::BackOut.apply(5.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_quad_out_decelerates() {
        // Ease-out covers more than half the distance by the midpoint
        assert!(Easing::QuadOut.apply(0.5) > 0.5);
        assert!(Easing::CubicOut.apply(0.5) > Easing::QuadOut.apply(0.5));
    }

    #[test]
    fn test_back_out_overshoots() {
        let mut max = 0.0f32;
        for i in 0..=100 {
            max = max.max(Easing::BackOut.apply(i as f32 / 100.0));
        }
        assert!(max > 1.0);
    }

    #[test]
    fn test_sine_in_out_symmetric() {
        let a = Easing::SineInOut.apply(0.25);
        let b = Easing::SineInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < EPS);
    }
}
