//! The looping two-phase angle timeline.
//!
//! The spinner angle runs 60° -> 240° and then 240° -> 420°, which wraps
//! back to 60° modulo a full turn. Repetition is plain period arithmetic:
//! `angle_at` is a pure function of elapsed time, so there is no completion
//! listener to re-subscribe (or leak) between loop iterations.

use core::time::Duration;

use crate::easing::{lerp, Easing};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub from_deg: f32,
    pub to_deg: f32,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AngleTimeline {
    phases: [Phase; 2],
    easing: Easing,
}

impl AngleTimeline {
    /// The paperclip timeline: 60° -> 240° -> 420°, equal phase durations.
    pub fn paperclip(phase_duration: Duration, easing: Easing) -> Self {
        Self {
            phases: [
                Phase {
                    from_deg: 60.0,
                    to_deg: 240.0,
                    duration: phase_duration,
                },
                Phase {
                    from_deg: 240.0,
                    to_deg: 420.0,
                    duration: phase_duration,
                },
            ],
            easing,
        }
    }

    pub fn phases(&self) -> &[Phase; 2] {
        &self.phases
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn start_angle(&self) -> f32 {
        self.phases[0].from_deg
    }

    /// One full loop through both phases.
    pub fn period(&self) -> Duration {
        self.phases[0].duration + self.phases[1].duration
    }

    /// Angle after `elapsed` time, wrapping at the period boundary.
    pub fn angle_at(&self, elapsed: Duration) -> f32 {
        let period = self.period().as_secs_f64();
        if period <= 0.0 {
            return self.start_angle();
        }
        let mut t = elapsed.as_secs_f64() % period;
        for phase in &self.phases {
            let d = phase.duration.as_secs_f64();
            if t < d && d > 0.0 {
                let eased = self.easing.apply((t / d) as f32);
                return lerp(phase.from_deg, phase.to_deg, eased);
            }
            t -= d;
        }
        // t landed exactly on the period boundary
        self.start_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn linear() -> AngleTimeline {
        AngleTimeline::paperclip(Duration::from_millis(2000), Easing::Linear)
    }

    #[test]
    fn test_phase_endpoints() {
        let t = linear();
        assert_eq!(t.angle_at(Duration::ZERO), 60.0);
        assert_eq!(t.angle_at(Duration::from_millis(2000)), 240.0);
        // Just before phase B completes the angle approaches 420
        assert!(t.angle_at(Duration::from_millis(3999)) > 419.0);
    }

    #[test]
    fn test_period_and_wraparound() {
        let t = linear();
        assert_eq!(t.period(), Duration::from_millis(4000));
        assert_eq!(t.angle_at(Duration::from_millis(4000)), 60.0);
        let a = t.angle_at(Duration::from_millis(700));
        let b = t.angle_at(Duration::from_millis(4700));
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_phase_a_monotonic_increasing() {
        let t = AngleTimeline::paperclip(Duration::from_millis(1900), Easing::EASE_IN_OUT_BEZIER);
        let mut prev = t.angle_at(Duration::ZERO);
        for ms in (10..1900).step_by(10) {
            let a = t.angle_at(Duration::from_millis(ms));
            assert!(a >= prev - 1e-3, "phase A dipped at {ms} ms");
            prev = a;
        }
    }

    #[test]
    fn test_phase_b_monotonic_increasing() {
        let t = AngleTimeline::paperclip(Duration::from_millis(1900), Easing::EASE_IN_OUT_BEZIER);
        let mut prev = t.angle_at(Duration::from_millis(1900));
        assert_eq!(prev, 240.0);
        for ms in (1910..3800).step_by(10) {
            let a = t.angle_at(Duration::from_millis(ms));
            assert!(a >= prev - 1e-3, "phase B dipped at {ms} ms");
            prev = a;
        }
    }

    #[test]
    fn test_full_turn_wraps_to_start() {
        // 420° is 60° modulo a full turn, so the loop restart is seamless
        let t = linear();
        let end = t.angle_at(Duration::from_millis(3999));
        let restart = t.angle_at(Duration::from_millis(4000));
        assert!((end - 360.0 - restart).abs() < 0.2);
    }

    #[test]
    fn test_zero_duration_returns_start() {
        let t = AngleTimeline::paperclip(Duration::ZERO, Easing::Linear);
        assert_eq!(t.angle_at(Duration::from_millis(123)), 60.0);
    }

    proptest! {
        #[test]
        fn prop_angle_bounded(ms in 0u64..1_000_000) {
            let t = linear();
            let a = t.angle_at(Duration::from_millis(ms));
            prop_assert!((60.0..=420.0).contains(&a));
        }

        #[test]
        fn prop_periodic(ms in 0u64..4000, loops in 1u64..10) {
            let t = linear();
            let a = t.angle_at(Duration::from_millis(ms));
            let b = t.angle_at(Duration::from_millis(ms + loops * 4000));
            prop_assert!((a - b).abs() < 1e-2);
        }
    }
}
