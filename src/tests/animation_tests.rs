use std::time::{Duration, Instant};

use paperclips_core::config::SpinnerConfig;
use paperclips_core::easing::Easing;
use paperclips_core::timeline::AngleTimeline;

use crate::animation::AngleAnimator;

fn animator_for(config: &SpinnerConfig) -> AngleAnimator {
    AngleAnimator::new(AngleTimeline::paperclip(
        config.phase_duration(),
        config.easing,
    ))
}

#[test]
fn test_compact_preset_phase_endpoints() {
    let mut a = animator_for(&SpinnerConfig::compact());
    let t0 = Instant::now();
    a.start(t0);

    assert_eq!(a.sample(t0), Some(60.0));
    let mid = a.sample(t0 + Duration::from_millis(1900)).unwrap();
    assert!((mid - 240.0).abs() < 0.1);
    let wrapped = a.sample(t0 + Duration::from_millis(3800)).unwrap();
    assert!((wrapped - 60.0).abs() < 0.1);
}

#[test]
fn test_angle_periodic_over_many_loops() {
    let mut a = animator_for(&SpinnerConfig::classic());
    let t0 = Instant::now();
    a.start(t0);

    let reference = a.sample(t0 + Duration::from_millis(1234)).unwrap();
    for loops in 1..5u64 {
        let again = a
            .sample(t0 + Duration::from_millis(1234 + loops * 4000))
            .unwrap();
        assert!(
            (reference - again).abs() < 0.01,
            "loop {loops} drifted: {reference} vs {again}"
        );
    }
}

#[test]
fn test_easing_is_parameterized_not_hardcoded() {
    let t0 = Instant::now();
    let quarter = Duration::from_millis(475); // a quarter of the 1900 ms phase

    let mut linear = AngleAnimator::new(AngleTimeline::paperclip(
        Duration::from_millis(1900),
        Easing::Linear,
    ));
    let mut eased = AngleAnimator::new(AngleTimeline::paperclip(
        Duration::from_millis(1900),
        Easing::EASE_IN_OUT_BEZIER,
    ));
    linear.start(t0);
    eased.start(t0);

    let linear_angle = linear.sample(t0 + quarter).unwrap();
    let eased_angle = eased.sample(t0 + quarter).unwrap();
    // Ease-in-out lags a linear ramp in the first half of the phase
    assert!(eased_angle < linear_angle);
    // Both land on the same endpoint
    let end = t0 + Duration::from_millis(1900);
    assert!((linear.sample(end).unwrap() - eased.sample(end).unwrap()).abs() < 0.1);
}

#[test]
fn test_phase_a_monotonic_through_driver() {
    let mut a = animator_for(&SpinnerConfig::compact());
    let t0 = Instant::now();
    a.start(t0);

    let mut prev = a.sample(t0).unwrap();
    for ms in (0..1900).step_by(25) {
        let angle = a.sample(t0 + Duration::from_millis(ms)).unwrap();
        assert!(angle >= prev - 1e-3, "angle dipped at {ms} ms");
        prev = angle;
    }
}

#[test]
fn test_cancelled_animator_stays_silent() {
    let mut a = animator_for(&SpinnerConfig::classic());
    let t0 = Instant::now();
    a.start(t0);
    a.cancel();

    // Simulate further scheduler ticks after cancellation
    for tick in 1..=10u64 {
        assert!(a.sample(t0 + Duration::from_millis(tick * 16)).is_none());
    }
}
