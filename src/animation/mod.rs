// Animation driver for the spinner angle.
//
// The timeline itself is a pure function of elapsed time; this driver only
// anchors it to a wall-clock start instant and owns cancellation. Because
// looping is period arithmetic inside the timeline, there is no completion
// listener to detach or re-subscribe between iterations.

use std::time::Instant;

use paperclips_core::timeline::AngleTimeline;

#[derive(Debug, Clone)]
pub struct AngleAnimator {
    timeline: AngleTimeline,
    started_at: Option<Instant>,
}

impl AngleAnimator {
    pub fn new(timeline: AngleTimeline) -> Self {
        Self {
            timeline,
            started_at: None,
        }
    }

    pub fn timeline(&self) -> &AngleTimeline {
        &self.timeline
    }

    /// Start (or restart) the loop from phase A.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stop the loop. Idempotent; a stopped animator never produces
    /// another sample until started again.
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current angle, or `None` when not running.
    pub fn sample(&self, now: Instant) -> Option<f32> {
        let started = self.started_at?;
        Some(self.timeline.angle_at(now.duration_since(started)))
    }
}
