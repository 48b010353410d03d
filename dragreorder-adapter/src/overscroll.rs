use crate::{Easing, Tween};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollJob {
    tween: Tween,
    applied: f32,
}

/// Gate for auto-scroll adjustments while dragging.
///
/// At most one job runs at a time. The adapter calls `tick(now_ms)` every frame and scrolls the
/// real list by the returned delta until the job retires.
#[derive(Clone, Debug, PartialEq)]
pub struct OverScroll {
    job: Option<ScrollJob>,
    duration_ms: u64,
    easing: Easing,
}

impl Default for OverScroll {
    fn default() -> Self {
        Self::new(crate::ReorderOptions::DEFAULT_OVER_SCROLL_DURATION_MS, Easing::Linear)
    }
}

impl OverScroll {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            job: None,
            duration_ms,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    pub fn cancel(&mut self) {
        if self.job.take().is_some() {
            atrace!("OverScroll::cancel");
        }
    }

    /// The part of the active job not yet handed out by `tick`.
    pub fn remaining(&self) -> f32 {
        self.job
            .map_or(0.0, |job| job.tween.to - job.applied)
    }

    /// Requests a scroll by `amount`.
    ///
    /// Returns `true` when a new job was started. While a job is active the request is
    /// suppressed. A zero amount while idle starts nothing.
    pub fn request(&mut self, amount: f32, now_ms: u64) -> bool {
        if self.is_active() || amount == 0.0 {
            return false;
        }
        atrace!(amount, now_ms, "OverScroll::request");
        self.job = Some(ScrollJob {
            tween: Tween::new(0.0, amount, now_ms, self.duration_ms, self.easing),
            applied: 0.0,
        });
        true
    }

    /// Advances the active job.
    ///
    /// Returns the delta to scroll by since the previous tick, or `None` when idle. The deltas of
    /// one job add up to the requested amount.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let job = self.job.as_mut()?;
        let target = job.tween.sample(now_ms);
        let delta = target - job.applied;
        job.applied = target;

        if job.tween.is_done(now_ms) {
            self.job = None;
        }
        Some(delta)
    }
}
