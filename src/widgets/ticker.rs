//! Auto-scrolling photo strip: the offset ping-pongs between 0 and the
//! track's maximum, advancing one step per animation frame. A touch pauses
//! the motion; it resumes a fixed delay after release.

use std::time::{Duration, Instant};

/// Delay between releasing a touch and the track moving again.
pub const RESUME_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct AutoScrollTrack {
    offset: f32,
    max: f32,
    step: f32,
    forward: bool,
    engaged: bool,
    resume_at: Option<Instant>,
}

impl AutoScrollTrack {
    pub fn new(max: f32, step: f32) -> Self {
        Self {
            offset: 0.0,
            max: max.max(0.0),
            // direction is carried by `forward`, so the step is a magnitude
            step: step.abs(),
            forward: true,
            engaged: false,
            resume_at: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// One animation-frame advance. Does nothing while a touch is engaged
    /// or the post-release delay has not elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.engaged || self.max == 0.0 {
            return;
        }
        if let Some(at) = self.resume_at {
            if now < at {
                return;
            }
            self.resume_at = None;
        }
        if self.forward {
            self.offset += self.step;
            if self.offset >= self.max {
                self.offset = self.max;
                self.forward = false;
            }
        } else {
            self.offset -= self.step;
            if self.offset <= 0.0 {
                self.offset = 0.0;
                self.forward = true;
            }
        }
    }

    pub fn touch_start(&mut self) {
        self.engaged = true;
        self.resume_at = None;
    }

    pub fn touch_end(&mut self, now: Instant) {
        self.engaged = false;
        self.resume_at = Some(now + RESUME_DELAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_one_step_per_tick() {
        let mut track = AutoScrollTrack::new(100.0, 1.5);
        let now = Instant::now();
        track.tick(now);
        track.tick(now);
        assert_eq!(track.offset(), 3.0);
    }

    #[test]
    fn reverses_at_both_bounds() {
        let mut track = AutoScrollTrack::new(3.0, 2.0);
        let now = Instant::now();
        track.tick(now); // 2.0, forward
        track.tick(now); // clamped at 3.0, reversed
        assert_eq!(track.offset(), 3.0);
        track.tick(now); // 1.0, backward
        assert_eq!(track.offset(), 1.0);
        track.tick(now); // clamped at 0.0, forward again
        assert_eq!(track.offset(), 0.0);
        track.tick(now);
        assert_eq!(track.offset(), 2.0);
    }

    #[test]
    fn stays_within_bounds_over_many_frames() {
        let mut track = AutoScrollTrack::new(10.0, 0.7);
        let now = Instant::now();
        for _ in 0..1000 {
            track.tick(now);
            assert!(track.offset() >= 0.0 && track.offset() <= 10.0);
        }
    }

    #[test]
    fn paused_while_a_touch_is_engaged() {
        let mut track = AutoScrollTrack::new(100.0, 1.0);
        let now = Instant::now();
        track.tick(now);
        track.touch_start();
        track.tick(now);
        track.tick(now);
        assert_eq!(track.offset(), 1.0);
    }

    #[test]
    fn resumes_only_after_the_release_delay() {
        let mut track = AutoScrollTrack::new(100.0, 1.0);
        let released = Instant::now();
        track.touch_start();
        track.touch_end(released);
        track.tick(released + Duration::from_millis(500));
        assert_eq!(track.offset(), 0.0);
        track.tick(released + RESUME_DELAY);
        assert_eq!(track.offset(), 1.0);
    }

    #[test]
    fn negative_step_still_moves_within_bounds() {
        let mut track = AutoScrollTrack::new(10.0, -1.0);
        let now = Instant::now();
        track.tick(now);
        assert_eq!(track.offset(), 1.0);
        for _ in 0..100 {
            track.tick(now);
            assert!(track.offset() >= 0.0 && track.offset() <= 10.0);
        }
    }

    #[test]
    fn zero_length_track_never_moves() {
        let mut track = AutoScrollTrack::new(0.0, 5.0);
        let now = Instant::now();
        track.tick(now);
        assert_eq!(track.offset(), 0.0);
    }
}
