// Frame pacing
//
// Blocks the loop until one frame budget has passed since the previous tick
// and reports how long the frame really took.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(frame_budget: Duration) -> Self {
        FrameClock {
            frame_budget,
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Wait out the rest of the frame budget, then return the measured
    /// elapsed seconds since the previous tick (or since creation).
    ///
    /// The result comes from wall time, not from the budget, so a slow
    /// frame reports a larger `dt`.
    pub fn tick(&mut self) -> f32 {
        let spent = self.last_tick.elapsed();
        if let Some(remaining) = self.frame_budget.checked_sub(spent) {
            thread::sleep(remaining);
        }

        let now = Instant::now();
        let delta_time = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frames += 1;

        log::trace!("frame {}: dt={:.4}s", self.frames, delta_time);
        delta_time
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
