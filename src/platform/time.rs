//! Frame pacing
//!
//! The pacer is the only place in the loop that may block.

use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since an arbitrary fixed epoch
    fn now(&self) -> Duration;
    /// Block the calling thread
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only moves when told to. Sleeping advances it instantly.
///
/// Used for headless replays and tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    slept: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward without sleeping
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }

    /// Total time spent in `sleep`
    pub fn slept(&self) -> Duration {
        self.slept
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.slept += duration;
    }
}

/// Caps the tick rate and measures delta-time between ticks
#[derive(Debug)]
pub struct Pacer<C: Clock = SystemClock> {
    clock: C,
    frame_interval: Duration,
    last_tick: Duration,
}

impl<C: Clock> Pacer<C> {
    pub fn new(clock: C, frame_interval: Duration) -> Self {
        let last_tick = clock.now();
        Self {
            clock,
            frame_interval,
            last_tick,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Restart delta measurement from now, discarding time spent idle
    pub fn resync(&mut self) {
        self.last_tick = self.clock.now();
    }

    /// Wait out the rest of the frame interval and return the seconds
    /// elapsed since the previous tick.
    ///
    /// The wait never exceeds one interval. Elapsed time is saturating, so a
    /// clock that runs backwards yields a zero delta.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.clock.now().saturating_sub(self.last_tick);
        let wait = self.frame_interval.saturating_sub(elapsed);
        if !wait.is_zero() {
            self.clock.sleep(wait);
        }

        let now = self.clock.now();
        let delta = now.saturating_sub(self.last_tick);
        self.last_tick = now;
        delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(33);

    #[test]
    fn test_waits_for_remaining_interval() {
        let mut pacer = Pacer::new(ManualClock::new(), FRAME);
        pacer.clock_mut().advance(Duration::from_millis(10));

        let dt = pacer.tick();
        assert_eq!(pacer.clock().slept(), Duration::from_millis(23));
        assert!((dt - 0.033).abs() < 1e-6);
    }

    #[test]
    fn test_no_wait_when_frame_overran() {
        let mut pacer = Pacer::new(ManualClock::new(), FRAME);
        pacer.clock_mut().advance(Duration::from_millis(50));

        let dt = pacer.tick();
        assert_eq!(pacer.clock().slept(), Duration::ZERO);
        assert!((dt - 0.050).abs() < 1e-6);
    }

    #[test]
    fn test_wait_bounded_by_one_interval() {
        let mut pacer = Pacer::new(ManualClock::new(), FRAME);
        pacer.tick();
        pacer.tick();
        // Two immediate ticks each wait one full frame at most
        assert_eq!(pacer.clock().slept(), FRAME * 2);
    }

    #[test]
    fn test_resync_drops_idle_time() {
        let mut pacer = Pacer::new(ManualClock::new(), FRAME);
        pacer.clock_mut().advance(Duration::from_secs(10));
        pacer.resync();

        let dt = pacer.tick();
        assert!((dt - 0.033).abs() < 1e-6);
    }

    #[test]
    fn test_system_clock_sleeps() {
        let mut pacer = Pacer::new(SystemClock::new(), Duration::from_millis(5));
        let dt = pacer.tick();
        assert!(dt >= 0.005);
    }
}
