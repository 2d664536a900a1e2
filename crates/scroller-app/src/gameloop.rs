//! fixed step tick scheduling

use std::time::{Duration, Instant};

/// ticks run per second when none is specified
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// how many ticks a single redraw may catch up before the backlog is dropped
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// decides how many update ticks fit in the time elapsed between redraws
#[derive(Debug, Clone)]
pub struct GameLoop
{
    fixed_step: Duration,
    accumulator: Duration,
    last: Option<Instant>,
}

impl Default for GameLoop
{
    fn default() -> Self
    {
        Self::new(DEFAULT_TICKS_PER_SECOND)
    }
}

impl GameLoop
{
    /// a zero rate is treated as one tick per second
    pub fn new(ticks_per_second: u32) -> Self
    {
        Self
        {
            fixed_step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            last: None,
        }
    }

    pub fn fixed_step(&self) -> Duration
    {
        self.fixed_step
    }

    /// returns the amount of ticks to run for a redraw happening at `now`,
    /// the very first redraw always runs exactly one
    pub fn ticks(&mut self, now: Instant) -> u32
    {
        let Some(last) = self.last.replace(now)
        else
        {
            return 1
        };

        self.accumulator += now.saturating_duration_since(last);

        let mut ticks = 0;

        while self.accumulator >= self.fixed_step && ticks < MAX_TICKS_PER_FRAME
        {
            self.accumulator -= self.fixed_step;
            ticks += 1;
        }

        if self.accumulator >= self.fixed_step
        {
            log::debug!("dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO
        }

        ticks
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn first_redraw_runs_one_tick()
    {
        let mut gameloop = GameLoop::new(60);
        assert_eq!(gameloop.ticks(Instant::now()), 1);
    }

    #[test]
    fn elapsed_time_is_split_in_fixed_steps()
    {
        let mut gameloop = GameLoop::new(10);
        let start = Instant::now();
        gameloop.ticks(start);

        assert_eq!(gameloop.ticks(start + Duration::from_millis(50)), 0);
        assert_eq!(gameloop.ticks(start + Duration::from_millis(100)), 1);
        assert_eq!(gameloop.ticks(start + Duration::from_millis(350)), 2);
        // the 50ms left over carry on to the next redraw
        assert_eq!(gameloop.ticks(start + Duration::from_millis(400)), 1);
    }

    #[test]
    fn long_stalls_are_capped()
    {
        let mut gameloop = GameLoop::new(60);
        let start = Instant::now();
        gameloop.ticks(start);

        assert_eq!(gameloop.ticks(start + Duration::from_secs(10)), MAX_TICKS_PER_FRAME);
        assert_eq!(gameloop.ticks(start + Duration::from_secs(10)), 0);
    }

    #[test]
    fn zero_rate_is_clamped()
    {
        assert_eq!(GameLoop::new(0).fixed_step(), Duration::from_secs(1));
        assert_eq!(GameLoop::default().fixed_step(), Duration::from_secs(1) / 60);
    }
}
