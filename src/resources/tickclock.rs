use std::thread;
use std::time::{Duration, Instant};

use crate::platform::FALLBACK_REFRESH_RATE;

/// How often the engine loop should tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickRate {
    /// A multiple of the display's refresh rate.
    PerRefresh(u32),
    /// A fixed rate in Hz. Zero or less runs unthrottled.
    Raw(f32),
}

impl Default for TickRate {
    fn default() -> Self {
        TickRate::PerRefresh(1)
    }
}

impl TickRate {
    /// Ticks per second given the display's reported refresh rate. A refresh
    /// rate of 0 means unknown and is replaced by the fallback.
    pub fn hz(self, refresh_rate: u32) -> f32 {
        match self {
            TickRate::PerRefresh(n) => {
                let refresh = if refresh_rate == 0 {
                    FALLBACK_REFRESH_RATE
                } else {
                    refresh_rate
                };
                n as f32 * refresh as f32
            }
            TickRate::Raw(hz) => hz,
        }
    }
}

/// Paces the loop to a fixed rate by sleeping out the remainder of each
/// interval. Late iterations are not compensated.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Option<Duration>,
    last: Instant,
    /// Seconds between the two most recent ticks.
    pub delta: f32,
    /// Seconds since the clock was created.
    pub elapsed: f32,
}

impl TickClock {
    pub fn new(hz: f32) -> Self {
        // rates too small to express as a Duration also run unthrottled
        let interval = if hz > 0.0 && hz.is_finite() {
            Duration::try_from_secs_f32(1.0 / hz).ok()
        } else {
            None
        };
        TickClock {
            interval,
            last: Instant::now(),
            delta: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Block until one interval has passed since the previous call.
    pub fn wait(&mut self) {
        if let Some(interval) = self.interval {
            let spent = self.last.elapsed();
            if spent < interval {
                thread::sleep(interval - spent);
            }
        }
        let now = Instant::now();
        self.delta = now.duration_since(self.last).as_secs_f32();
        self.elapsed += self.delta;
        self.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_refresh_multiplies_display_rate() {
        assert_eq!(TickRate::PerRefresh(2).hz(60), 120.0);
        assert_eq!(TickRate::PerRefresh(1).hz(144), 144.0);
    }

    #[test]
    fn unknown_refresh_rate_falls_back() {
        assert_eq!(TickRate::PerRefresh(1).hz(0), 60.0);
    }

    #[test]
    fn raw_ignores_display() {
        assert_eq!(TickRate::Raw(30.0).hz(144), 30.0);
    }

    #[test]
    fn zero_rate_is_unthrottled() {
        assert!(TickClock::new(0.0).interval().is_none());
        assert!(TickClock::new(TickRate::PerRefresh(0).hz(60)).interval().is_none());
    }

    #[test]
    fn huge_multiplier_does_not_overflow() {
        let hz = TickRate::PerRefresh(100_000_000).hz(240);
        assert!(hz.is_finite());
        assert_eq!(hz, 100_000_000.0 * 240.0);
        assert_eq!(TickRate::PerRefresh(u32::MAX).hz(u32::MAX), u32::MAX as f32 * u32::MAX as f32);
    }

    #[test]
    fn subnormal_rate_has_no_interval() {
        assert!(TickClock::new(1e-39).interval().is_none());
        assert!(TickClock::new(f32::NAN).interval().is_none());
        assert!(TickClock::new(f32::INFINITY).interval().is_none());
    }

    #[test]
    fn interval_is_reciprocal_of_rate() {
        let clock = TickClock::new(50.0);
        let interval = clock.interval().unwrap();
        assert!((interval.as_secs_f32() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn wait_sleeps_at_least_one_interval() {
        let mut clock = TickClock::new(200.0);
        let start = Instant::now();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(4));
        assert!(clock.delta > 0.0);
        assert_eq!(clock.elapsed, clock.delta);
    }
}
