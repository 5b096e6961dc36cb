use std::thread;
use std::time::Duration;

/// Something that decides when frames happen.
///
/// Hosts plug in their own scheduler; tests fire ticks by hand.
pub trait TickSource {
    /// Calls `callback` with an increasing tick index until the source ends.
    fn subscribe_tick(&mut self, callback: &mut dyn FnMut(u64));
}

/// Fires a fixed number of ticks back to back.
#[derive(Copy, Clone, Debug)]
pub struct ManualTicks {
    count: u64,
}

impl ManualTicks {
    pub fn new(count: u64) -> Self {
        ManualTicks { count }
    }
}

impl TickSource for ManualTicks {
    fn subscribe_tick(&mut self, callback: &mut dyn FnMut(u64)) {
        for tick in 0..self.count {
            callback(tick);
        }
    }
}

/// Fires a tick, then sleeps for `interval`, forever unless a limit is set.
#[derive(Copy, Clone, Debug)]
pub struct IntervalTicks {
    interval: Duration,
    limit: Option<u64>,
}

impl IntervalTicks {
    pub fn new(interval: Duration) -> Self {
        IntervalTicks {
            interval,
            limit: None,
        }
    }

    /// `fps == 0` means no pause between ticks.
    pub fn per_second(fps: u32) -> Self {
        let interval = match fps {
            0 => Duration::ZERO,
            fps => Duration::from_secs(1) / fps,
        };
        IntervalTicks::new(interval)
    }

    pub fn limit(mut self, ticks: u64) -> Self {
        self.limit = Some(ticks);
        self
    }
}

impl TickSource for IntervalTicks {
    fn subscribe_tick(&mut self, callback: &mut dyn FnMut(u64)) {
        let mut tick = 0;
        while self.limit.map_or(true, |limit| tick < limit) {
            callback(tick);
            tick += 1;
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_ticks_count_up() {
        let mut seen = Vec::new();
        ManualTicks::new(4).subscribe_tick(&mut |t| seen.push(t));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn interval_ticks_stop_at_limit() {
        let mut seen = 0;
        IntervalTicks::per_second(0)
            .limit(5)
            .subscribe_tick(&mut |_| seen += 1);
        assert_eq!(seen, 5);
    }

    #[test]
    fn fps_to_interval() {
        assert_eq!(
            IntervalTicks::per_second(50).interval,
            Duration::from_millis(20)
        );
        assert!(IntervalTicks::per_second(0).interval.is_zero());
    }
}
