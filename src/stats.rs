use std::time::{Duration, Instant};

/// Collision totals for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionSnapshot {
    /// 1-based period index.
    pub period: usize,
    pub male_collisions: u32,
    pub female_collisions: u32,
}

/// Wall-clock reporting timer; fires once the period has elapsed since the
/// previous firing.
#[derive(Debug, Clone)]
pub struct PeriodTimer {
    period: Duration,
    started: Instant,
}

impl PeriodTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        PeriodTimer { period, started: now }
    }

    /// Returns true and restarts the timer from `now` when the period is up.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.started) >= self.period {
            self.started = now;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollisionLog {
    snapshots: Vec<CollisionSnapshot>,
}

impl CollisionLog {
    pub fn record(&mut self, male_collisions: u32, female_collisions: u32) -> CollisionSnapshot {
        let snapshot = CollisionSnapshot {
            period: self.snapshots.len() + 1,
            male_collisions,
            female_collisions,
        };
        self.snapshots.push(snapshot);
        snapshot
    }

    pub fn snapshots(&self) -> &[CollisionSnapshot] {
        &self.snapshots
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = PeriodTimer::new(Duration::from_secs(30), start);
        assert!(!timer.poll(start + Duration::from_secs(29)));
        assert!(timer.poll(start + Duration::from_secs(30)));
        assert!(!timer.poll(start + Duration::from_secs(45)));
        assert!(timer.poll(start + Duration::from_secs(61)));
    }

    #[test]
    fn periods_are_numbered_from_one() {
        let mut log = CollisionLog::default();
        assert!(log.is_empty());
        log.record(2, 0);
        let second = log.record(1, 4);
        assert_eq!(second.period, 2);
        assert_eq!(log.snapshots()[0].male_collisions, 2);
    }
}
