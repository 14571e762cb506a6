//! Simulated clock for driving a [`Carousel`] in tests.

use super::intent::Intent;
use super::scheduler::Scheduler;
use super::state::Carousel;

#[derive(Debug)]
struct PendingTimer {
    id: u64,
    due: u64,
    period: Option<u64>,
    intent: Intent,
}

/// Virtual-time scheduler. Timers only fire when the test advances time.
#[derive(Debug, Default)]
pub struct SimulatedScheduler {
    now: u64,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

impl SimulatedScheduler {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn live_intervals(&self) -> usize {
        self.timers.iter().filter(|t| t.period.is_some()).count()
    }

    /// Due time of the earliest pending timer carrying `intent`.
    pub fn next_due(&self, intent: Intent) -> Option<u64> {
        self.timers
            .iter()
            .filter(|t| t.intent == intent)
            .map(|t| t.due)
            .min()
    }

    fn push(&mut self, delay: u64, period: Option<u64>, intent: Intent) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.timers.push(PendingTimer {
            id,
            due: self.now + delay,
            period,
            intent,
        });
        id
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time. Intervals are re-armed for their next period.
    fn fire_next(&mut self, until: u64) -> Option<Intent> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[position];
        self.now = timer.due;
        let intent = timer.intent;
        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.remove(position);
            }
        }
        Some(intent)
    }
}

impl Scheduler for SimulatedScheduler {
    type Handle = u64;

    fn every(&mut self, period_ms: u32, intent: Intent) -> u64 {
        let period = u64::from(period_ms);
        self.push(period, Some(period), intent)
    }

    fn after(&mut self, delay_ms: u32, intent: Intent) -> u64 {
        self.push(u64::from(delay_ms), None, intent)
    }

    fn cancel(&mut self, handle: u64) {
        self.timers.retain(|t| t.id != handle);
    }
}

/// Advances virtual time by `ms`, dispatching every timer that falls due.
pub fn advance(carousel: &mut Carousel<SimulatedScheduler>, ms: u64) {
    let until = carousel.scheduler().now() + ms;
    while let Some(intent) = carousel.scheduler_mut().fire_next(until) {
        carousel.dispatch(intent);
    }
    carousel.scheduler_mut().now = until;
}
