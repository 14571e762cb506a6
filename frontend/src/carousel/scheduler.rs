use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

use super::intent::Intent;

/// Creates timers that post an [`Intent`] back to the slider when they fire.
///
/// The slider keeps every returned handle and gives it back through
/// [`Scheduler::cancel`]; a handle that is cancelled never fires again.
pub trait Scheduler {
    type Handle;

    /// Fires `intent` every `period_ms` until cancelled.
    fn every(&mut self, period_ms: u32, intent: Intent) -> Self::Handle;

    /// Fires `intent` once after `delay_ms`.
    fn after(&mut self, delay_ms: u32, intent: Intent) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Browser scheduler backed by `gloo-timers`, delivering intents to a Yew
/// component through its link.
pub struct GlooScheduler {
    sink: Callback<Intent>,
}

impl GlooScheduler {
    pub fn new(sink: Callback<Intent>) -> Self {
        Self { sink }
    }
}

pub enum GlooTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn every(&mut self, period_ms: u32, intent: Intent) -> GlooTimer {
        let sink = self.sink.clone();
        GlooTimer::Interval(Interval::new(period_ms, move || sink.emit(intent)))
    }

    fn after(&mut self, delay_ms: u32, intent: Intent) -> GlooTimer {
        let sink = self.sink.clone();
        GlooTimer::Timeout(Timeout::new(delay_ms, move || sink.emit(intent)))
    }

    fn cancel(&mut self, handle: GlooTimer) {
        // Dropping a gloo timer clears it.
        match handle {
            GlooTimer::Interval(interval) => drop(interval),
            GlooTimer::Timeout(timeout) => drop(timeout),
        }
    }
}
