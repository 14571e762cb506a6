//! Headless slider state machine.
//!
//! Everything that happens to a slider (timer ticks, clicks, key presses,
//! swipes, visibility changes) arrives as an [`Intent`] and is applied by
//! [`Carousel::dispatch`]. Timers are created through a [`scheduler::Scheduler`] so the
//! same state machine runs on `gloo-timers` in the browser and on a simulated
//! clock in tests.

pub mod config;
pub mod gesture;
pub mod intent;
pub mod lazy;
pub mod scheduler;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use config::CarouselConfig;
pub use intent::{Intent, Point};
pub use lazy::LazyImages;
pub use scheduler::GlooScheduler;
pub use state::{Carousel, SlideChange};
