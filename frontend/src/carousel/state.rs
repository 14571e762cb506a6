use bitflags::bitflags;
use log::{debug, warn};

use super::config::CarouselConfig;
use super::gesture::{self, SwipeDirection};
use super::intent::{Intent, Point};
use super::scheduler::Scheduler;

bitflags! {
    /// Reasons autoplay is currently held back. Autoplay only runs while
    /// the set is empty.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Suspension: u8 {
        const HOVER = 1 << 0;
        const FOCUS = 1 << 1;
        const OFFSCREEN = 1 << 2;
        const PAGE_HIDDEN = 1 << 3;
        const GESTURE = 1 << 4;
    }
}

/// "Slide changed" notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// `None` for the initial render.
    pub previous_index: Option<usize>,
    pub current_index: usize,
    pub slide_count: usize,
}

pub type Observer = Box<dyn FnMut(&SlideChange)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub struct Carousel<S: Scheduler> {
    slide_count: usize,
    current: usize,
    previous: Option<usize>,
    transitioning: bool,
    autoplay_enabled: bool,
    suspended: Suspension,
    config: CarouselConfig,
    autoplay_timer: Option<S::Handle>,
    transition_timer: Option<S::Handle>,
    drag_start: Option<Point>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    scheduler: S,
}

impl<S: Scheduler> Carousel<S> {
    pub fn new(slide_count: usize, config: CarouselConfig, scheduler: S) -> Self {
        let mut carousel = Self {
            slide_count,
            current: 0,
            previous: None,
            transitioning: false,
            autoplay_enabled: config.autoplay,
            suspended: Suspension::empty(),
            config,
            autoplay_timer: None,
            transition_timer: None,
            drag_start: None,
            observers: Vec::new(),
            next_observer: 0,
            scheduler,
        };
        carousel.start_autoplay();
        debug!(
            "slider ready with {} slides, autoplay {}",
            slide_count,
            carousel.is_autoplay_running()
        );
        carousel
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    pub fn suspension(&self) -> Suspension {
        self.suspended
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Registers an observer. It is called right away with the current
    /// state (`previous_index: None`) and then after every committed
    /// transition.
    pub fn subscribe(&mut self, mut observer: Observer) -> ObserverId {
        if self.slide_count > 0 {
            observer(&SlideChange {
                previous_index: None,
                current_index: self.current,
                slide_count: self.slide_count,
            });
        }
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    /// Applies one intent. Returns whether anything visible changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        if self.slide_count == 0 {
            return false;
        }

        match intent {
            Intent::Next => self.next_slide(),
            Intent::Prev => self.prev_slide(),
            Intent::GoTo(index) => self.go_to_slide(index),
            Intent::First => self.go_to_slide(0),
            Intent::Last => self.go_to_slide(self.slide_count - 1),
            Intent::ToggleAutoplay => self.toggle_autoplay(),
            Intent::AutoplayTick => {
                // A tick already queued when its timer was released.
                if self.autoplay_timer.is_none() {
                    return false;
                }
                self.next_slide()
            }
            Intent::TransitionEnd => self.finish_transition(),
            Intent::PointerEnter => {
                if self.config.pause_on_hover {
                    self.suspend(Suspension::HOVER);
                }
                false
            }
            Intent::PointerLeave => {
                let was_dragging = self.drag_start.is_some();
                if was_dragging {
                    self.cancel_gesture();
                }
                self.resume(Suspension::HOVER);
                was_dragging
            }
            Intent::FocusIn => {
                self.suspend(Suspension::FOCUS);
                false
            }
            Intent::FocusOut => {
                self.resume(Suspension::FOCUS);
                false
            }
            Intent::ViewportVisibility(true) => {
                self.resume(Suspension::OFFSCREEN);
                false
            }
            Intent::ViewportVisibility(false) => {
                self.suspend(Suspension::OFFSCREEN);
                false
            }
            Intent::PageHidden(true) => {
                self.suspend(Suspension::PAGE_HIDDEN);
                false
            }
            Intent::PageHidden(false) => {
                self.resume(Suspension::PAGE_HIDDEN);
                false
            }
            Intent::GestureStart(point) => self.start_gesture(point),
            Intent::GestureEnd(point) => self.end_gesture(point),
            Intent::GestureCancel => self.cancel_gesture(),
        }
    }

    /// Moves to `target`. Targets outside the slide range are rejected, and
    /// the call is ignored mid-transition or when `target` is already shown.
    pub fn go_to_slide(&mut self, target: usize) -> bool {
        if target >= self.slide_count {
            warn!(
                "slider: rejected target {} for {} slides",
                target, self.slide_count
            );
            return false;
        }
        if self.transitioning || target == self.current {
            return false;
        }

        let previous = self.current;
        self.previous = Some(previous);
        self.current = target;
        self.begin_transition();

        self.notify(SlideChange {
            previous_index: Some(previous),
            current_index: target,
            slide_count: self.slide_count,
        });

        if self.autoplay_enabled {
            self.reset_autoplay();
        }
        true
    }

    pub fn next_slide(&mut self) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let target = if self.current + 1 < self.slide_count {
            self.current + 1
        } else if self.config.loop_enabled {
            0
        } else {
            self.slide_count - 1
        };
        self.go_to_slide(target)
    }

    pub fn prev_slide(&mut self) -> bool {
        if self.slide_count == 0 {
            return false;
        }
        let target = if self.current > 0 {
            self.current - 1
        } else if self.config.loop_enabled {
            self.slide_count - 1
        } else {
            0
        };
        self.go_to_slide(target)
    }

    pub fn start_autoplay(&mut self) {
        if !self.autoplay_enabled
            || self.slide_count < 2
            || self.autoplay_timer.is_some()
            || !self.suspended.is_empty()
        {
            return;
        }
        let handle = self
            .scheduler
            .every(self.config.autoplay_delay, Intent::AutoplayTick);
        self.autoplay_timer = Some(handle);
    }

    pub fn pause_autoplay(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn reset_autoplay(&mut self) {
        self.pause_autoplay();
        self.start_autoplay();
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        if self.slide_count < 2 {
            return false;
        }
        self.autoplay_enabled = !self.autoplay_enabled;
        if self.autoplay_enabled {
            self.start_autoplay();
        } else {
            self.pause_autoplay();
        }
        true
    }

    /// Releases every timer and observer. The slider is inert afterwards.
    pub fn teardown(&mut self) {
        self.pause_autoplay();
        if let Some(handle) = self.transition_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.observers.clear();
        self.autoplay_enabled = false;
        self.drag_start = None;
    }

    fn suspend(&mut self, reason: Suspension) {
        self.suspended.insert(reason);
        self.pause_autoplay();
    }

    fn resume(&mut self, reason: Suspension) {
        self.suspended.remove(reason);
        self.start_autoplay();
    }

    fn begin_transition(&mut self) {
        self.transitioning = true;
        if let Some(handle) = self.transition_timer.take() {
            self.scheduler.cancel(handle);
        }
        let handle = self
            .scheduler
            .after(self.config.transition_duration, Intent::TransitionEnd);
        self.transition_timer = Some(handle);
    }

    fn finish_transition(&mut self) -> bool {
        if let Some(handle) = self.transition_timer.take() {
            self.scheduler.cancel(handle);
        }
        let was_transitioning = self.transitioning;
        self.transitioning = false;
        was_transitioning
    }

    fn start_gesture(&mut self, point: Point) -> bool {
        if !self.config.swipe_enabled {
            return false;
        }
        self.drag_start = Some(point);
        self.suspend(Suspension::GESTURE);
        true
    }

    fn end_gesture(&mut self, point: Point) -> bool {
        let Some(start) = self.drag_start.take() else {
            return false;
        };
        match gesture::classify(start, point) {
            Some(SwipeDirection::Next) => {
                self.next_slide();
            }
            Some(SwipeDirection::Prev) => {
                self.prev_slide();
            }
            None => {}
        }
        self.resume(Suspension::GESTURE);
        true
    }

    fn cancel_gesture(&mut self) -> bool {
        if self.drag_start.take().is_none() {
            return false;
        }
        self.resume(Suspension::GESTURE);
        true
    }

    fn notify(&mut self, change: SlideChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}

impl<S: Scheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::carousel::testing::{advance, SimulatedScheduler};

    fn carousel(slides: usize, config: CarouselConfig) -> Carousel<SimulatedScheduler> {
        Carousel::new(slides, config, SimulatedScheduler::default())
    }

    fn manual() -> CarouselConfig {
        CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        }
    }

    fn autoplay(delay: u32) -> CarouselConfig {
        CarouselConfig {
            autoplay_delay: delay,
            transition_duration: 500,
            ..CarouselConfig::default()
        }
    }

    fn recorder(c: &mut Carousel<SimulatedScheduler>) -> Rc<RefCell<Vec<SlideChange>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        c.subscribe(Box::new(move |change: &SlideChange| sink.borrow_mut().push(*change)));
        events.borrow_mut().clear();
        events
    }

    #[test]
    fn construction_starts_at_first_slide_with_one_timer() {
        let c = carousel(4, autoplay(1000));
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_transitioning());
        assert!(c.is_autoplay_running());
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = carousel(0, autoplay(1000));
        assert_eq!(c.scheduler().live_timers(), 0);
        for intent in [
            Intent::Next,
            Intent::Prev,
            Intent::GoTo(0),
            Intent::Last,
            Intent::ToggleAutoplay,
            Intent::GestureStart(Point::new(100.0, 0.0)),
            Intent::GestureEnd(Point::new(0.0, 0.0)),
        ] {
            assert!(!c.dispatch(intent));
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.scheduler().live_timers(), 0);
    }

    #[test]
    fn single_slide_never_moves_or_autoplays() {
        let mut c = carousel(1, autoplay(1000));
        assert_eq!(c.scheduler().live_timers(), 0);
        assert!(!c.dispatch(Intent::Next));
        assert!(!c.dispatch(Intent::Prev));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_any_navigation_sequence() {
        for loop_enabled in [true, false] {
            let mut c = carousel(
                5,
                CarouselConfig {
                    loop_enabled,
                    ..manual()
                },
            );
            // Deterministic pseudo-random walk.
            let mut seed = 0x2545_f491_u32;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                let intent = if seed % 2 == 0 { Intent::Next } else { Intent::Prev };
                c.dispatch(intent);
                assert!(c.current_index() < 5);
                advance(&mut c, 600);
            }
        }
    }

    #[test]
    fn go_to_current_slide_is_a_silent_no_op() {
        let mut c = carousel(3, manual());
        let events = recorder(&mut c);
        assert!(!c.go_to_slide(0));
        assert!(!c.is_transitioning());
        assert!(events.borrow().is_empty());
        assert_eq!(c.scheduler().live_timers(), 0);
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let mut c = carousel(3, manual());
        assert!(!c.dispatch(Intent::GoTo(3)));
        assert!(!c.dispatch(Intent::GoTo(usize::MAX)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn relative_navigation_wraps_when_looping() {
        let mut c = carousel(3, manual());
        c.go_to_slide(2);
        advance(&mut c, 600);
        assert!(c.next_slide());
        assert_eq!(c.current_index(), 0);
        advance(&mut c, 600);
        assert!(c.prev_slide());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn relative_navigation_clamps_without_loop() {
        let mut c = carousel(
            3,
            CarouselConfig {
                loop_enabled: false,
                ..manual()
            },
        );
        assert!(!c.prev_slide());
        assert_eq!(c.current_index(), 0);
        c.go_to_slide(2);
        advance(&mut c, 600);
        assert!(!c.next_slide());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn navigation_is_ignored_mid_transition() {
        let mut c = carousel(4, manual());
        let events = recorder(&mut c);
        assert!(c.go_to_slide(1));
        assert!(c.is_transitioning());
        assert!(!c.go_to_slide(3));
        assert!(!c.next_slide());
        assert_eq!(c.current_index(), 1);
        assert_eq!(events.borrow().len(), 1);

        advance(&mut c, 599);
        assert!(c.is_transitioning());
        advance(&mut c, 1);
        assert!(!c.is_transitioning());
        assert!(c.go_to_slide(3));
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn observers_get_initial_state_then_each_change() {
        let mut c = carousel(3, manual());
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let id = c.subscribe(Box::new(move |change: &SlideChange| sink.borrow_mut().push(*change)));
        c.go_to_slide(2);

        assert_eq!(
            *events.borrow(),
            vec![
                SlideChange {
                    previous_index: None,
                    current_index: 0,
                    slide_count: 3
                },
                SlideChange {
                    previous_index: Some(0),
                    current_index: 2,
                    slide_count: 3
                },
            ]
        );

        c.unsubscribe(id);
        advance(&mut c, 600);
        c.go_to_slide(1);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn autoplay_advances_once_per_delay() {
        let mut c = carousel(5, autoplay(1000));
        let events = recorder(&mut c);
        advance(&mut c, 3000);
        assert_eq!(c.current_index(), 3);
        assert_eq!(events.borrow().len(), 3);
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn autoplay_cadence_wraps_modulo_slide_count() {
        let mut c = carousel(2, autoplay(1000));
        advance(&mut c, 3000);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn manual_navigation_restarts_the_countdown() {
        let mut c = carousel(5, autoplay(1000));
        advance(&mut c, 800);
        c.dispatch(Intent::Next);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.scheduler().next_due(Intent::AutoplayTick), Some(1800));
        assert_eq!(c.scheduler().live_intervals(), 1);

        advance(&mut c, 999);
        assert_eq!(c.current_index(), 1);
        advance(&mut c, 1);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn hover_pauses_and_leave_starts_a_fresh_countdown() {
        let mut c = carousel(5, autoplay(1000));
        advance(&mut c, 700);
        c.dispatch(Intent::PointerEnter);
        assert!(!c.is_autoplay_running());
        assert_eq!(c.scheduler().live_timers(), 0);

        advance(&mut c, 5000);
        assert_eq!(c.current_index(), 0);

        c.dispatch(Intent::PointerLeave);
        assert_eq!(c.scheduler().next_due(Intent::AutoplayTick), Some(6700));
        advance(&mut c, 999);
        assert_eq!(c.current_index(), 0);
        advance(&mut c, 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn hover_is_ignored_when_pause_on_hover_is_off() {
        let mut c = carousel(
            3,
            CarouselConfig {
                pause_on_hover: false,
                ..autoplay(1000)
            },
        );
        c.dispatch(Intent::PointerEnter);
        assert!(c.is_autoplay_running());
    }

    #[test]
    fn autoplay_waits_for_every_suspension_to_clear() {
        let mut c = carousel(3, autoplay(1000));
        c.dispatch(Intent::FocusIn);
        c.dispatch(Intent::PageHidden(true));
        c.dispatch(Intent::ViewportVisibility(false));
        assert!(!c.is_autoplay_running());

        c.dispatch(Intent::FocusOut);
        c.dispatch(Intent::PageHidden(false));
        assert!(!c.is_autoplay_running());

        c.dispatch(Intent::ViewportVisibility(true));
        assert!(c.is_autoplay_running());
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn manual_navigation_while_hovered_does_not_restart_autoplay() {
        let mut c = carousel(3, autoplay(1000));
        c.dispatch(Intent::PointerEnter);
        c.dispatch(Intent::Next);
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_autoplay_running());
    }

    #[test]
    fn resume_respects_disabled_autoplay() {
        let mut c = carousel(3, manual());
        c.dispatch(Intent::PointerEnter);
        c.dispatch(Intent::PointerLeave);
        assert!(!c.is_autoplay_running());
        assert_eq!(c.scheduler().live_timers(), 0);
    }

    #[test]
    fn space_toggles_autoplay() {
        let mut c = carousel(3, autoplay(1000));
        assert!(c.dispatch(Intent::ToggleAutoplay));
        assert!(!c.autoplay_enabled());
        assert_eq!(c.scheduler().live_timers(), 0);

        advance(&mut c, 5000);
        assert_eq!(c.current_index(), 0);

        c.dispatch(Intent::ToggleAutoplay);
        assert!(c.is_autoplay_running());
        advance(&mut c, 1000);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn home_and_end_jump_to_the_edges() {
        let mut c = carousel(4, manual());
        c.dispatch(Intent::Last);
        assert_eq!(c.current_index(), 3);
        advance(&mut c, 600);
        c.dispatch(Intent::First);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipe_threshold() {
        let mut c = carousel(4, manual());
        c.dispatch(Intent::GestureStart(Point::new(300.0, 50.0)));
        assert!(c.is_dragging());
        c.dispatch(Intent::GestureEnd(Point::new(251.0, 50.0)));
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_dragging());

        c.dispatch(Intent::GestureStart(Point::new(300.0, 50.0)));
        c.dispatch(Intent::GestureEnd(Point::new(249.0, 50.0)));
        assert_eq!(c.current_index(), 1);

        advance(&mut c, 600);
        c.dispatch(Intent::GestureStart(Point::new(300.0, 50.0)));
        c.dispatch(Intent::GestureEnd(Point::new(351.0, 50.0)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipe_disabled_ignores_gestures() {
        let mut c = carousel(
            4,
            CarouselConfig {
                swipe_enabled: false,
                ..manual()
            },
        );
        assert!(!c.dispatch(Intent::GestureStart(Point::new(300.0, 0.0))));
        c.dispatch(Intent::GestureEnd(Point::new(0.0, 0.0)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn gesture_suspends_autoplay_and_resumes_with_one_timer() {
        let mut c = carousel(4, autoplay(1000));
        c.dispatch(Intent::GestureStart(Point::new(300.0, 0.0)));
        assert!(!c.is_autoplay_running());
        advance(&mut c, 2000);
        assert_eq!(c.current_index(), 0);

        c.dispatch(Intent::GestureEnd(Point::new(100.0, 0.0)));
        assert_eq!(c.current_index(), 1);
        assert!(c.is_autoplay_running());
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn release_without_press_is_harmless() {
        let mut c = carousel(4, autoplay(1000));
        assert!(!c.dispatch(Intent::GestureEnd(Point::new(0.0, 0.0))));
        assert_eq!(c.current_index(), 0);
        assert!(c.suspension().is_empty());
        assert!(c.is_autoplay_running());
    }

    #[test]
    fn release_always_clears_the_gesture_hold() {
        let mut c = carousel(4, autoplay(1000));
        c.dispatch(Intent::GestureStart(Point::new(300.0, 0.0)));
        assert!(c.suspension().contains(Suspension::GESTURE));

        // A click without movement still ends the drag.
        c.dispatch(Intent::GestureEnd(Point::new(300.0, 0.0)));
        assert!(!c.suspension().contains(Suspension::GESTURE));
        assert!(!c.is_dragging());
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.scheduler().live_intervals(), 1);
    }

    #[test]
    fn hidden_page_at_mount_holds_autoplay() {
        let mut c = carousel(3, autoplay(1000));
        c.dispatch(Intent::PageHidden(true));
        assert_eq!(c.suspension(), Suspension::PAGE_HIDDEN);
        assert_eq!(c.scheduler().live_intervals(), 0);

        advance(&mut c, 5000);
        assert_eq!(c.current_index(), 0);

        c.dispatch(Intent::PageHidden(false));
        assert!(c.suspension().is_empty());
        advance(&mut c, 1000);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn leaving_mid_drag_cancels_it() {
        let mut c = carousel(4, manual());
        c.dispatch(Intent::GestureStart(Point::new(300.0, 0.0)));
        assert!(c.dispatch(Intent::PointerLeave));
        assert!(!c.is_dragging());
        c.dispatch(Intent::GestureEnd(Point::new(0.0, 0.0)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn stale_autoplay_tick_is_ignored() {
        let mut c = carousel(3, autoplay(1000));
        c.pause_autoplay();
        assert!(!c.dispatch(Intent::AutoplayTick));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn teardown_releases_all_timers() {
        let mut c = carousel(3, autoplay(1000));
        c.dispatch(Intent::Next);
        assert_eq!(c.scheduler().live_timers(), 2);
        c.teardown();
        assert_eq!(c.scheduler().live_timers(), 0);
        c.dispatch(Intent::ViewportVisibility(true));
        assert_eq!(c.scheduler().live_timers(), 0);
    }
}
