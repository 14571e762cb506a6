use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::chrome::counter::{CounterAnimation, COUNTER_FRAME_MS};
use crate::components::viewport::{ViewportWatch, WatchOptions};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Final text, e.g. `500+`.
    pub value: AttrValue,
    pub label: AttrValue,
}

/// Hero stat that counts up once it scrolls into view.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| props.value.to_string());

    {
        let node = node.clone();
        let text = text.clone();
        use_effect_with_deps(
            move |value: &AttrValue| {
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let mut watch = None;

                if let (Some(element), Some(animation)) =
                    (node.cast::<Element>(), CounterAnimation::parse(value))
                {
                    let ticker = ticker.clone();
                    let animation = Rc::new(RefCell::new(animation));
                    let result = ViewportWatch::observe(&element, WatchOptions::default(), move |visible, observer| {
                        if !visible || ticker.borrow().is_some() {
                            return;
                        }
                        // Runs once: stop watching as soon as it starts.
                        observer.disconnect();
                        let animation = animation.clone();
                        let text = text.clone();
                        let done = ticker.clone();
                        let interval = Interval::new(COUNTER_FRAME_MS, move || {
                            let mut animation = animation.borrow_mut();
                            if animation.is_finished() {
                                return;
                            }
                            text.set(animation.tick());
                            if animation.is_finished() {
                                // Cannot drop the interval from inside its own callback.
                                let done = done.clone();
                                Timeout::new(0, move || {
                                    done.borrow_mut().take();
                                })
                                .forget();
                            }
                        });
                        *ticker.borrow_mut() = Some(interval);
                    });
                    match result {
                        Ok(w) => watch = Some(w),
                        Err(e) => warn!("counter: viewport observer unavailable: {:?}", e),
                    }
                }

                move || {
                    drop(watch);
                    if let Some(interval) = ticker.borrow_mut().take() {
                        interval.cancel();
                    }
                }
            },
            props.value.clone(),
        );
    }

    html! {
        <div class="hero-stat">
            <span ref={node} class="hero-stat-number">{ (*text).clone() }</span>
            <span class="hero-stat-label">{ props.label.clone() }</span>
        </div>
    }
}
