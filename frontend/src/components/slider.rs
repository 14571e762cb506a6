use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Element, Node};
use yew::prelude::*;

use crate::carousel::{
    Carousel, CarouselConfig, GlooScheduler, Intent, LazyImages, Point, SlideChange,
};
use crate::components::viewport::{ViewportWatch, WatchOptions};

/// DOM event fired on the slider container after every slide change.
pub const SLIDE_CHANGE_EVENT: &str = "slideChange";

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: AttrValue,
    pub caption: AttrValue,
    pub image: AttrValue,
    /// Defer loading `image` until the slider is on screen and near this slide.
    pub lazy: bool,
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub config: CarouselConfig,
    #[prop_or(AttrValue::from("Галерея"))]
    pub label: AttrValue,
    #[prop_or(true)]
    pub show_arrows: bool,
    #[prop_or(true)]
    pub show_indicators: bool,
    #[prop_or_default]
    pub on_slide_change: Option<Callback<SlideChange>>,
}

pub enum SliderMsg {
    Intent(Intent),
    SlideChanged(SlideChange),
}

/// Payload of [`SLIDE_CHANGE_EVENT`], named for page scripts.
/// `previousSlide` is `null` for the initial notification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SlideChangeDetail {
    current_slide: usize,
    previous_slide: Option<usize>,
    total_slides: usize,
}

impl From<&SlideChange> for SlideChangeDetail {
    fn from(change: &SlideChange) -> Self {
        Self {
            current_slide: change.current_index,
            previous_slide: change.previous_index,
            total_slides: change.slide_count,
        }
    }
}

/// Holds slide changes back until the container element is in the DOM.
/// The initial notification arrives before the first render.
#[derive(Debug, Default)]
struct DomEvents {
    mounted: bool,
    pending: Option<SlideChange>,
}

impl DomEvents {
    /// Returns the change if it can be dispatched right away.
    fn offer(&mut self, change: SlideChange) -> Option<SlideChange> {
        if self.mounted {
            Some(change)
        } else {
            self.pending = Some(change);
            None
        }
    }

    /// Marks the container as mounted and hands back the held change.
    fn mount(&mut self) -> Option<SlideChange> {
        self.mounted = true;
        self.pending.take()
    }
}

pub struct Slider {
    carousel: Carousel<GlooScheduler>,
    lazy: LazyImages,
    container: NodeRef,
    dom_events: DomEvents,
    viewport: Option<ViewportWatch>,
    page_visibility: Option<Closure<dyn FnMut()>>,
}

impl Slider {
    fn watch_viewport(&mut self, ctx: &Context<Self>) {
        let Some(container) = self.container.cast::<Element>() else {
            return;
        };
        let sink = ctx
            .link()
            .callback(|visible: bool| SliderMsg::Intent(Intent::ViewportVisibility(visible)));

        match ViewportWatch::observe(&container, WatchOptions::default(), move |visible, _| {
            sink.emit(visible)
        }) {
            Ok(watch) => self.viewport = Some(watch),
            Err(e) => {
                // Without an observer the slider is treated as always visible.
                warn!("slider: viewport observer unavailable: {:?}", e);
                ctx.link()
                    .send_message(SliderMsg::Intent(Intent::ViewportVisibility(true)));
            }
        }
    }

    fn watch_page_visibility(&mut self, ctx: &Context<Self>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let sink = ctx
            .link()
            .callback(|hidden: bool| SliderMsg::Intent(Intent::PageHidden(hidden)));
        let doc = document.clone();
        let callback = Closure::wrap(Box::new(move || sink.emit(doc.hidden())) as Box<dyn FnMut()>);

        match document
            .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())
        {
            Ok(()) => self.page_visibility = Some(callback),
            Err(e) => warn!("slider: visibilitychange listener failed: {:?}", e),
        }
        // Mounted in a background tab: no visibilitychange until it is shown.
        ctx.link()
            .send_message(SliderMsg::Intent(Intent::PageHidden(document.hidden())));
    }

    fn fire_dom_event(&self, change: &SlideChange) {
        let Some(container) = self.container.cast::<Element>() else {
            return;
        };
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
        let detail = match SlideChangeDetail::from(change).serialize(&serializer) {
            Ok(detail) => detail,
            Err(e) => {
                warn!("slider: could not encode slide change: {}", e);
                return;
            }
        };

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(SLIDE_CHANGE_EVENT, &init) {
            Ok(event) => {
                let _ = container.dispatch_event(&event);
            }
            Err(e) => warn!("slider: could not create {} event: {:?}", SLIDE_CHANGE_EVENT, e),
        }
    }

    fn slides_html(&self, ctx: &Context<Self>) -> Html {
        let slides = &ctx.props().slides;
        self.carousel
            .slide_views()
            .into_iter()
            .zip(slides.iter())
            .map(|(view, slide)| {
                let image = if !slide.lazy || self.lazy.is_loaded(view.index) {
                    html! { <img src={slide.image.clone()} alt={slide.title.clone()} draggable="false" /> }
                } else {
                    html! { <img class="lazy" data-src={slide.image.clone()} alt={slide.title.clone()} /> }
                };

                html! {
                    <div
                        key={view.index}
                        class={view.class}
                        role="group"
                        aria-roledescription="slide"
                        aria-label={view.label}
                        aria-hidden={view.aria_hidden.to_string()}
                        tabindex={view.tab_index.to_string()}
                        style={view.style}
                    >
                        { image }
                        <div class="slider-caption">
                            <h3>{ slide.title.clone() }</h3>
                            <p>{ slide.caption.clone() }</p>
                        </div>
                    </div>
                }
            })
            .collect()
    }

    fn controls_html(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        if self.carousel.slide_count() < 2 {
            return html! {};
        }

        let arrows = if props.show_arrows {
            html! {
                <>
                    <button
                        type="button"
                        class="slider-prev"
                        aria-label={self.carousel.prev_button_label()}
                        onclick={link.callback(|_: MouseEvent| SliderMsg::Intent(Intent::Prev))}
                    >{"‹"}</button>
                    <button
                        type="button"
                        class="slider-next"
                        aria-label={self.carousel.next_button_label()}
                        onclick={link.callback(|_: MouseEvent| SliderMsg::Intent(Intent::Next))}
                    >{"›"}</button>
                </>
            }
        } else {
            html! {}
        };

        let indicators = if props.show_indicators {
            html! {
                <div class="slider-indicators">
                    { for self.carousel.indicator_views().into_iter().map(|dot| {
                        let index = dot.index;
                        html! {
                            <button
                                type="button"
                                key={index}
                                class={classes!("slider-indicator", dot.is_active.then_some("active"))}
                                aria-pressed={dot.is_active.to_string()}
                                aria-label={dot.label}
                                onclick={link.callback(move |_: MouseEvent| SliderMsg::Intent(Intent::GoTo(index)))}
                            />
                        }
                    }) }
                </div>
            }
        } else {
            html! {}
        };

        html! {
            <>
                { arrows }
                { indicators }
                <button
                    type="button"
                    class="slider-autoplay"
                    aria-label={self.carousel.autoplay_button_label()}
                    onclick={link.callback(|_: MouseEvent| SliderMsg::Intent(Intent::ToggleAutoplay))}
                >{ if self.carousel.autoplay_enabled() { "❚❚" } else { "▶" } }</button>
            </>
        }
    }
}

impl Component for Slider {
    type Message = SliderMsg;
    type Properties = SliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let scheduler = GlooScheduler::new(ctx.link().callback(SliderMsg::Intent));
        let mut carousel = Carousel::new(props.slides.len(), props.config.clone(), scheduler);

        let changed = ctx.link().callback(SliderMsg::SlideChanged);
        carousel.subscribe(Box::new(move |change: &SlideChange| changed.emit(*change)));

        info!("Mounting slider with {} slides", props.slides.len());

        Self {
            carousel,
            lazy: LazyImages::new(props.slides.len()),
            container: NodeRef::default(),
            dom_events: DomEvents::default(),
            viewport: None,
            page_visibility: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SliderMsg::Intent(intent) => {
                let revealed = match intent {
                    Intent::ViewportVisibility(true) => {
                        self.lazy.mark_visible(self.carousel.current_index())
                    }
                    _ => false,
                };
                self.carousel.dispatch(intent) || revealed
            }
            SliderMsg::SlideChanged(change) => {
                debug!(
                    "slide {:?} -> {} of {}",
                    change.previous_index, change.current_index, change.slide_count
                );
                if let Some(change) = self.dom_events.offer(change) {
                    self.fire_dom_event(&change);
                }
                if let Some(on_slide_change) = &ctx.props().on_slide_change {
                    on_slide_change.emit(change);
                }
                self.lazy.reveal_around(change.current_index)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.carousel.slide_count() == 0 {
            return html! {};
        }

        let link = ctx.link();
        let swipe = self.carousel.config().swipe_enabled;
        let dragging = self.carousel.is_dragging();

        let container = self.container.clone();
        let onkeydown = link.batch_callback(move |e: KeyboardEvent| {
            let on_container = match (
                container.cast::<Node>(),
                e.target().and_then(|t| t.dyn_into::<Node>().ok()),
            ) {
                (Some(container), Some(target)) => container.is_same_node(Some(&target)),
                _ => false,
            };
            Intent::from_container_key(&e.key(), on_container).map(|intent| {
                e.prevent_default();
                SliderMsg::Intent(intent)
            })
        });

        let container = self.container.clone();
        let onfocusout = link.batch_callback(move |e: FocusEvent| {
            // Focus moving between controls inside the slider is not a leave.
            let inside = match (
                container.cast::<Node>(),
                e.related_target().and_then(|t| t.dyn_into::<Node>().ok()),
            ) {
                (Some(container), Some(target)) => container.contains(Some(&target)),
                _ => false,
            };
            (!inside).then_some(SliderMsg::Intent(Intent::FocusOut))
        });

        let ontouchstart = link.batch_callback(|e: TouchEvent| {
            e.touches().get(0).map(|touch| {
                SliderMsg::Intent(Intent::GestureStart(Point::new(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                )))
            })
        });
        let ontouchend = link.batch_callback(|e: TouchEvent| {
            e.changed_touches().get(0).map(|touch| {
                SliderMsg::Intent(Intent::GestureEnd(Point::new(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                )))
            })
        });
        let ontouchcancel = link.callback(|_: TouchEvent| SliderMsg::Intent(Intent::GestureCancel));

        let onmousedown = link.batch_callback(|e: MouseEvent| {
            (e.button() == 0).then(|| {
                e.prevent_default();
                SliderMsg::Intent(Intent::GestureStart(Point::new(
                    e.client_x() as f64,
                    e.client_y() as f64,
                )))
            })
        });
        let onmousemove = Callback::from(move |e: MouseEvent| {
            if dragging {
                e.prevent_default();
            }
        });
        // The drag may have started after this view was rendered.
        let onmouseup = link.callback(|e: MouseEvent| {
            SliderMsg::Intent(Intent::GestureEnd(Point::new(
                e.client_x() as f64,
                e.client_y() as f64,
            )))
        });

        let status = format!(
            "Слайд {} из {}",
            self.carousel.current_index() + 1,
            self.carousel.slide_count()
        );

        html! {
            <div
                ref={self.container.clone()}
                class={classes!("astera-slider", dragging.then_some("dragging"))}
                role="region"
                aria-roledescription="carousel"
                aria-label={ctx.props().label.clone()}
                tabindex="0"
                style={if dragging { "cursor: grabbing;" } else { "" }}
                onkeydown={onkeydown}
                onmouseenter={link.callback(|_: MouseEvent| SliderMsg::Intent(Intent::PointerEnter))}
                onmouseleave={link.callback(|_: MouseEvent| SliderMsg::Intent(Intent::PointerLeave))}
                onfocusin={link.callback(|_: FocusEvent| SliderMsg::Intent(Intent::FocusIn))}
                onfocusout={onfocusout}
                ontouchstart={swipe.then_some(ontouchstart)}
                ontouchend={swipe.then_some(ontouchend)}
                ontouchcancel={swipe.then_some(ontouchcancel)}
                onmousedown={swipe.then_some(onmousedown)}
                onmousemove={swipe.then_some(onmousemove)}
                onmouseup={swipe.then_some(onmouseup)}
            >
                <style>
                    {r#"
                        .astera-slider {
                            position: relative;
                            overflow: hidden;
                            border-radius: 24px;
                            user-select: none;
                            outline: none;
                            cursor: grab;
                        }
                        .astera-slider:focus-visible {
                            box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.6);
                        }
                        .slider-slides {
                            display: flex;
                            will-change: transform;
                        }
                        .slider-slide {
                            position: relative;
                            flex: 0 0 100%;
                        }
                        .slider-slide img {
                            display: block;
                            width: 100%;
                            height: 480px;
                            object-fit: cover;
                            pointer-events: none;
                        }
                        .slider-slide img.lazy {
                            background: linear-gradient(135deg, #1f2937, #111827);
                        }
                        .slider-caption {
                            position: absolute;
                            left: 2rem;
                            bottom: 3.5rem;
                            max-width: 60%;
                            color: #fff;
                            text-shadow: 0 2px 12px rgba(0, 0, 0, 0.5);
                        }
                        .slider-prev, .slider-next, .slider-autoplay {
                            position: absolute;
                            top: 50%;
                            transform: translateY(-50%);
                            width: 48px;
                            height: 48px;
                            border: none;
                            border-radius: 50%;
                            background: rgba(255, 255, 255, 0.15);
                            color: #fff;
                            font-size: 1.75rem;
                            cursor: pointer;
                            backdrop-filter: blur(10px);
                        }
                        .slider-prev { left: 1rem; }
                        .slider-next { right: 1rem; }
                        .slider-autoplay {
                            top: auto;
                            bottom: 1rem;
                            right: 1rem;
                            transform: none;
                            font-size: 0.9rem;
                        }
                        .slider-indicators {
                            position: absolute;
                            bottom: 1.25rem;
                            left: 50%;
                            transform: translateX(-50%);
                            display: flex;
                            gap: 0.5rem;
                        }
                        .slider-indicator {
                            width: 10px;
                            height: 10px;
                            padding: 0;
                            border: none;
                            border-radius: 5px;
                            background: rgba(255, 255, 255, 0.4);
                            cursor: pointer;
                            transition: width 0.3s ease, background 0.3s ease;
                        }
                        .slider-indicator.active {
                            width: 28px;
                            background: #fff;
                        }
                        .slider-status {
                            position: absolute;
                            width: 1px;
                            height: 1px;
                            overflow: hidden;
                            clip: rect(0 0 0 0);
                        }
                    "#}
                </style>
                <div class="slider-slides" style={self.carousel.track_style()}>
                    { self.slides_html(ctx) }
                </div>
                { self.controls_html(ctx) }
                <div
                    class="slider-status"
                    aria-live={if self.carousel.autoplay_enabled() { "off" } else { "polite" }}
                >{ status }</div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.carousel.slide_count() == 0 {
            return;
        }
        self.watch_viewport(ctx);
        self.watch_page_visibility(ctx);
        if let Some(change) = self.dom_events.mount() {
            self.fire_dom_event(&change);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.carousel.teardown();
        self.viewport = None;
        if let Some(callback) = self.page_visibility.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "visibilitychange",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
        info!("Slider unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(previous: Option<usize>, current: usize) -> SlideChange {
        SlideChange {
            previous_index: previous,
            current_index: current,
            slide_count: 3,
        }
    }

    #[test]
    fn initial_change_waits_for_the_container() {
        let mut events = DomEvents::default();
        assert_eq!(events.offer(change(None, 0)), None);
        assert_eq!(events.mount(), Some(change(None, 0)));
        assert_eq!(events.mount(), None);
    }

    #[test]
    fn changes_after_mount_go_straight_through() {
        let mut events = DomEvents::default();
        assert_eq!(events.mount(), None);
        assert_eq!(events.offer(change(Some(0), 1)), Some(change(Some(0), 1)));
        assert_eq!(events.mount(), None);
    }

    #[test]
    fn only_the_latest_pending_change_is_kept() {
        let mut events = DomEvents::default();
        events.offer(change(None, 0));
        events.offer(change(Some(0), 2));
        assert_eq!(events.mount(), Some(change(Some(0), 2)));
    }

    #[test]
    fn detail_uses_script_friendly_names_and_null_previous() {
        let detail = serde_json::to_value(SlideChangeDetail::from(&change(None, 0))).unwrap();
        assert_eq!(
            detail,
            serde_json::json!({ "currentSlide": 0, "previousSlide": null, "totalSlides": 3 })
        );

        let detail = serde_json::to_value(SlideChangeDetail::from(&change(Some(0), 1))).unwrap();
        assert_eq!(detail["previousSlide"], 0);
        assert_eq!(detail["currentSlide"], 1);
    }
}
