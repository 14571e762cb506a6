use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::viewport::{ViewportWatch, WatchOptions};

const REVEAL_OPTIONS: WatchOptions = WatchOptions {
    threshold: Some(0.1),
    root_margin: Some("0px 0px -50px 0px"),
};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Animation name, exposed as `data-aos` for the stylesheet.
    #[prop_or(AttrValue::from("fade-up"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that animates in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let animated = use_state(|| false);

    {
        let node = node.clone();
        let animated = animated.clone();
        use_effect_with_deps(
            move |_| {
                let fallback = animated.clone();
                let watch = node.cast::<Element>().and_then(|element| {
                    ViewportWatch::observe(&element, REVEAL_OPTIONS, move |visible, observer| {
                        if visible {
                            animated.set(true);
                            observer.disconnect();
                        }
                    })
                    .map_err(|e| {
                        warn!("reveal: viewport observer unavailable: {:?}", e);
                        fallback.set(true);
                    })
                    .ok()
                });
                move || drop(watch)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            data-aos={props.animation.clone()}
            class={classes!(props.class.clone(), (*animated).then_some("aos-animate"))}
        >
            { for props.children.iter() }
        </div>
    }
}
