use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info};
use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod carousel;
mod chrome;
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod modal;
    pub mod notification;
    pub mod reveal;
    pub mod slider;
    pub mod viewport;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use carousel::CarouselConfig;
use chrome::scroll::{
    active_section, anchor_target, is_header_scrolled, SectionBounds, Throttle, SCROLL_THROTTLE_MS,
};
use config::{LOADING_FADE_MS, LOADING_SCREEN_MS};
use pages::{
    landing::Landing,
    privacy::{NotFound, PrivacyPolicy},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


const NAV_SECTIONS: [(&str, &str); 4] = [
    ("hero", "Главная"),
    ("features", "Преимущества"),
    ("gallery", "Галерея"),
    ("contact", "Контакты"),
];

fn section_bounds(document: &web_sys::Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
        })
        .collect()
}

/// Smoothly scrolls to the section with `id`, leaving room for the fixed
/// header. Returns false when the section is not on the current page.
fn scroll_to_section(id: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let header_height = document
        .query_selector(".top-nav")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_target(target.offset_top() as f64, header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);

            let scroll_callback = window.clone().map(|window| {
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(is_header_scrolled(scroll_y));

                    if !throttle.ready(js_sys::Date::now()) {
                        return;
                    }
                    if let Some(document) = window_clone.document() {
                        let sections = section_bounds(&document);
                        active.set(active_section(scroll_y, &sections).map(str::to_string));
                    }
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // The body class keeps the page from scrolling under the open mobile menu.
    use_effect_with_deps(|open: &bool| {
        let body = window().and_then(|w| w.document()).and_then(|d| d.body());
        if let Some(body) = &body {
            let _ = body.class_list().toggle_with_force("menu-open", *open);
        }
        move || {
            if let Some(body) = body {
                let _ = body.class_list().remove_1("menu-open");
            }
        }
    }, *menu_open);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let anchor = |id: &'static str| {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if !scroll_to_section(id) {
                debug!("Section #{} is not on this page, going home", id);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(11, 15, 25, 0.92);
                        backdrop-filter: blur(10px);
                        padding: 0.75rem 2rem;
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #D1D5DB;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #7EB2FF;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    body.menu-open {
                        overflow: hidden;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: fixed;
                            inset: 64px 0 0 0;
                            padding: 2rem;
                            background: #0B0F19;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Астера"}
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    aria-label="Меню"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(id, title)| {
                        let is_active = active.as_deref() == Some(*id);
                        html! {
                            <a
                                href={format!("#{}", id)}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                onclick={anchor(*id)}
                            >
                                { *title }
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[derive(Clone, Copy, PartialEq)]
enum LoadingPhase {
    Visible,
    Fading,
    Done,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Slider options read from the mount element.
    pub slider_config: CarouselConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let loading = use_state(|| LoadingPhase::Visible);

    {
        let loading = loading.clone();
        use_effect_with_deps(move |_| {
            let fading = loading.clone();
            let fade = Timeout::new(LOADING_SCREEN_MS, move || fading.set(LoadingPhase::Fading));
            let done = Timeout::new(LOADING_SCREEN_MS + LOADING_FADE_MS, move || {
                loading.set(LoadingPhase::Done);
            });
            move || {
                drop(fade);
                drop(done);
            }
        }, ());
    }

    let loader = match *loading {
        LoadingPhase::Done => html! {},
        phase => html! {
            <div
                class="loading-screen"
                style={format!(
                    "position: fixed; inset: 0; z-index: 3000; display: flex; align-items: center; \
                     justify-content: center; background: #0B0F19; color: #fff; font-size: 2rem; \
                     transition: opacity {}ms ease; opacity: {};",
                    LOADING_FADE_MS,
                    if phase == LoadingPhase::Fading { 0 } else { 1 },
                )}
            >
                {"Астера"}
            </div>
        },
    };

    html! {
        <ContextProvider<CarouselConfig> context={props.slider_config.clone()}>
            <BrowserRouter>
                { loader }
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<CarouselConfig>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::APP_ROOT_ID));
    let slider_config = root
        .as_ref()
        .map(|el| CarouselConfig::from_attributes(|name| el.get_attribute(name)))
        .unwrap_or_default();

    info!("Starting application");
    let props = AppProps { slider_config };
    match root {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
