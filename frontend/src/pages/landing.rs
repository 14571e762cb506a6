use chrono::Datelike;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::carousel::{CarouselConfig, SlideChange};
use crate::chrome::hero::{reveal_schedule, HeroPart};
use crate::chrome::scroll::parallax_offset;
use crate::components::contact_form::ContactForm;
use crate::components::counter::StatCounter;
use crate::components::modal::Modal;
use crate::components::notification::{Notice, NoticeKind, Notification};
use crate::components::reveal::Reveal;
use crate::components::slider::{Slide, Slider};

const HERO_TITLE_LINES: [&str; 3] = ["Астера —", "дом, в который", "хочется возвращаться"];

const HERO_STATS: [(&str, &str); 3] = [
    ("12+", "лет на рынке"),
    ("500+", "сданных квартир"),
    ("98%", "довольных жильцов"),
];

const FEATURES: [(&str, &str); 4] = [
    ("Закрытая территория", "Двор без машин, видеонаблюдение и охрана круглосуточно."),
    ("Рядом с парком", "Пять минут пешком до набережной и двадцати гектаров зелени."),
    ("Готовая отделка", "Квартиры сдаются с чистовой отделкой от проверенных подрядчиков."),
    ("Своя инфраструктура", "Школа, детский сад и коммерция на первых этажах."),
];

fn gallery() -> Vec<Slide> {
    [
        ("Фасады", "Клинкерный кирпич и панорамное остекление", "/assets/gallery/facade.jpg", false),
        ("Двор", "Детские площадки и зоны отдыха без машин", "/assets/gallery/yard.jpg", true),
        ("Лобби", "Дизайнерские входные группы с колясочными", "/assets/gallery/lobby.jpg", true),
        ("Квартиры", "Планировки от 28 до 120 м²", "/assets/gallery/apartment.jpg", true),
        ("Вид", "Окна на парк и реку с верхних этажей", "/assets/gallery/view.jpg", true),
    ]
    .into_iter()
    .map(|(title, caption, image, lazy)| Slide {
        title: title.into(),
        caption: caption.into(),
        image: image.into(),
        lazy,
    })
    .collect()
}

fn reveal_style(revealed: bool, hidden_transform: &str) -> String {
    if revealed {
        "opacity: 1; transform: none; transition: opacity 0.8s ease, transform 0.8s ease;".to_string()
    } else {
        format!("opacity: 0; transform: {};", hidden_transform)
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let slider_config = use_context::<CarouselConfig>().unwrap_or_default();
    let modal_open = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0u32);
    let gallery_position = use_state(|| None::<SlideChange>);
    let hero_stage = use_state(|| 0usize);
    let parallax = use_node_ref();

    let schedule = reveal_schedule(HERO_TITLE_LINES.len());

    // Staggered hero entrance
    {
        let hero_stage = hero_stage.clone();
        let schedule = schedule.clone();
        use_effect_with_deps(
            move |_| {
                let timeouts: Vec<Timeout> = schedule
                    .iter()
                    .enumerate()
                    .map(|(i, (_, delay))| {
                        let hero_stage = hero_stage.clone();
                        Timeout::new(*delay, move || hero_stage.set(i + 1))
                    })
                    .collect();
                move || drop(timeouts)
            },
            (),
        );
    }

    // Parallax decoration follows the scroll position
    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = window.clone().map(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                        if let Some(element) = parallax.cast::<HtmlElement>() {
                            let _ = element.style().set_property(
                                "transform",
                                &format!("translateY({}px)", parallax_offset(scroll_y)),
                            );
                        }
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let is_revealed = |part: HeroPart| {
        schedule
            .iter()
            .take(*hero_stage)
            .any(|(revealed, _)| *revealed == part)
    };

    let notify = {
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |(kind, message): (NoticeKind, String)| {
            let mut seq = notice_seq.borrow_mut();
            *seq += 1;
            notice.set(Some(Notice {
                id: *seq,
                kind,
                message,
            }));
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let on_slide_change = {
        let gallery_position = gallery_position.clone();
        Callback::from(move |change: SlideChange| {
            log!("Gallery slide", change.current_index + 1, "of", change.slide_count);
            gallery_position.set(Some(change));
        })
    };

    let counter_text = match *gallery_position {
        Some(change) => format!("{:02} / {:02}", change.current_index + 1, change.slide_count),
        None => String::new(),
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0B0F19;
                        color: #F9FAFB;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }
                    .landing-page section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: grid;
                        grid-template-columns: 1.1fr 0.9fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-title-line {
                        display: block;
                        font-size: clamp(2.2rem, 5vw, 4rem);
                        line-height: 1.1;
                        font-weight: 700;
                    }
                    .hero-description {
                        color: #9CA3AF;
                        font-size: 1.2rem;
                        margin: 1.5rem 0;
                    }
                    .hero-stats {
                        display: flex;
                        gap: 2.5rem;
                        margin-bottom: 2rem;
                    }
                    .hero-stat-number {
                        display: block;
                        font-size: 2rem;
                        font-weight: 700;
                        color: #7EB2FF;
                    }
                    .hero-stat-label {
                        color: #9CA3AF;
                        font-size: 0.9rem;
                    }
                    .hero-actions button, .cta-button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .hero-image-container img {
                        width: 100%;
                        border-radius: 24px;
                    }
                    .parallax {
                        position: absolute;
                        top: -120px;
                        right: -160px;
                        width: 480px;
                        height: 480px;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(59, 130, 246, 0.25), transparent 70%);
                        pointer-events: none;
                        z-index: 0;
                    }
                    [data-aos] {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    [data-aos].aos-animate {
                        opacity: 1;
                        transform: none;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 1.75rem;
                    }
                    .gallery-counter {
                        color: #9CA3AF;
                        font-variant-numeric: tabular-nums;
                        margin-bottom: 1rem;
                    }
                    .contact-section {
                        text-align: center;
                    }
                    .landing-footer {
                        padding: 2rem;
                        text-align: center;
                        color: #6B7280;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    @media (max-width: 900px) {
                        .hero {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section id="hero" class="hero">
                <div ref={parallax} class="parallax"></div>
                <div>
                    <h1 class="hero-title">
                        { for HERO_TITLE_LINES.iter().enumerate().map(|(i, line)| html! {
                            <span
                                class="hero-title-line"
                                style={reveal_style(is_revealed(HeroPart::TitleLine(i)), "translateY(30px)")}
                            >{ *line }</span>
                        }) }
                    </h1>
                    <p
                        class="hero-description"
                        style={reveal_style(is_revealed(HeroPart::Description), "translateY(30px)")}
                    >
                        {"Жилой квартал бизнес-класса у парка: продуманные планировки, закрытые дворы и вся инфраструктура рядом."}
                    </p>
                    <div class="hero-stats" style={reveal_style(is_revealed(HeroPart::Stats), "translateY(30px)")}>
                        { for HERO_STATS.iter().map(|(value, label)| html! {
                            <StatCounter value={*value} label={*label} />
                        }) }
                    </div>
                    <div class="hero-actions" style={reveal_style(is_revealed(HeroPart::Actions), "translateY(30px)")}>
                        <button onclick={open_modal.clone()}>{"Оставить заявку"}</button>
                    </div>
                </div>
                <div
                    class="hero-image-container"
                    style={reveal_style(is_revealed(HeroPart::Image), "scale(0.9)")}
                >
                    <img src="/assets/hero.jpg" alt="Квартал Астера" />
                </div>
            </section>

            <section id="features">
                <Reveal>
                    <h2>{"Почему Астера"}</h2>
                </Reveal>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <Reveal class="feature-card">
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="gallery">
                <Reveal>
                    <h2>{"Галерея"}</h2>
                    <div class="gallery-counter">{ counter_text }</div>
                </Reveal>
                <Slider
                    slides={gallery()}
                    config={slider_config}
                    label="Галерея квартала"
                    on_slide_change={on_slide_change}
                />
            </section>

            <section id="contact" class="contact-section">
                <Reveal animation="zoom-in">
                    <h2>{"Запишитесь на просмотр"}</h2>
                    <p>{"Менеджер перезвонит в течение 15 минут и подберёт удобное время."}</p>
                    <button class="cta-button" onclick={open_modal}>{"Оставить заявку"}</button>
                </Reveal>
            </section>

            <footer class="landing-footer">
                { format!("© {} Астера. Все права защищены.", chrono::Local::now().year()) }
            </footer>

            <Modal open={*modal_open} on_close={close_modal.clone()} title="Оставить заявку">
                <ContactForm on_notify={notify} on_submitted={close_modal} />
            </Modal>

            {
                if let Some(current) = (*notice).clone() {
                    html! { <Notification notice={current} on_close={dismiss_notice} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
