use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::chrome::form::ContactRequest;
use crate::chrome::phone::format_phone;
use crate::components::notification::NoticeKind;
use crate::config::FORM_SUBMIT_DELAY_MS;
use crate::Route;

const SUCCESS_MESSAGE: &str =
    "Спасибо! Ваша заявка отправлена. Мы свяжемся с вами в ближайшее время.";
const SENDING_MESSAGE: &str = "Отправляем заявку...";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(NoticeKind, String)>,
    /// Called once a submission went through, e.g. to close the modal.
    #[prop_or_default]
    pub on_submitted: Callback<()>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone(&input.value());
            input.set_value(&formatted);
            phone.set(formatted);
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let on_notify = props.on_notify.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = ContactRequest {
                name: (*name).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            if let Err(err) = request.validate() {
                warn!("Contact form rejected: {:?}", err);
                on_notify.emit((NoticeKind::Error, err.to_string()));
                return;
            }

            submitting.set(true);
            on_notify.emit((NoticeKind::Info, SENDING_MESSAGE.to_string()));
            let name = name.clone();
            let phone = phone.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let on_notify = on_notify.clone();
            let on_submitted = on_submitted.clone();
            spawn_local(async move {
                // No backend: the request is only simulated.
                TimeoutFuture::new(FORM_SUBMIT_DELAY_MS).await;
                info!("Contact request from {} accepted", request.name.trim());
                on_notify.emit((NoticeKind::Success, SUCCESS_MESSAGE.to_string()));
                name.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                submitting.set(false);
                on_submitted.emit(());
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit}>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 0.9rem 1rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font-size: 1rem;
                    }
                    .contact-form textarea {
                        min-height: 110px;
                        resize: vertical;
                    }
                    .contact-form button[type="submit"] {
                        padding: 1rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .contact-form button[disabled] {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .contact-form .consent {
                        font-size: 0.8rem;
                        color: #9CA3AF;
                    }
                    .contact-form .consent a {
                        color: #7EB2FF;
                    }
                "#}
            </style>
            <input
                id="name"
                name="name"
                type="text"
                placeholder="Ваше имя"
                autocomplete="name"
                value={(*name).clone()}
                oninput={on_name}
            />
            <input
                id="phone"
                name="phone"
                type="tel"
                placeholder="+7 (___) ___-__-__"
                autocomplete="tel"
                value={(*phone).clone()}
                oninput={on_phone}
            />
            <textarea
                id="message"
                name="message"
                placeholder="Комментарий"
                value={(*message).clone()}
                oninput={on_message}
            />
            <button type="submit" disabled={*submitting}>
                if *submitting {
                    <span>{"Отправляем..."}</span>
                } else {
                    <span>{"Отправить заявку"}</span>
                }
            </button>
            <p class="consent">
                {"Нажимая кнопку, вы соглашаетесь с "}
                <Link<Route> to={Route::Privacy}>{"политикой обработки персональных данных"}</Link<Route>>
            </p>
        </form>
    }
}
