use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Locks page scrolling while `locked`.
fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let _ = body
        .style()
        .set_property("overflow", if locked { "hidden" } else { "" });
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_effect_with_deps(
        |open| {
            set_scroll_lock(*open);
            || set_scroll_lock(false)
        },
        props.open,
    );

    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                debug!("Closing modal with Escape");
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("modal", props.open.then_some("active"))} aria-hidden={(!props.open).to_string()}>
            <style>
                {r#"
                    .modal {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease, visibility 0.3s ease;
                    }
                    .modal.active {
                        opacity: 1;
                        visibility: visible;
                    }
                    .modal-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                    }
                    .modal-content {
                        position: relative;
                        width: min(520px, 92vw);
                        background: #111827;
                        color: #fff;
                        border-radius: 20px;
                        padding: 2.5rem 2rem 2rem;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.4);
                        transform: translateY(20px);
                        transition: transform 0.3s ease;
                    }
                    .modal.active .modal-content {
                        transform: translateY(0);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #9CA3AF;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
                <button class="modal-close" aria-label="Закрыть" onclick={close}>{"×"}</button>
                <h2>{ props.title.clone() }</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
