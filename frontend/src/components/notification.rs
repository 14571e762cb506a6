use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::{NOTIFICATION_EXIT_MS, NOTIFICATION_TIMEOUT_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notification-success",
            NoticeKind::Error => "notification-error",
            NoticeKind::Info => "notification-info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "#10B981",
            NoticeKind::Error => "#EF4444",
            NoticeKind::Info => "#3B82F6",
        }
    }
}

/// A toast. `id` changes for every new toast so its timers restart even
/// when the text repeats.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Notice,
    pub on_close: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                leaving.set(false);
                let exit_leaving = leaving.clone();
                let exit = Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                    exit_leaving.set(true);
                });
                let remove = Timeout::new(NOTIFICATION_TIMEOUT_MS + NOTIFICATION_EXIT_MS, move || {
                    on_close.emit(());
                });

                move || {
                    // Dropping the timeouts cancels them.
                    drop(exit);
                    drop(remove);
                }
            },
            props.notice.id,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let kind = props.notice.kind;
    let animation = if *leaving {
        "slideOutRight 0.3s ease forwards"
    } else {
        "slideInRight 0.3s ease"
    };

    html! {
        <div
            class={classes!("notification", kind.class())}
            role={if kind == NoticeKind::Error { "alert" } else { "status" }}
            style={format!("background: {}; animation: {};", kind.background(), animation)}
        >
            <style>
                {r#"
                    @keyframes slideInRight {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOutRight {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 12px;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.2);
                        z-index: 3000;
                        max-width: 400px;
                        backdrop-filter: blur(10px);
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        cursor: pointer;
                        padding: 0;
                        width: 20px;
                        height: 20px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                "#}
            </style>
            <div class="notification-content">
                <span class="notification-message">{ props.notice.message.clone() }</span>
                <button class="notification-close" aria-label="Закрыть" onclick={close}>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" width="20" height="20">
                        <path d="M18 6L6 18M6 6l12 12" />
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_its_own_class_and_color() {
        assert_eq!(NoticeKind::Success.class(), "notification-success");
        assert_eq!(NoticeKind::Error.background(), "#EF4444");
        assert_eq!(NoticeKind::Info.class(), "notification-info");
        assert_eq!(NoticeKind::Info.background(), "#3B82F6");
        assert_eq!(NoticeKind::Success.background(), "#10B981");
    }
}
