use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::effects::toast::{Severity, ToastAction, ToastPhase, ToastSlot};

pub type ToastContext = UseReducerHandle<ToastSlot>;

pub fn notify(toasts: &ToastContext, message: impl Into<String>, severity: Severity) {
    toasts.dispatch(ToastAction::Show {
        message: message.into(),
        severity,
    });
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let slot = use_reducer_eq(ToastSlot::default);
    let current = slot.current().cloned();

    {
        let slot = slot.clone();
        let stage = current.as_ref().map(|toast| (toast.id, toast.phase));
        use_effect_with_deps(
            move |stage| {
                // dropping the Timeout on the next stage cancels it
                let timeout = (*stage).map(|(id, phase)| match phase {
                    ToastPhase::Showing => Timeout::new(config::TOAST_LIFETIME_MS, move || {
                        slot.dispatch(ToastAction::Dismiss(id));
                    }),
                    ToastPhase::Leaving => Timeout::new(config::TOAST_EXIT_MS, move || {
                        slot.dispatch(ToastAction::Remove(id));
                    }),
                });
                move || drop(timeout)
            },
            stage,
        );
    }

    let toast = match current {
        Some(toast) => {
            let onclick = {
                let slot = slot.clone();
                let id = toast.id;
                Callback::from(move |_: MouseEvent| slot.dispatch(ToastAction::Dismiss(id)))
            };
            html! {
                <div key={toast.dom_key()} class={classes!("notification", toast.severity.class())} style={toast.style()} role="status">
                    <span>{ toast.message.clone() }</span>
                    <button class="notification-close" {onclick} aria-label="Dismiss">{"×"}</button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<ToastContext> context={slot.clone()}>
            { props.children.clone() }
            { toast }
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        z-index: 10000;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        max-width: 300px;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.2rem;
                        cursor: pointer;
                        padding: 0;
                        margin-left: auto;
                    }
                    @keyframes slideInRight {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOutRight {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

/// Shows `message` if a toast host is mounted above the caller.
pub fn notify_or_log(toasts: Option<&ToastContext>, message: &str, severity: Severity) {
    match toasts {
        Some(toasts) => notify(toasts, message, severity),
        None => log::warn!("No toast host mounted, dropping notification: {}", message),
    }
}
