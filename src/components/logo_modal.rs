use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, EventListener};
use crate::effects::modal::ModalEvent;

#[derive(Properties, PartialEq)]
pub struct LogoModalProps {
    pub open: bool,
    pub on_event: Callback<ModalEvent>,
}

#[function_component(LogoModal)]
pub fn logo_modal(props: &LogoModalProps) -> Html {
    let animating = use_state(|| false);

    // Lock page scroll while open. The entrance animation starts shortly after
    // opening and is cleared after closing so it replays next time.
    {
        let animating = animating.clone();
        use_effect_with_deps(
            move |open| {
                let open = *open;
                if let Err(e) = dom::set_body_overflow(if open { "hidden" } else { "" }) {
                    log::warn!("Could not toggle page scroll: {}", e);
                }
                let delay = if open {
                    config::MODAL_ENTRANCE_DELAY_MS
                } else {
                    config::MODAL_RESET_DELAY_MS
                };
                let timeout = Timeout::new(delay, move || animating.set(open));
                move || drop(timeout)
            },
            props.open,
        );
    }

    // Escape only closes while the modal is up
    {
        let on_event = props.on_event.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    dom::document()
                        .and_then(|document| {
                            EventListener::new(&document, "keydown", move |e: Event| {
                                let is_escape = e
                                    .dyn_ref::<KeyboardEvent>()
                                    .map(|key| key.key() == "Escape")
                                    .unwrap_or(false);
                                if is_escape {
                                    on_event.emit(ModalEvent::Escape);
                                }
                            })
                        })
                        .map_err(|e| log::warn!("Escape-to-close unavailable: {}", e))
                        .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            props.open,
        );
    }

    let emit = |event: ModalEvent| {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(event))
    };
    let on_close = emit(ModalEvent::CloseClick);
    let on_backdrop = emit(ModalEvent::BackdropClick);
    let on_content = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            // keep clicks on the card from reaching the backdrop
            e.stop_propagation();
            on_event.emit(ModalEvent::ContentClick);
        })
    };

    let (image_style, info_style) = if *animating {
        (
            "animation: modalLogoEntrance 0.6s ease-out forwards;",
            "animation: modalInfoEntrance 0.8s ease-out 0.2s forwards;",
        )
    } else {
        ("", "")
    };

    html! {
        <div id="logo-modal" class={classes!("logo-modal", props.open.then(|| "active"))}>
            <div class="logo-modal-backdrop" onclick={on_backdrop}>
                <div class="logo-modal-content" onclick={on_content}>
                    <button class="logo-modal-close" onclick={on_close} aria-label="Close preview">{"×"}</button>
                    <img class="logo-preview-image" src="/assets/logo.png" alt="MindBud Innovations logo" style={image_style} />
                    <div class="logo-preview-info" style={info_style}>
                        <h3>{"MindBud Innovations"}</h3>
                        <p>{"Growing ideas into intelligent products."}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .logo-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        visibility: hidden;
                        opacity: 0;
                        transition: opacity 0.4s ease, visibility 0.4s ease;
                    }
                    .logo-modal.active {
                        visibility: visible;
                        opacity: 1;
                    }
                    .logo-modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(2, 6, 23, 0.75);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .logo-modal-content {
                        position: relative;
                        background: rgba(15, 23, 42, 0.95);
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        border-radius: 24px;
                        padding: 3rem;
                        text-align: center;
                        color: #f8fafc;
                    }
                    .logo-modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #f8fafc;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .logo-preview-image {
                        width: 160px;
                        opacity: 0;
                    }
                    .logo-preview-info {
                        opacity: 0;
                    }
                    @keyframes modalLogoEntrance {
                        from { transform: scale(0.6) rotate(-10deg); opacity: 0; }
                        to { transform: scale(1) rotate(0deg); opacity: 1; }
                    }
                    @keyframes modalInfoEntrance {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
