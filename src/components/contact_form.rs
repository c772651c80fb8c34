use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{notify_or_log, ToastContext};
use crate::components::sparkle_button::SparkleButton;
use crate::config;
use crate::effects::contact::{ContactDraft, SubmitState};
use crate::effects::toast::Severity;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let toasts = use_context::<ToastContext>();
    let draft = use_state(ContactDraft::default);
    let submit = use_state(SubmitState::default);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = input.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submit = submit.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit.is_sending() {
                return;
            }
            if let Err(err) = draft.validate() {
                notify_or_log(toasts.as_ref(), &err.to_string(), Severity::Error);
                return;
            }

            submit.set(SubmitState::Sending);
            let draft = draft.clone();
            let submit = submit.clone();
            let toasts = toasts.clone();
            // There is no backend behind the form yet; pretend to send it.
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SEND_DELAY_MS).await;
                draft.set(ContactDraft::default());
                submit.set(SubmitState::Idle);
                notify_or_log(toasts.as_ref(), "Message sent successfully!", Severity::Success);
            });
        })
    };

    html! {
        <div class="contact-form">
            <form {onsubmit} novalidate=true>
                <div class="form-group">
                    <input type="text" placeholder="Your Name" value={draft.name.clone()} oninput={on_name} />
                </div>
                <div class="form-group">
                    <input type="email" placeholder="Your Email" value={draft.email.clone()} oninput={on_email} />
                </div>
                <div class="form-group">
                    <textarea placeholder="Your Message" rows="5" value={draft.message.clone()} oninput={on_message}></textarea>
                </div>
                <SparkleButton button_type="submit" disabled={submit.is_sending()}>
                    { submit.label() }
                </SparkleButton>
            </form>
        </div>
    }
}
