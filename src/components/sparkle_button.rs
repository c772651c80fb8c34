use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::dom;
use crate::effects::decor::{
    sparkle_position, sparkle_style, SPARKLE_COUNT, SPARKLE_LIFETIME_MS, SPARKLE_STAGGER_MS,
};

#[derive(Properties, PartialEq)]
pub struct SparkleButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

fn spawn_sparkles(click_x: f64, click_y: f64) {
    for i in 0..SPARKLE_COUNT {
        let (x, y) = sparkle_position(click_x, click_y, Math::random(), Math::random());
        Timeout::new(i * SPARKLE_STAGGER_MS, move || match dom::append_to_body(&sparkle_style(x, y)) {
            Ok(sparkle) => {
                Timeout::new(SPARKLE_LIFETIME_MS, move || sparkle.remove()).forget();
            }
            Err(e) => log::debug!("Sparkle skipped: {}", e),
        })
        .forget();
    }
}

/// Primary call-to-action button that throws a few sparkles where it was clicked.
#[function_component(SparkleButton)]
pub fn sparkle_button(props: &SparkleButtonProps) -> Html {
    let onclick = {
        let user_onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            spawn_sparkles(e.client_x() as f64, e.client_y() as f64);
            if let Some(onclick) = &user_onclick {
                onclick.emit(e);
            }
        })
    };

    html! {
        <button
            class={classes!("btn", "btn-primary", props.class.clone())}
            type={props.button_type.clone()}
            disabled={props.disabled}
            {onclick}
        >
            { props.children.clone() }
        </button>
    }
}
