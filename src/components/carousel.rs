use web_sys::{Element, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::VisibilityObserver;
use crate::effects::carousel::{
    animation_duration_secs, looped, Breakpoint, CarouselEvent, CarouselKind, CarouselState,
};
use crate::hooks::use_viewport_width;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub kind: CarouselKind,
    #[prop_or_default]
    pub children: Children,
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_reducer_eq(CarouselState::default);
    let width = use_viewport_width();
    let track_ref = use_node_ref();
    let duration = animation_duration_secs(props.kind, Breakpoint::from_width(width));

    // Pause the animation while the track is off screen
    {
        let state = state.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let observer = track_ref.cast::<Element>().and_then(|track| {
                    VisibilityObserver::new(
                        &track,
                        config::CAROUSEL_VISIBILITY_THRESHOLD,
                        None,
                        move |intersecting| {
                            state.dispatch(CarouselEvent::ViewportChanged { intersecting });
                        },
                    )
                    .map_err(|e| log::warn!("Carousel visibility tracking disabled: {}", e))
                    .ok()
                });
                move || drop(observer)
            },
            (),
        );
    }

    {
        let kind = props.kind;
        use_effect_with_deps(
            move |duration| {
                log::debug!("{:?} carousel loop set to {}s", kind, duration);
                || ()
            },
            duration,
        );
    }

    let dispatch = |event: CarouselEvent| {
        let state = state.clone();
        move || state.dispatch(event)
    };
    let onmouseenter = {
        let enter = dispatch(CarouselEvent::PointerEnter);
        Callback::from(move |_: MouseEvent| enter())
    };
    let onmouseleave = {
        let leave = dispatch(CarouselEvent::PointerLeave);
        Callback::from(move |_: MouseEvent| leave())
    };
    let ontouchend = {
        let end = dispatch(CarouselEvent::TouchEnd);
        Callback::from(move |_: TouchEvent| end())
    };
    let ontouchstart = {
        let state = state.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                state.dispatch(CarouselEvent::TouchStart { x });
            }
        })
    };
    let ontouchmove = {
        let state = state.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                state.dispatch(CarouselEvent::TouchMove { x });
            }
        })
    };

    let mut style = format!(
        "animation-play-state: {}; animation-duration: {}s;",
        state.play_state().as_css(),
        duration
    );
    let transform = state.transform();
    if !transform.is_empty() {
        style.push_str(&format!(" transform: {};", transform));
    }

    let cards = looped(&props.children.iter().collect::<Vec<Html>>());

    html! {
        <div class="carousel-container">
            <div
                ref={track_ref}
                class={classes!("carousel-track", props.kind.class())}
                {style}
                {onmouseenter}
                {onmouseleave}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
            >
                { for cards }
            </div>
        </div>
    }
}
