use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::{AnimationLoop, VisibilityObserver};
use crate::effects::counter::{group_thousands, StatCounter};
use crate::effects::decor::HoverTarget;

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[hook]
fn use_hover(target: HoverTarget) -> (String, Callback<MouseEvent>, Callback<MouseEvent>) {
    let hovered = use_state(|| false);
    let style = format!("transform: {};", target.transform(*hovered));
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| hovered.set(false));
    (style, onmouseenter, onmouseleave)
}

#[derive(Properties, PartialEq)]
pub struct StatNumberProps {
    pub value: AttrValue,
    /// Flips to true once the owning card is on screen.
    pub active: bool,
}

#[function_component(StatNumber)]
pub fn stat_number(props: &StatNumberProps) -> Html {
    let counter = use_mut_ref(|| StatCounter::from_text(&props.value));
    let text = use_state(|| props.value.to_string());
    let frames: Rc<RefCell<Option<AnimationLoop>>> = use_mut_ref(|| None);

    {
        let counter = counter.clone();
        let text = text.clone();
        use_effect_with_deps(
            move |active| {
                let animation = if *active {
                    counter.borrow_mut().trigger(config::COUNTER_DURATION_MS)
                } else {
                    None
                };
                if let Some(mut animation) = animation {
                    let target = animation.target();
                    let frame_text = text.clone();
                    let started = AnimationLoop::start(move |_| {
                        let frame = animation.step();
                        frame_text.set(frame.text());
                        !frame.is_finished()
                    });
                    match started {
                        Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                        Err(e) => {
                            log::warn!("Counter animation skipped: {}", e);
                            text.set(group_thousands(target));
                        }
                    }
                }
                || ()
            },
            props.active,
        );
    }

    let animated = counter.borrow().is_animated();
    html! {
        <span class={classes!("stat-number", animated.then(|| "animated"))}>{ (*text).clone() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub stats: Vec<Stat>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let card_ref = use_node_ref();
    let in_view = use_state(|| false);
    let seen = *in_view;
    let (style, onmouseenter, onmouseleave) = use_hover(HoverTarget::Card);

    // Counters start the first time half the card is visible
    {
        let card_ref = card_ref.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |seen| {
                let observer = if *seen {
                    None
                } else {
                    card_ref.cast::<Element>().and_then(|card| {
                        VisibilityObserver::new(
                            &card,
                            config::COUNTER_VISIBILITY_THRESHOLD,
                            Some(config::COUNTER_ROOT_MARGIN),
                            move |intersecting| {
                                if intersecting {
                                    in_view.set(true);
                                }
                            },
                        )
                        .map_err(|e| log::warn!("Stat counters disabled: {}", e))
                        .ok()
                    })
                };
                move || drop(observer)
            },
            seen,
        );
    }

    html! {
        <div ref={card_ref} class="product-card" {style} {onmouseenter} {onmouseleave}>
            <div class="product-icon">{ props.icon.clone() }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
            <div class="product-stats">
                { for props.stats.iter().map(|stat| html! {
                    <div class="stat">
                        <StatNumber value={stat.value.clone()} active={*in_view} />
                        <span class="stat-label">{ stat.label.clone() }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let (style, onmouseenter, onmouseleave) = use_hover(HoverTarget::Card);
    html! {
        <div class="testimonial-card" {style} {onmouseenter} {onmouseleave}>
            <p class="testimonial-quote">{ format!("“{}”", props.quote) }</p>
            <div class="testimonial-author">
                <strong>{ props.author.clone() }</strong>
                <span>{ props.role.clone() }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechItemProps {
    pub name: AttrValue,
}

#[function_component(TechItem)]
pub fn tech_item(props: &TechItemProps) -> Html {
    let (style, onmouseenter, onmouseleave) = use_hover(HoverTarget::TechItem);
    html! {
        <div class="tech-item" {style} {onmouseenter} {onmouseleave}>{ props.name.clone() }</div>
    }
}
