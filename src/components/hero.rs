use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::components::sparkle_button::SparkleButton;
use crate::config;
use crate::dom;
use crate::effects::hero::{FloatingTiming, Typewriter};
use crate::effects::scroll::parallax_offset;
use crate::hooks::use_scroll_y;

const HERO_TITLE: &str = "Innovation That Grows";

#[derive(Properties, PartialEq)]
pub struct FloatingCardProps {
    pub index: usize,
    pub scroll_y: f64,
    pub icon: AttrValue,
    pub label: AttrValue,
}

#[function_component(FloatingCard)]
pub fn floating_card(props: &FloatingCardProps) -> Html {
    let timing = use_state(|| FloatingTiming::from_samples(Math::random(), Math::random()));
    let style = format!(
        "{} transform: translateY({}px);",
        timing.css(),
        parallax_offset(props.scroll_y, props.index)
    );

    html! {
        <div class="floating-card" {style}>
            <span class="floating-icon">{ props.icon.clone() }</span>
            <span>{ props.label.clone() }</span>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_y = use_scroll_y();
    let title = use_state(|| Typewriter::new(HERO_TITLE));
    let typed = (*title).clone();

    // One character per tick until the title is fully typed
    {
        let title = title.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let timeout = (!current.is_done()).then(|| {
                    let mut next = current.clone();
                    Timeout::new(config::TYPEWRITER_SPEED_MS, move || {
                        next.advance();
                        title.set(next);
                    })
                });
                move || drop(timeout)
            },
            typed,
        );
    }

    let cards = [("🧠", "AI Powered"), ("⚡", "Lightning Fast"), ("🔒", "Secure by Default")];

    html! {
        <section id="home" class="hero">
            <div class="hero-content" data-aos="fade-up">
                <h1 class="hero-title">
                    <span class="gradient-text" aria-label={HERO_TITLE}>{ title.visible() }</span>
                </h1>
                <p class="hero-subtitle">
                    {"MindBud Innovations builds thoughtful software products that help teams think, plan and ship faster."}
                </p>
                <div class="hero-buttons">
                    <SparkleButton onclick={dom::anchor_click("products")}>{"Explore Products"}</SparkleButton>
                    <a href="#contact" class="btn btn-secondary" onclick={dom::anchor_click("contact")}>{"Get in Touch"}</a>
                </div>
            </div>
            <div class="hero-visual">
                { for cards.iter().enumerate().map(|(index, (icon, label))| html! {
                    <FloatingCard {index} {scroll_y} icon={*icon} label={*label} />
                }) }
            </div>
        </section>
    }
}
