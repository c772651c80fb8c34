use chrono::Datelike;
use yew::prelude::*;

use crate::aos;
use crate::components::carousel::Carousel;
use crate::components::cards::{ProductCard, Stat, TechItem, TestimonialCard};
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::lazy_image::LazyImage;
use crate::config::AosOptions;
use crate::effects::carousel::CarouselKind;
use crate::hooks::use_frame_monitor;

struct Product {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    stats: &'static [(&'static str, &'static str)],
}

const PRODUCTS: &[Product] = &[
    Product {
        icon: "🧠",
        title: "ThinkSpace",
        description: "A shared canvas where ideas, notes and tasks grow into plans.",
        stats: &[("12,500+", "Active teams"), ("98%", "Satisfaction")],
    },
    Product {
        icon: "📊",
        title: "InsightFlow",
        description: "Dashboards that explain themselves, powered by plain-language queries.",
        stats: &[("1,234", "Data sources"), ("40%", "Faster reports")],
    },
    Product {
        icon: "🤖",
        title: "BudBot",
        description: "A support assistant that learns your product docs overnight.",
        stats: &[("250,000+", "Chats answered"), ("24/7", "Availability")],
    },
    Product {
        icon: "🔐",
        title: "VaultKey",
        description: "Zero-knowledge secret sharing for small teams.",
        stats: &[("5,000+", "Vaults"), ("0", "Breaches")],
    },
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "ThinkSpace replaced three tools for us and the team actually enjoys planning now.",
        "Priya Raman",
        "Head of Product, Nimbus",
    ),
    (
        "BudBot handles most of our first-line questions before we're even awake.",
        "Tomás Okafor",
        "Support Lead, Parcelly",
    ),
    (
        "InsightFlow made our weekly metrics review a ten minute conversation.",
        "Lena Hoffmann",
        "COO, Greenline",
    ),
    (
        "Setting up VaultKey took an afternoon. Onboarding new hires is painless.",
        "Sam Whitaker",
        "CTO, Brightforge",
    ),
];

const TECH_STACK: &[&str] = &["Rust", "WebAssembly", "TypeScript", "PostgreSQL", "Kubernetes", "PyTorch"];

#[function_component(Landing)]
pub fn landing() -> Html {
    let reduced_effects = use_frame_monitor();

    // Animate-on-scroll runs once the sections are in the DOM
    use_effect_with_deps(
        move |_| {
            match aos::init(&AosOptions::default()) {
                Ok(()) => log::debug!("Animate-on-scroll initialised"),
                Err(e) => log::warn!("Animate-on-scroll unavailable: {}", e),
            }
            || ()
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <div class={classes!("landing-page", reduced_effects.then(|| "reduced-effects"))}>
            <Hero />

            <section id="products" class="products" data-aos="fade-up">
                <div class="section-header">
                    <h2>{"Our Products"}</h2>
                    <p>{"Tools we build, use and keep improving every week."}</p>
                </div>
                <Carousel kind={CarouselKind::Products}>
                    { for PRODUCTS.iter().map(|product| html! {
                        <ProductCard
                            icon={product.icon}
                            title={product.title}
                            description={product.description}
                            stats={product.stats.iter().map(|(value, label)| Stat {
                                value: AttrValue::Static(*value),
                                label: AttrValue::Static(*label),
                            }).collect::<Vec<_>>()}
                        />
                    }) }
                </Carousel>
            </section>

            <section id="about" class="about" data-aos="fade-up">
                <div class="about-text">
                    <h2>{"Built by Curious People"}</h2>
                    <p>{"We are a small studio of engineers and designers who care about software that feels calm to use."}</p>
                    <div class="tech-stack">
                        { for TECH_STACK.iter().map(|name| html! { <TechItem name={*name} /> }) }
                    </div>
                </div>
                <div class="about-visual">
                    <LazyImage src="/assets/team.webp" alt="The MindBud team at work" class={classes!("about-image")} />
                </div>
            </section>

            <section id="testimonials" class="testimonials" data-aos="fade-up">
                <div class="section-header">
                    <h2>{"What Teams Say"}</h2>
                </div>
                <Carousel kind={CarouselKind::Testimonials}>
                    { for TESTIMONIALS.iter().map(|(quote, author, role)| html! {
                        <TestimonialCard quote={*quote} author={*author} role={*role} />
                    }) }
                </Carousel>
            </section>

            <section id="contact" class="contact" data-aos="fade-up">
                <div class="section-header">
                    <h2>{"Let's Talk"}</h2>
                    <p>{"Tell us what you're building. We usually reply within a day."}</p>
                </div>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{ format!("© {} MindBud Innovations. All rights reserved.", year) }</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #0f172a;
                    color: #e2e8f0;
                    overflow-x: hidden;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 8rem 2rem 4rem;
                    gap: 2rem;
                }

                .gradient-text {
                    background: linear-gradient(135deg, #60a5fa, #a78bfa);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .hero-visual {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .floating-card {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border-radius: 16px;
                    background: rgba(30, 41, 59, 0.7);
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    animation-name: float;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }

                @keyframes float {
                    0%, 100% { translate: 0 0; }
                    50% { translate: 0 -12px; }
                }

                .btn {
                    padding: 0.9rem 1.8rem;
                    border-radius: 999px;
                    border: none;
                    font-weight: 600;
                    cursor: pointer;
                    text-decoration: none;
                    display: inline-block;
                }

                .btn-primary {
                    background: linear-gradient(135deg, #667eea, #764ba2);
                    color: white;
                }

                .btn-primary:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }

                .btn-secondary {
                    background: transparent;
                    color: #e2e8f0;
                    border: 1px solid rgba(148, 163, 184, 0.4);
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .products, .testimonials, .about, .contact {
                    padding: 6rem 2rem;
                }

                .carousel-container {
                    overflow: hidden;
                    -webkit-overflow-scrolling: touch;
                    scroll-behavior: smooth;
                }

                .carousel-track {
                    display: flex;
                    gap: 2rem;
                    width: max-content;
                    animation: carousel-scroll 60s linear infinite;
                }

                .testimonials-carousel {
                    animation-duration: 80s;
                }

                @keyframes carousel-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                .product-card, .testimonial-card {
                    width: 320px;
                    flex-shrink: 0;
                    padding: 2rem;
                    border-radius: 20px;
                    background: rgba(30, 41, 59, 0.6);
                    border: 1px solid rgba(148, 163, 184, 0.15);
                    transition: transform 0.3s ease;
                }

                .product-stats {
                    display: flex;
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }

                .stat-number {
                    display: block;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #60a5fa;
                }

                .reduced-effects .carousel-track,
                .reduced-effects .product-card,
                .reduced-effects .testimonial-card {
                    will-change: transform;
                }

                .about {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .tech-stack {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .tech-item {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    background: rgba(96, 165, 250, 0.1);
                    transition: transform 0.3s ease;
                }

                .about-image {
                    width: 100%;
                    border-radius: 20px;
                    transition: opacity 0.4s ease;
                }

                .about-image.lazy {
                    opacity: 0;
                }

                .contact-form {
                    max-width: 560px;
                    margin: 0 auto;
                }

                .form-group input, .form-group textarea {
                    width: 100%;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(148, 163, 184, 0.3);
                    background: rgba(15, 23, 42, 0.6);
                    color: #e2e8f0;
                }

                .footer {
                    text-align: center;
                    padding: 2rem;
                    color: #94a3b8;
                }

                @keyframes sparkleAnimation {
                    0% { transform: scale(0) rotate(0deg); opacity: 1; }
                    50% { transform: scale(1) rotate(180deg); opacity: 1; }
                    100% { transform: scale(0) rotate(360deg); opacity: 0; }
                }

                @media (max-width: 768px) {
                    .hero {
                        flex-direction: column;
                        text-align: center;
                    }
                    .about {
                        grid-template-columns: 1fr;
                    }
                    .product-card, .testimonial-card {
                        width: 260px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
