use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod aos;
mod config;
mod dom;
mod error;
mod hooks;
mod effects {
    pub mod carousel;
    pub mod contact;
    pub mod counter;
    pub mod decor;
    pub mod frame_monitor;
    pub mod hero;
    pub mod modal;
    pub mod nav;
    pub mod pending;
    pub mod scroll;
    pub mod throttle;
    pub mod toast;
}
mod components {
    pub mod cards;
    pub mod carousel;
    pub mod contact_form;
    pub mod hero;
    pub mod lazy_image;
    pub mod logo_modal;
    pub mod notification;
    pub mod scroll_progress;
    pub mod sparkle_button;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::{
    logo_modal::LogoModal,
    notification::ToastHost,
    scroll_progress::ScrollProgress,
};
use effects::{
    modal::{ModalEvent, ModalState},
    nav::MobileMenu,
    scroll::NavbarStyle,
};
use hooks::use_scroll_y;
use pages::{landing::Landing, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}


const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("products", "Products"),
    ("about", "About"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_logo_click: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { on_logo_click } = props;
    let menu = use_state(MobileMenu::default);
    let navbar_style = NavbarStyle::from_offset(use_scroll_y());

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let handle_logo = {
        let on_logo_click = on_logo_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_logo_click.emit(());
        })
    };

    let links = NAV_LINKS.iter().map(|(anchor, label)| {
        let scroll = dom::anchor_click(*anchor);
        let menu = menu.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            menu.set(MobileMenu::closed());
            scroll.emit(e);
        });
        html! {
            <li><a href={format!("#{}", anchor)} class="nav-link" {onclick}>{ *label }</a></li>
        }
    });

    html! {
        <nav class="navbar" style={navbar_style.css()}>
            <div class="nav-container">
                <a href="#" class="nav-logo" onclick={handle_logo}>
                    <img src="/assets/logo.png" alt="" />
                    <span>{"MindBud"}</span>
                </a>

                <ul id="nav-menu" class={menu.menu_class()}>
                    { for links }
                </ul>

                <button id="nav-toggle" class="nav-toggle" onclick={toggle_menu} aria-label="Toggle menu" aria-expanded={menu.is_open().to_string()}>
                    { for (0..3).map(|i| html! { <span class="bar" style={menu.bar_style(i)}></span> }) }
                </button>
            </div>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        width: min(1100px, calc(100% - 2rem));
                        border: 1px solid;
                        border-radius: 20px;
                        z-index: 1000;
                        transition: all 0.3s ease;
                    }
                    .nav-container {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1.5rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #f8fafc;
                        text-decoration: none;
                        font-weight: 700;
                    }
                    .nav-logo img {
                        height: 32px;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        color: #cbd5e1;
                        text-decoration: none;
                    }
                    .nav-toggle {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .bar {
                        width: 24px;
                        height: 3px;
                        background: #f8fafc;
                        transition: all 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .nav-toggle {
                            display: flex;
                        }
                        .nav-menu {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 1.5rem;
                            background: rgba(15, 23, 42, 0.95);
                            border-radius: 0 0 20px 20px;
                            display: none;
                        }
                        .nav-menu.active {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let modal = use_reducer_eq(ModalState::default);

    let on_modal_event = {
        let modal = modal.clone();
        Callback::from(move |event: ModalEvent| modal.dispatch(event))
    };

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalEvent::LogoClick))
    };

    html! {
        <BrowserRouter>
            <ToastHost>
                <ScrollProgress />
                <Nav on_logo_click={open_modal} />
                <LogoModal open={modal.is_open()} on_event={on_modal_event} />
                <Switch<Route> render={switch} />
            </ToastHost>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
    info!("🚀 MindBud Innovations website loaded successfully!");
}
