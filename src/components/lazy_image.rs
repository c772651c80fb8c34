use web_sys::Element;
use yew::prelude::*;

use crate::dom::VisibilityObserver;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An image that only fetches its source once it scrolls into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let img_ref = use_node_ref();
    let loaded = use_state(|| false);
    let is_loaded = *loaded;

    {
        let img_ref = img_ref.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |is_loaded| {
                let observer = if *is_loaded {
                    None
                } else {
                    img_ref.cast::<Element>().and_then(|img| {
                        let on_visible = loaded.clone();
                        match VisibilityObserver::new(&img, 0.0, None, move |visible| {
                            if visible {
                                on_visible.set(true);
                            }
                        }) {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                // no IntersectionObserver, just load it
                                log::debug!("Lazy loading unavailable: {}", e);
                                loaded.set(true);
                                None
                            }
                        }
                    })
                };
                move || drop(observer)
            },
            is_loaded,
        );
    }

    let src = (*loaded).then(|| props.src.clone());
    html! {
        <img
            ref={img_ref}
            class={classes!(props.class.clone(), (!*loaded).then(|| "lazy"))}
            {src}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
        />
    }
}
