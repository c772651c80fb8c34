use yew::prelude::*;

use crate::dom;
use crate::effects::scroll::progress_percent;
use crate::hooks::use_scroll_y;

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let scroll_y = use_scroll_y();
    let percent = progress_percent(scroll_y, dom::document_scroll_height(), dom::viewport_height());

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", percent)}
            style={format!("width: {}%;", percent)}
        >
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 3px;
                        background: linear-gradient(90deg, #667eea, #764ba2);
                        z-index: 10001;
                        transition: width 0.1s ease;
                    }
                "#}
            </style>
        </div>
    }
}
