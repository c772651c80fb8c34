use gloo_timers::callback::Timeout;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, AnimationLoop, EventListener};
use crate::effects::frame_monitor::FrameMonitor;
use crate::effects::pending::Pending;
use crate::effects::throttle::Throttle;

/// Current `window.scrollY`, refreshed at most once per throttle window.
///
/// A scroll that lands inside a closed window is picked up by a trailing
/// refresh, so the last position is never lost.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(dom::scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let mut throttle = Throttle::new(config::SCROLL_THROTTLE_MS as f64);
                let trailing: Pending<Timeout> = Pending::default();
                let pending = trailing.clone();

                let listener = dom::window().and_then(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        if throttle.ready(Date::now()) {
                            scroll_y.set(dom::scroll_y());
                            return;
                        }
                        let scroll_y = scroll_y.clone();
                        // replacing the handle cancels the previous trailing refresh
                        pending.replace(Timeout::new(config::SCROLL_THROTTLE_MS, move || {
                            scroll_y.set(dom::scroll_y());
                        }));
                    })
                });
                if let Err(e) = &listener {
                    log::warn!("Scroll tracking disabled: {}", e);
                }

                move || {
                    drop(listener);
                    trailing.cancel();
                }
            },
            (),
        );
    }

    *scroll_y
}

/// `window.innerWidth`, updated 250ms after the last resize event.
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state(dom::viewport_width);

    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let debounce: Pending<Timeout> = Pending::default();
                let pending = debounce.clone();

                let listener = dom::window().and_then(|window| {
                    EventListener::new(&window, "resize", move |_| {
                        let width = width.clone();
                        pending.replace(Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                            width.set(dom::viewport_width());
                        }));
                    })
                });
                if let Err(e) = &listener {
                    log::warn!("Resize tracking disabled: {}", e);
                }

                move || {
                    drop(listener);
                    debounce.cancel();
                }
            },
            (),
        );
    }

    *width
}

/// Turns true (and stays true) once the page drops below 30fps.
#[hook]
pub fn use_frame_monitor() -> bool {
    let degraded = use_state(|| false);

    {
        let degraded = degraded.clone();
        use_effect_with_deps(
            move |_| {
                let mut monitor: Option<FrameMonitor> = None;
                let frame_loop = AnimationLoop::start(move |timestamp| {
                    let monitor = monitor.get_or_insert_with(|| FrameMonitor::new(timestamp));
                    if let Some(fps) = monitor.record(timestamp) {
                        log::trace!("{} fps", fps);
                        if monitor.is_degraded() {
                            log::info!("Frame rate dropped to {} fps, reducing effects", fps);
                            degraded.set(true);
                            return false;
                        }
                    }
                    true
                });
                if let Err(e) = &frame_loop {
                    log::warn!("Frame monitor disabled: {}", e);
                }
                move || drop(frame_loop)
            },
            (),
        );
    }

    *degraded
}
