use std::rc::Rc;
use yew::Reducible;

/// Which strip a track belongs to. Each kind has its own speed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKind {
    Products,
    Testimonials,
}

impl CarouselKind {
    pub fn class(&self) -> &'static str {
        match self {
            CarouselKind::Products => "products-carousel",
            CarouselKind::Testimonials => "testimonials-carousel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < 768.0 {
            Breakpoint::Mobile
        } else if width < 1024.0 {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Seconds for one full loop of the doubled track.
pub fn animation_duration_secs(kind: CarouselKind, breakpoint: Breakpoint) -> u32 {
    match (kind, breakpoint) {
        (CarouselKind::Products, Breakpoint::Mobile) => 40,
        (CarouselKind::Products, Breakpoint::Tablet) => 50,
        (CarouselKind::Products, Breakpoint::Desktop) => 60,
        (CarouselKind::Testimonials, Breakpoint::Mobile) => 50,
        (CarouselKind::Testimonials, Breakpoint::Tablet) => 65,
        (CarouselKind::Testimonials, Breakpoint::Desktop) => 80,
    }
}

/// Cards followed by a copy of themselves, so the loop can wrap at -50%.
pub fn looped<T: Clone>(cards: &[T]) -> Vec<T> {
    cards.iter().chain(cards.iter()).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    pub fn as_css(&self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    PointerEnter,
    PointerLeave,
    ViewportChanged { intersecting: bool },
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f64,
    current_x: f64,
}

/// Interaction flags for one track.
///
/// The track only runs while it is on screen and nobody is pointing at or
/// touching it; any one of those pauses it regardless of event order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    hovered: bool,
    visible: bool,
    drag: Option<Drag>,
}

impl Default for CarouselState {
    fn default() -> Self {
        // the CSS animation starts running before the first intersection report
        Self {
            hovered: false,
            visible: true,
            drag: None,
        }
    }
}

impl CarouselState {
    pub fn apply(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::PointerEnter => self.hovered = true,
            CarouselEvent::PointerLeave => self.hovered = false,
            CarouselEvent::ViewportChanged { intersecting } => self.visible = intersecting,
            CarouselEvent::TouchStart { x } => {
                self.drag = Some(Drag {
                    start_x: x,
                    current_x: x,
                })
            }
            CarouselEvent::TouchMove { x } => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.current_x = x;
                }
            }
            CarouselEvent::TouchEnd => self.drag = None,
        }
    }

    pub fn play_state(&self) -> PlayState {
        if self.visible && !self.hovered && self.drag.is_none() {
            PlayState::Running
        } else {
            PlayState::Paused
        }
    }

    /// Damped horizontal offset while a finger is down.
    pub fn drag_offset(&self) -> Option<f64> {
        self.drag.map(|drag| (drag.current_x - drag.start_x) * 0.5)
    }

    pub fn transform(&self) -> String {
        match self.drag_offset() {
            Some(offset) => format!("translateX({}px)", offset),
            None => String::new(),
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(events: &[CarouselEvent]) -> CarouselState {
        let mut state = CarouselState::default();
        for event in events {
            state.apply(*event);
        }
        state
    }

    #[test]
    fn duration_table_matches_every_breakpoint() {
        let cases = [
            (320.0, CarouselKind::Products, 40),
            (767.0, CarouselKind::Products, 40),
            (768.0, CarouselKind::Products, 50),
            (1023.0, CarouselKind::Products, 50),
            (1024.0, CarouselKind::Products, 60),
            (1920.0, CarouselKind::Products, 60),
            (320.0, CarouselKind::Testimonials, 50),
            (800.0, CarouselKind::Testimonials, 65),
            (1440.0, CarouselKind::Testimonials, 80),
        ];
        for (width, kind, expected) in cases {
            assert_eq!(
                animation_duration_secs(kind, Breakpoint::from_width(width)),
                expected,
                "{:?} at {}px",
                kind,
                width
            );
        }
    }

    #[test]
    fn looped_track_repeats_cards_in_order() {
        let track = looped(&["a", "b", "c"]);
        assert_eq!(track, vec!["a", "b", "c", "a", "b", "c"]);
        assert!(looped::<u8>(&[]).is_empty());
    }

    #[test]
    fn pointer_enter_always_pauses() {
        assert_eq!(
            state_after(&[CarouselEvent::PointerEnter]).play_state(),
            PlayState::Paused
        );
        assert_eq!(
            state_after(&[
                CarouselEvent::ViewportChanged { intersecting: false },
                CarouselEvent::PointerEnter
            ])
            .play_state(),
            PlayState::Paused
        );
    }

    #[test]
    fn pointer_leave_resumes_only_when_on_screen() {
        let visible = state_after(&[
            CarouselEvent::ViewportChanged { intersecting: true },
            CarouselEvent::PointerEnter,
            CarouselEvent::PointerLeave,
        ]);
        assert_eq!(visible.play_state(), PlayState::Running);

        let hidden = state_after(&[
            CarouselEvent::PointerEnter,
            CarouselEvent::ViewportChanged { intersecting: false },
            CarouselEvent::PointerLeave,
        ]);
        assert_eq!(hidden.play_state(), PlayState::Paused);
    }

    #[test]
    fn entering_viewport_while_hovered_stays_paused() {
        let state = state_after(&[
            CarouselEvent::ViewportChanged { intersecting: false },
            CarouselEvent::PointerEnter,
            CarouselEvent::ViewportChanged { intersecting: true },
        ]);
        assert_eq!(state.play_state(), PlayState::Paused);
    }

    #[test]
    fn touch_drag_applies_half_the_delta() {
        let mut state = CarouselState::default();
        state.apply(CarouselEvent::TouchStart { x: 200.0 });
        assert_eq!(state.play_state(), PlayState::Paused);
        assert_eq!(state.transform(), "translateX(0px)");

        state.apply(CarouselEvent::TouchMove { x: 120.0 });
        assert_eq!(state.drag_offset(), Some(-40.0));
        assert_eq!(state.transform(), "translateX(-40px)");

        state.apply(CarouselEvent::TouchEnd);
        assert_eq!(state.drag_offset(), None);
        assert_eq!(state.transform(), "");
        assert_eq!(state.play_state(), PlayState::Running);
    }

    #[test]
    fn stray_touch_move_is_ignored() {
        let state = state_after(&[CarouselEvent::TouchMove { x: 50.0 }]);
        assert_eq!(state, CarouselState::default());
    }

    #[test]
    fn reduce_keeps_identity_when_nothing_changes() {
        let state = Rc::new(CarouselState::default());
        let next = state.clone().reduce(CarouselEvent::PointerLeave);
        assert!(Rc::ptr_eq(&state, &next));

        let paused = state.clone().reduce(CarouselEvent::PointerEnter);
        assert_eq!(paused.play_state(), PlayState::Paused);
    }
}
