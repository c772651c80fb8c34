use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    LogoClick,
    CloseClick,
    BackdropClick,
    Escape,
    ContentClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTransition {
    Opened,
    Closed,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open)
    }

    /// Returns the transition taken, or `None` when the event changes nothing.
    pub fn apply(&mut self, event: ModalEvent) -> Option<ModalTransition> {
        match (*self, event) {
            (ModalState::Closed, ModalEvent::LogoClick) => {
                *self = ModalState::Open;
                Some(ModalTransition::Opened)
            }
            (
                ModalState::Open,
                ModalEvent::CloseClick | ModalEvent::BackdropClick | ModalEvent::Escape,
            ) => {
                *self = ModalState::Closed;
                Some(ModalTransition::Closed)
            }
            _ => None,
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match next.apply(action) {
            Some(transition) => {
                log::debug!("Logo modal {:?} by {:?}", transition, action);
                Rc::new(next)
            }
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_click_opens() {
        let mut modal = ModalState::Closed;
        assert_eq!(modal.apply(ModalEvent::LogoClick), Some(ModalTransition::Opened));
        assert!(modal.is_open());
    }

    #[test]
    fn escape_closes_an_open_modal() {
        let mut modal = ModalState::Open;
        assert_eq!(modal.apply(ModalEvent::Escape), Some(ModalTransition::Closed));
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn escape_on_closed_modal_is_ignored() {
        let mut modal = ModalState::Closed;
        assert_eq!(modal.apply(ModalEvent::Escape), None);
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn close_button_and_backdrop_both_close() {
        for event in [ModalEvent::CloseClick, ModalEvent::BackdropClick] {
            let mut modal = ModalState::Open;
            assert_eq!(modal.apply(event), Some(ModalTransition::Closed));
        }
    }

    #[test]
    fn content_click_never_closes() {
        let mut modal = ModalState::Open;
        assert_eq!(modal.apply(ModalEvent::ContentClick), None);
        assert!(modal.is_open());

        let mut closed = ModalState::Closed;
        assert_eq!(closed.apply(ModalEvent::ContentClick), None);
    }

    #[test]
    fn reopen_after_close() {
        let mut modal = ModalState::default();
        modal.apply(ModalEvent::LogoClick);
        modal.apply(ModalEvent::BackdropClick);
        assert_eq!(modal.apply(ModalEvent::LogoClick), Some(ModalTransition::Opened));
    }
}
