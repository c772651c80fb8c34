use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Info => "#3b82f6",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    /// Render key. A replacement toast gets a new node so its entrance replays.
    pub fn dom_key(&self) -> String {
        format!("toast-{}", self.id)
    }

    pub fn style(&self) -> String {
        let animation = match self.phase {
            ToastPhase::Showing => "slideInRight 0.3s ease-out",
            ToastPhase::Leaving => "slideOutRight 0.3s ease-out forwards",
        };
        format!("background: {}; animation: {};", self.severity.color(), animation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Show { message: String, severity: Severity },
    /// Starts the exit animation.
    Dismiss(u64),
    /// Drops the toast once the exit animation is over.
    Remove(u64),
}

/// Holds at most one notification. Timers carry the id they were started
/// for, so anything aimed at a replaced toast falls through.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Show { message, severity } => {
                self.next_id += 1;
                self.current = Some(Toast {
                    id: self.next_id,
                    message,
                    severity,
                    phase: ToastPhase::Showing,
                });
            }
            ToastAction::Dismiss(id) => {
                if let Some(toast) = self.current.as_mut().filter(|t| t.id == id) {
                    toast.phase = ToastPhase::Leaving;
                }
            }
            ToastAction::Remove(id) => {
                if self.current.as_ref().map(|t| t.id) == Some(id) {
                    self.current = None;
                }
            }
        }
    }
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
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

    fn show(slot: &mut ToastSlot, message: &str, severity: Severity) -> u64 {
        slot.apply(ToastAction::Show {
            message: message.to_string(),
            severity,
        });
        slot.current().map(|t| t.id).unwrap()
    }

    #[test]
    fn severity_colors() {
        assert_eq!(Severity::Success.color(), "#10b981");
        assert_eq!(Severity::Error.color(), "#ef4444");
        assert_eq!(Severity::Info.color(), "#3b82f6");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn second_toast_replaces_the_first() {
        let mut slot = ToastSlot::default();
        let first = show(&mut slot, "one", Severity::Info);
        let second = show(&mut slot, "two", Severity::Error);
        assert_ne!(first, second);

        let current = slot.current().unwrap();
        assert_eq!(current.message, "two");
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.phase, ToastPhase::Showing);
    }

    #[test]
    fn dismiss_then_remove() {
        let mut slot = ToastSlot::default();
        let id = show(&mut slot, "saved", Severity::Success);

        slot.apply(ToastAction::Dismiss(id));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);
        assert!(slot.current().unwrap().style().contains("slideOutRight"));

        slot.apply(ToastAction::Remove(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_timers_do_not_touch_the_replacement() {
        let mut slot = ToastSlot::default();
        let old = show(&mut slot, "old", Severity::Info);
        let new = show(&mut slot, "new", Severity::Info);

        slot.apply(ToastAction::Dismiss(old));
        slot.apply(ToastAction::Remove(old));

        let current = slot.current().unwrap();
        assert_eq!(current.id, new);
        assert_eq!(current.phase, ToastPhase::Showing);
    }

    #[test]
    fn replacement_with_same_severity_renders_as_a_new_node() {
        let mut slot = ToastSlot::default();
        show(&mut slot, "copied", Severity::Success);
        let first = slot.current().unwrap().clone();
        show(&mut slot, "copied again", Severity::Success);
        let second = slot.current().unwrap();

        assert_eq!(first.style(), second.style());
        assert_ne!(first.dom_key(), second.dom_key());
    }

    #[test]
    fn reduce_returns_same_rc_for_noops() {
        let slot = Rc::new(ToastSlot::default());
        let next = slot.clone().reduce(ToastAction::Remove(42));
        assert!(Rc::ptr_eq(&slot, &next));
    }

    #[test]
    fn style_carries_severity_color() {
        let mut slot = ToastSlot::default();
        show(&mut slot, "oops", Severity::Error);
        let style = slot.current().unwrap().style();
        assert!(style.contains("#ef4444"));
        assert!(style.contains("slideInRight"));
    }
}
