use std::cell::RefCell;
use std::rc::Rc;

/// Shared slot for the one job still waiting to run.
///
/// Scheduling a new job drops the previous one. With a gloo `Timeout` that
/// cancels it, so only the latest timer ever fires.
#[derive(Debug)]
pub struct Pending<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for Pending<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> Pending<T> {
    pub fn replace(&self, job: T) {
        // swap first so the old job is dropped outside the borrow
        let previous = self.0.borrow_mut().replace(job);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.0.borrow_mut().take();
        drop(previous);
    }

    pub fn is_scheduled(&self) -> bool {
        self.0.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Job {
        name: &'static str,
        dropped: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for Job {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.name);
        }
    }

    fn job(name: &'static str, dropped: &Rc<RefCell<Vec<&'static str>>>) -> Job {
        Job { name, dropped: dropped.clone() }
    }

    #[test]
    fn latest_job_wins() {
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let pending = Pending::default();

        pending.replace(job("first", &dropped));
        pending.replace(job("second", &dropped));
        pending.replace(job("third", &dropped));

        assert_eq!(*dropped.borrow(), vec!["first", "second"]);
        assert!(pending.is_scheduled());
    }

    #[test]
    fn cancel_drops_the_waiting_job() {
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let pending = Pending::default();
        pending.replace(job("resize", &dropped));

        pending.cancel();

        assert_eq!(*dropped.borrow(), vec!["resize"]);
        assert!(!pending.is_scheduled());
        pending.cancel();
        assert_eq!(dropped.borrow().len(), 1);
    }

    #[test]
    fn clones_share_one_slot() {
        let runs = Rc::new(Cell::new(0));
        let pending: Pending<Rc<Cell<u32>>> = Pending::default();
        let from_listener = pending.clone();

        from_listener.replace(runs.clone());
        assert!(pending.is_scheduled());
        pending.cancel();
        assert!(!from_listener.is_scheduled());
        assert_eq!(Rc::strong_count(&runs), 1);
    }
}
