/// Leading-edge rate limiter driven by an injected clock.
///
/// The first call is accepted, then every call is rejected until `limit_ms`
/// has passed since the last accepted one.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_accepted: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_accepted: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_accepted {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_accepted = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_runs() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(1_000.0));
    }

    #[test]
    fn calls_inside_the_window_are_dropped() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(5.0));
        assert!(!throttle.ready(15.9));
        assert!(throttle.ready(16.0));
        assert!(!throttle.ready(20.0));
    }

    #[test]
    fn window_restarts_from_last_accepted_call() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(99.0));
        // rejected calls must not extend the window
        assert!(throttle.ready(100.0));
        assert!(throttle.ready(250.0));
    }
}
