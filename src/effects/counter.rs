/// Nominal frame length the per-frame increment is derived from.
const FRAME_MS: f64 = 16.0;

/// Pulls the integer out of a stat label such as "1,234+" or "99%".
///
/// Zero or a label without digits is not worth animating.
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Formats with comma thousands separators, e.g. 1234567 -> "1,234,567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Finished(u64),
}

impl CounterFrame {
    pub fn value(&self) -> u64 {
        match self {
            CounterFrame::Running(value) | CounterFrame::Finished(value) => *value,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CounterFrame::Finished(_))
    }

    pub fn text(&self) -> String {
        group_thousands(self.value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        let frames = (duration_ms / FRAME_MS).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Advances one frame. Once the target is reached it snaps to it exactly.
    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            self.current = self.target as f64;
            CounterFrame::Finished(self.target)
        }
    }
}

/// One `.stat-number`: its parsed target and whether it already ran.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    target: Option<u64>,
    animated: bool,
}

impl StatCounter {
    pub fn from_text(text: &str) -> Self {
        Self {
            target: parse_target(text),
            animated: false,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Hands out the animation the first time only.
    pub fn trigger(&mut self, duration_ms: f64) -> Option<CounterAnimation> {
        let target = self.target?;
        if self.animated {
            return None;
        }
        self.animated = true;
        Some(CounterAnimation::new(target, duration_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_out_of_labels() {
        assert_eq!(parse_target("1,234+"), Some(1234));
        assert_eq!(parse_target("99%"), Some(99));
        assert_eq!(parse_target("24/7"), Some(247));
        assert_eq!(parse_target("0"), None);
        assert_eq!(parse_target("Fast"), None);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn counts_up_monotonically_and_lands_on_target() {
        let mut animation = CounterAnimation::new(1234, 2000.0);
        let mut last = 0;
        let mut frames = 0;
        let final_frame = loop {
            let frame = animation.step();
            frames += 1;
            assert!(frame.value() >= last, "went backwards at frame {}", frames);
            last = frame.value();
            if frame.is_finished() {
                break frame;
            }
            assert!(frames < 1_000, "never finished");
        };
        assert_eq!(final_frame, CounterFrame::Finished(1234));
        assert_eq!(final_frame.text(), "1,234");
        // 2000ms at 16ms per frame, give or take float accumulation
        assert!((125..=126).contains(&frames), "took {} frames", frames);
    }

    #[test]
    fn small_targets_still_finish() {
        let mut animation = CounterAnimation::new(3, 2000.0);
        let mut frame = animation.step();
        while !frame.is_finished() {
            assert!(frame.value() <= 3);
            frame = animation.step();
        }
        assert_eq!(frame.value(), 3);
    }

    #[test]
    fn retrigger_is_a_noop() {
        let mut counter = StatCounter::from_text("1234");
        assert!(counter.trigger(2000.0).is_some());
        assert!(counter.is_animated());
        assert!(counter.trigger(2000.0).is_none());
    }

    #[test]
    fn labels_without_a_number_never_animate() {
        let mut counter = StatCounter::from_text("AI");
        assert!(counter.trigger(2000.0).is_none());
        assert!(!counter.is_animated());
    }
}
