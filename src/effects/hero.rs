/// Reveals a title one character at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Shows one more character. Returns false once everything is visible.
    pub fn advance(&mut self) -> bool {
        if self.shown < self.chars.len() {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

/// Randomised bob timing for a floating hero card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingTiming {
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl FloatingTiming {
    /// Maps two uniform samples in `[0, 1)` to a delay in `[0, 2)` and a
    /// duration in `[4, 6)`.
    pub fn from_samples(delay_sample: f64, duration_sample: f64) -> Self {
        Self {
            delay_secs: delay_sample * 2.0,
            duration_secs: 4.0 + duration_sample * 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "animation-delay: {}s; animation-duration: {}s;",
            self.delay_secs, self.duration_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_reveals_in_order() {
        let mut typer = Typewriter::new("Hi!");
        assert_eq!(typer.visible(), "");
        assert!(typer.advance());
        assert_eq!(typer.visible(), "H");
        assert!(typer.advance());
        assert!(typer.advance());
        assert_eq!(typer.visible(), "Hi!");
        assert!(typer.is_done());
        assert!(!typer.advance());
    }

    #[test]
    fn typewriter_handles_multibyte_text() {
        let mut typer = Typewriter::new("🚀 go");
        typer.advance();
        assert_eq!(typer.visible(), "🚀");
    }

    #[test]
    fn empty_title_is_already_done() {
        assert!(Typewriter::new("").is_done());
    }

    #[test]
    fn floating_timing_ranges() {
        let low = FloatingTiming::from_samples(0.0, 0.0);
        assert_eq!(low.delay_secs, 0.0);
        assert_eq!(low.duration_secs, 4.0);

        let high = FloatingTiming::from_samples(0.999, 0.999);
        assert!(high.delay_secs < 2.0);
        assert!(high.duration_secs < 6.0);
        assert_eq!(
            FloatingTiming::from_samples(0.5, 0.5).css(),
            "animation-delay: 1s; animation-duration: 5s;"
        );
    }
}
