//! Purely decorative effects: hover lifts and button sparkles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// Product and testimonial cards.
    Card,
    TechItem,
}

impl HoverTarget {
    pub fn transform(&self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (HoverTarget::Card, true) => "translateY(-10px) scale(1.02)",
            (HoverTarget::Card, false) => "translateY(0) scale(1)",
            (HoverTarget::TechItem, true) => "translateY(-5px) rotate(5deg)",
            (HoverTarget::TechItem, false) => "translateY(0) rotate(0deg)",
        }
    }
}

pub const SPARKLE_COUNT: u32 = 6;
pub const SPARKLE_STAGGER_MS: u32 = 50;
pub const SPARKLE_LIFETIME_MS: u32 = 600;
const SPARKLE_SPREAD: f64 = 20.0;

/// Spawn point for one sparkle, jittered around the click by up to half the
/// spread in each direction. Samples are uniform in `[0, 1)`.
pub fn sparkle_position(click_x: f64, click_y: f64, sample_x: f64, sample_y: f64) -> (f64, f64) {
    (
        click_x + (sample_x - 0.5) * SPARKLE_SPREAD,
        click_y + (sample_y - 0.5) * SPARKLE_SPREAD,
    )
}

pub fn sparkle_style(x: f64, y: f64) -> String {
    format!(
        "position: fixed; width: 4px; height: 4px; background: #ffd700; border-radius: 50%; \
         pointer-events: none; animation: sparkleAnimation 0.6s ease-out forwards; \
         left: {}px; top: {}px; z-index: 1000;",
        x, y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_transforms() {
        assert_eq!(HoverTarget::Card.transform(true), "translateY(-10px) scale(1.02)");
        assert_eq!(HoverTarget::Card.transform(false), "translateY(0) scale(1)");
        assert_eq!(HoverTarget::TechItem.transform(true), "translateY(-5px) rotate(5deg)");
        assert_eq!(HoverTarget::TechItem.transform(false), "translateY(0) rotate(0deg)");
    }

    #[test]
    fn sparkles_stay_within_ten_pixels() {
        assert_eq!(sparkle_position(100.0, 50.0, 0.5, 0.5), (100.0, 50.0));
        assert_eq!(sparkle_position(100.0, 50.0, 0.0, 0.0), (90.0, 40.0));
        let (x, y) = sparkle_position(100.0, 50.0, 0.999, 0.999);
        assert!(x < 110.0 && y < 60.0);
    }

    #[test]
    fn sparkle_style_positions_element() {
        let style = sparkle_style(12.5, 30.0);
        assert!(style.contains("left: 12.5px"));
        assert!(style.contains("top: 30px"));
        assert!(style.contains("sparkleAnimation"));
    }
}
