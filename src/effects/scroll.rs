use crate::config;

/// The two navbar looks, switched at a fixed scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Resting,
    Scrolled,
}

impl NavbarStyle {
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > config::NAVBAR_SCROLL_THRESHOLD {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Resting
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            NavbarStyle::Resting => concat!(
                "background: rgba(15, 23, 42, 0.8); ",
                "backdrop-filter: blur(25px); ",
                "box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3), 0 0 0 1px rgba(96, 165, 250, 0.1), inset 0 1px 0 rgba(255, 255, 255, 0.1); ",
                "border-color: rgba(148, 163, 184, 0.2); ",
                "transform: translateX(-50%) scale(1);"
            ),
            NavbarStyle::Scrolled => concat!(
                "background: rgba(15, 23, 42, 0.9); ",
                "backdrop-filter: blur(30px); ",
                "box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4), 0 0 0 1px rgba(96, 165, 250, 0.2), inset 0 1px 0 rgba(255, 255, 255, 0.15); ",
                "border-color: rgba(148, 163, 184, 0.3); ",
                "transform: translateX(-50%) scale(0.98);"
            ),
        }
    }
}

/// Vertical shift for the `index`-th floating hero card.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (0.5 + index as f64 * 0.1)
}

/// How far down the page the reader is, as a percentage in `0..=100`.
///
/// Pages that fit in the viewport have nothing to scroll and report 0.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_switches_past_fifty_pixels() {
        assert_eq!(NavbarStyle::from_offset(0.0), NavbarStyle::Resting);
        assert_eq!(NavbarStyle::from_offset(50.0), NavbarStyle::Resting);
        assert_eq!(NavbarStyle::from_offset(50.5), NavbarStyle::Scrolled);
        assert!(NavbarStyle::Scrolled.css().contains("scale(0.98)"));
        assert!(NavbarStyle::Resting.css().contains("blur(25px)"));
    }

    #[test]
    fn parallax_speeds_up_per_card() {
        assert_eq!(parallax_offset(100.0, 0), 50.0);
        assert!((parallax_offset(100.0, 1) - 60.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 3) - 80.0).abs() < 1e-9);
        assert_eq!(parallax_offset(0.0, 5), 0.0);
    }

    #[test]
    fn progress_runs_from_zero_to_hundred() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_is_clamped() {
        // elastic overscroll on touch devices
        assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_pages_report_zero() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, f64::NAN, 800.0), 0.0);
    }
}
