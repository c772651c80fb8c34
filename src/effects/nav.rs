/// Mobile menu open/closed flag plus the hamburger bar transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }

    /// Inline style for hamburger bar `index` (0..3). Open turns it into an X.
    pub fn bar_style(&self, index: usize) -> &'static str {
        if !self.open {
            return "transform: none; opacity: 1;";
        }
        match index {
            0 => "transform: rotate(45deg) translate(5px, 5px);",
            1 => "opacity: 0;",
            2 => "transform: rotate(-45deg) translate(7px, -6px);",
            _ => "",
        }
    }
}

/// Where to scroll for an in-page anchor so the fixed navbar doesn't cover it.
pub fn anchor_scroll_top(offset_top: f64, navbar_height: f64) -> f64 {
    offset_top - navbar_height
}
