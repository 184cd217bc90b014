//! Header navigation model.

/// Scroll offset (px) past which the header switches to its solid look.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Where a header link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Anchor on the home page
    Section(&'static str),
    /// The about page
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Features",
        target: NavTarget::Section("features"),
    },
    NavLink {
        label: "How It Works",
        target: NavTarget::Section("how-it-works"),
    },
    NavLink {
        label: "Ecosystem",
        target: NavTarget::Section("ecosystem"),
    },
    NavLink {
        label: "About",
        target: NavTarget::About,
    },
];

/// Mobile menu open/closed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
