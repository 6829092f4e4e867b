//! Navigation bar state and the scroll arithmetic shared by anchor links and
//! call-to-action buttons.

/// Above this viewport width the burger menu is hidden, so the panel must be closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Scroll position past which the nav bar turns (almost) opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;
/// Used when the nav bar cannot be measured.
pub const FALLBACK_NAV_HEIGHT_PX: f64 = 70.0;
/// Gap left between the nav bar and the section scrolled to.
pub const SCROLL_MARGIN_PX: f64 = 20.0;

pub const NAV_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
pub const NAV_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn resized(self, viewport_width: f64) -> Self {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            self.closed()
        } else {
            self
        }
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav__links nav__links--open"
        } else {
            "nav__links"
        }
    }

    pub fn toggle_class(&self) -> &'static str {
        if self.open {
            "nav__toggle nav__toggle--open"
        } else {
            "nav__toggle"
        }
    }
}

pub fn nav_background(scroll_y: f64) -> &'static str {
    if scroll_y > SCROLLED_THRESHOLD_PX {
        NAV_BACKGROUND_SCROLLED
    } else {
        NAV_BACKGROUND
    }
}

/// Document offset to scroll to so that an element whose viewport top is
/// `element_top` lands just below the nav bar.
pub fn scroll_offset(element_top: f64, scroll_y: f64, nav_height: Option<f64>) -> f64 {
    let nav_height = nav_height.unwrap_or(FALLBACK_NAV_HEIGHT_PX);
    element_top + scroll_y - nav_height - SCROLL_MARGIN_PX
}

/// `#features` -> `features`. Anything that is not a same-page anchor gives `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let menu = NavMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert!(!menu.toggled().closed().is_open());
    }

    #[test]
    fn wide_resize_always_closes() {
        for menu in [NavMenu::default(), NavMenu::default().toggled()] {
            assert!(!menu.resized(769.0).is_open());
            assert!(!menu.resized(1920.0).is_open());
        }
        let open = NavMenu::default().toggled();
        assert!(open.resized(768.0).is_open());
        assert!(open.resized(375.0).is_open());
    }

    #[test]
    fn classes_follow_state() {
        let open = NavMenu::default().toggled();
        assert_eq!(open.links_class(), "nav__links nav__links--open");
        assert_eq!(open.toggle_class(), "nav__toggle nav__toggle--open");
        assert_eq!(NavMenu::default().links_class(), "nav__links");
    }

    #[test]
    fn background_switches_past_threshold() {
        assert_eq!(nav_background(0.0), NAV_BACKGROUND);
        assert_eq!(nav_background(100.0), NAV_BACKGROUND);
        assert_eq!(nav_background(100.5), NAV_BACKGROUND_SCROLLED);
    }

    #[test]
    fn offset_accounts_for_nav_and_margin() {
        assert_eq!(scroll_offset(400.0, 1000.0, Some(64.0)), 1316.0);
        assert_eq!(scroll_offset(400.0, 0.0, None), 310.0);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
    }
}
