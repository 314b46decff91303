//! Page sections and the navbar state machine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownSection;

/// An anchor-addressable region of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Home,
    Services,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    /// The DOM `id` the section renders with.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    /// `href` value for links pointing at the section.
    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    /// Accepts an anchor id with or without the leading `#`.
    fn from_str(anchor: &str) -> Result<Self, Self::Err> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL
            .into_iter()
            .find(|section| section.anchor_id() == id)
            .ok_or_else(|| UnknownSection(anchor.to_string()))
    }
}

/// Where an activated navigation control wants the page to scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    Section(Section),
    Top,
}

/// Transient navbar state: mobile menu visibility and the scrolled flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    menu_open: bool,
    scrolled: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// True once the page is scrolled past the threshold; drives the
    /// translucent background.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether the scrolled flag changed.
    pub fn on_scroll(&mut self, offset_y: f64, threshold_px: f64) -> bool {
        let scrolled = offset_y > threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Activating any nav link closes the mobile menu.
    pub fn navigate_to(&mut self, section: Section) -> ScrollRequest {
        self.close_menu();
        ScrollRequest::Section(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip_with_and_without_hash() {
        for section in Section::ALL {
            assert_eq!(section.anchor_id().parse::<Section>(), Ok(section));
            assert_eq!(section.href().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "#pricing".parse::<Section>(),
            Err(UnknownSection("#pricing".to_string()))
        );
    }

    #[test]
    fn menu_toggle_twice_returns_to_closed() {
        let mut nav = NavigationState::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn scrolled_flag_uses_strict_threshold() {
        let mut nav = NavigationState::new();
        assert!(!nav.on_scroll(50.0, 50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(50.5, 50.0));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0, 50.0));
        assert!(nav.on_scroll(0.0, 50.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn navigating_closes_the_menu() {
        let mut nav = NavigationState::new();
        nav.toggle_menu();
        let request = nav.navigate_to(Section::Portfolio);
        assert_eq!(request, ScrollRequest::Section(Section::Portfolio));
        assert!(!nav.is_menu_open());
    }
}
