//! Screen identifiers and the view router.
//!
//! Navigation is a free graph: any screen may be made current from any
//! other, with no guards. The router only tracks which screen is current
//! and whether the narrow-viewport menu drawer is open.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    TouristOnboarding,
    TouristDashboard,
    TouristPanic,
    TouristSettings,
    AuthorityDashboard,
    AuthorityIncidents,
    AuthorityIncidentDetail,
    Wearable,
}

impl Screen {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::TouristOnboarding,
        Self::TouristDashboard,
        Self::TouristPanic,
        Self::TouristSettings,
        Self::AuthorityDashboard,
        Self::AuthorityIncidents,
        Self::AuthorityIncidentDetail,
        Self::Wearable,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::TouristOnboarding => "tourist-onboarding",
            Self::TouristDashboard => "tourist-dashboard",
            Self::TouristPanic => "tourist-panic",
            Self::TouristSettings => "tourist-settings",
            Self::AuthorityDashboard => "authority-dashboard",
            Self::AuthorityIncidents => "authority-incidents",
            Self::AuthorityIncidentDetail => "authority-incident-detail",
            Self::Wearable => "wearable",
        }
    }

    /// Label used in the navigation bar and mobile drawer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Tourist Safety System",
            Self::TouristOnboarding => "Tourist Onboarding",
            Self::TouristDashboard => "Tourist Dashboard",
            Self::TouristPanic => "Panic Button",
            Self::TouristSettings => "Tourist Settings",
            Self::AuthorityDashboard => "Authority Dashboard",
            Self::AuthorityIncidents => "Incident Management",
            Self::AuthorityIncidentDetail => "Incident Details",
            Self::Wearable => "Wearable Integration",
        }
    }

    /// Where the screen's own back control leads, if it has one.
    #[must_use]
    pub const fn back_target(self) -> Option<Self> {
        match self {
            Self::TouristPanic | Self::TouristSettings => Some(Self::TouristDashboard),
            Self::AuthorityIncidents => Some(Self::AuthorityDashboard),
            Self::AuthorityIncidentDetail => Some(Self::AuthorityIncidents),
            Self::Wearable => Some(Self::Home),
            Self::Home
            | Self::TouristOnboarding
            | Self::TouristDashboard
            | Self::AuthorityDashboard => None,
        }
    }

    /// Home is rendered full-bleed without the navigation bar.
    #[must_use]
    pub const fn shows_nav_bar(self) -> bool {
        !matches!(self, Self::Home)
    }

    #[must_use]
    pub const fn in_menu(self) -> bool {
        !matches!(self, Self::Home)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen: {0}")]
pub struct ParseScreenError(pub String);

impl FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| ParseScreenError(s.to_owned()))
    }
}

/// Which control raised a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NavigationSource {
    /// Buttons on a screen, the desktop navigation bar, or the home link.
    #[default]
    Control,
    MobileMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    pub current_screen: Screen,
    pub mobile_menu_open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    state: NavigationState,
}

impl ViewRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `target` current. Returns `true` when the screen actually
    /// changed, which is the caller's cue to tear down the old screen.
    pub fn navigate(&mut self, target: Screen, source: NavigationSource) -> bool {
        let changed = self.state.current_screen != target;
        self.state.current_screen = target;
        if source == NavigationSource::MobileMenu {
            self.state.mobile_menu_open = false;
        }
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.state.current_screen
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    pub fn menu_entries() -> impl Iterator<Item = Screen> {
        Screen::ALL.into_iter().filter(|screen| screen.in_menu())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod screen_tests {
        use super::*;

        #[test]
        fn test_identifiers_round_trip_through_from_str() {
            for screen in Screen::ALL {
                assert_eq!(screen.as_str().parse::<Screen>(), Ok(screen));
            }
        }

        #[test]
        fn test_unknown_identifier_is_rejected() {
            let err = "admin".parse::<Screen>().unwrap_err();
            assert_eq!(err.to_string(), "unknown screen: admin");
        }

        #[test]
        fn test_serde_uses_kebab_case_identifiers() {
            let json = serde_json::to_string(&Screen::AuthorityIncidentDetail).unwrap();
            assert_eq!(json, "\"authority-incident-detail\"");
            let back: Screen = serde_json::from_str("\"tourist-panic\"").unwrap();
            assert_eq!(back, Screen::TouristPanic);
        }

        #[test]
        fn test_back_targets() {
            assert_eq!(Screen::TouristPanic.back_target(), Some(Screen::TouristDashboard));
            assert_eq!(Screen::TouristSettings.back_target(), Some(Screen::TouristDashboard));
            assert_eq!(Screen::AuthorityIncidents.back_target(), Some(Screen::AuthorityDashboard));
            assert_eq!(
                Screen::AuthorityIncidentDetail.back_target(),
                Some(Screen::AuthorityIncidents)
            );
            assert_eq!(Screen::Wearable.back_target(), Some(Screen::Home));
            assert_eq!(Screen::Home.back_target(), None);
        }

        #[test]
        fn test_home_has_no_nav_bar() {
            assert!(!Screen::Home.shows_nav_bar());
            assert!(Screen::Wearable.shows_nav_bar());
        }
    }

    mod router_tests {
        use super::*;

        #[test]
        fn test_starts_home_with_menu_closed() {
            let router = ViewRouter::new();
            assert_eq!(router.current(), Screen::Home);
            assert!(!router.state().mobile_menu_open);
        }

        #[test]
        fn test_navigate_reports_change() {
            let mut router = ViewRouter::new();
            assert!(router.navigate(Screen::Wearable, NavigationSource::Control));
            assert!(!router.navigate(Screen::Wearable, NavigationSource::Control));
            assert_eq!(router.current(), Screen::Wearable);
        }

        #[test]
        fn test_mobile_menu_navigation_closes_drawer() {
            let mut router = ViewRouter::new();
            router.toggle_mobile_menu();
            assert!(router.state().mobile_menu_open);

            router.navigate(Screen::TouristPanic, NavigationSource::MobileMenu);
            assert!(!router.state().mobile_menu_open);
            assert_eq!(router.current(), Screen::TouristPanic);
        }

        #[test]
        fn test_control_navigation_leaves_drawer_alone() {
            let mut router = ViewRouter::new();
            router.toggle_mobile_menu();
            router.navigate(Screen::Home, NavigationSource::Control);
            assert!(router.state().mobile_menu_open);
        }

        #[test]
        fn test_menu_lists_every_screen_but_home() {
            let entries: Vec<Screen> = ViewRouter::menu_entries().collect();
            assert_eq!(entries.len(), 8);
            assert!(!entries.contains(&Screen::Home));
            assert_eq!(entries[0], Screen::TouristOnboarding);
            assert_eq!(entries[7], Screen::Wearable);
        }
    }
}
