//! Navigation header state machine
//!
//! The header owns two independent pieces of state:
//! - [`MenuState`]: the collapsible mobile panel, driven by [`MenuEvent`]s
//! - [`HeaderChrome`]: derived purely from the current scroll offset

use crate::route::Route;
use crate::scroll::ScrollOffset;
use serde::{Deserialize, Serialize};

/// Primary navigation destinations, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavItem {
    Episodes,
    Team,
    Blog,
    Contact,
}

impl NavItem {
    /// Every destination, in the order the header renders them
    pub const ALL: [NavItem; 4] = [
        NavItem::Episodes,
        NavItem::Team,
        NavItem::Blog,
        NavItem::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Episodes => "Episodes",
            NavItem::Team => "Team",
            NavItem::Blog => "Blog",
            NavItem::Contact => "Contact",
        }
    }

    /// Route path: `/` followed by the lowercase label
    pub fn path(self) -> &'static str {
        match self {
            NavItem::Episodes => "/episodes",
            NavItem::Team => "/team",
            NavItem::Blog => "/blog",
            NavItem::Contact => "/contact",
        }
    }

    pub fn route(self) -> Route {
        // Static paths above are always valid routes
        Route::parse(self.path()).unwrap_or_else(|_| Route::home())
    }
}

/// Mobile menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// User input that drives the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger / close button pressed
    Toggle,
    /// A navigation destination was selected
    Select(NavItem),
}

/// Result of applying a [`MenuEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: MenuState,
    /// Route to navigate to, if the event selected a destination
    pub navigate_to: Option<Route>,
}

impl MenuState {
    /// Total transition function for the menu
    ///
    /// Selecting a destination always collapses the menu and navigates,
    /// whether it was picked from the mobile panel or the desktop nav.
    pub fn apply(self, event: MenuEvent) -> Transition {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => Transition {
                state: MenuState::Open,
                navigate_to: None,
            },
            (MenuState::Open, MenuEvent::Toggle) => Transition {
                state: MenuState::Closed,
                navigate_to: None,
            },
            (_, MenuEvent::Select(item)) => Transition {
                state: MenuState::Closed,
                navigate_to: Some(item.route()),
            },
        }
    }
}

/// Header background treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderChrome {
    /// At the top of the page
    #[default]
    Transparent,
    /// Page has been scrolled
    Opaque,
}

impl HeaderChrome {
    /// Binary threshold at zero, no intermediate fade
    pub fn for_offset(offset: ScrollOffset) -> Self {
        if offset.get() > 0.0 {
            HeaderChrome::Opaque
        } else {
            HeaderChrome::Transparent
        }
    }

    pub fn is_scrolled(self) -> bool {
        matches!(self, HeaderChrome::Opaque)
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderChrome::Transparent => "site-header--transparent",
            HeaderChrome::Opaque => "site-header--opaque",
        }
    }
}

/// Full header state, as held by the header component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub menu: MenuState,
    pub chrome: HeaderChrome,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a menu event, returning the navigation it triggers (if any)
    pub fn handle(&mut self, event: MenuEvent) -> Option<Route> {
        let transition = self.menu.apply(event);
        self.menu = transition.state;
        transition.navigate_to
    }

    /// Re-derive chrome from a scroll update
    pub fn on_scroll(&mut self, offset: ScrollOffset) {
        self.chrome = HeaderChrome::for_offset(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_paths_are_lowercase_labels() {
        for item in NavItem::ALL {
            assert_eq!(item.path(), format!("/{}", item.label().to_lowercase()));
            assert_eq!(item.route().as_str(), item.path());
        }
    }

    #[test]
    fn test_menu_transition_table() {
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::Toggle).state,
            MenuState::Open
        );
        assert_eq!(
            MenuState::Open.apply(MenuEvent::Toggle).state,
            MenuState::Closed
        );
        for item in NavItem::ALL {
            let t = MenuState::Open.apply(MenuEvent::Select(item));
            assert_eq!(t.state, MenuState::Closed);
            assert_eq!(t.navigate_to.as_ref().map(Route::as_str), Some(item.path()));
        }
    }

    #[test]
    fn test_toggle_never_navigates() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert!(state.apply(MenuEvent::Toggle).navigate_to.is_none());
        }
    }

    #[test]
    fn test_select_team_while_open() {
        let mut header = HeaderState::new();
        assert!(header.handle(MenuEvent::Toggle).is_none());
        assert!(header.menu.is_open());

        let nav = header.handle(MenuEvent::Select(NavItem::Team));
        assert_eq!(nav, Some(Route::parse("/team").unwrap()));
        assert_eq!(header.menu, MenuState::Closed);
    }

    #[test]
    fn test_desktop_select_keeps_menu_closed() {
        let mut header = HeaderState::new();
        let nav = header.handle(MenuEvent::Select(NavItem::Blog));
        assert_eq!(nav.unwrap().as_str(), "/blog");
        assert_eq!(header.menu, MenuState::Closed);
    }

    #[test]
    fn test_chrome_follows_offset_sequence() {
        let mut header = HeaderState::new();
        assert_eq!(header.chrome, HeaderChrome::Transparent);

        let chromes: Vec<HeaderChrome> = [0.0, 50.0, 120.0, 0.0]
            .into_iter()
            .map(|s| {
                header.on_scroll(ScrollOffset::new(s));
                header.chrome
            })
            .collect();

        assert_eq!(
            chromes,
            vec![
                HeaderChrome::Transparent,
                HeaderChrome::Opaque,
                HeaderChrome::Opaque,
                HeaderChrome::Transparent,
            ]
        );
    }

    #[test]
    fn test_chrome_ignores_menu_state() {
        let mut header = HeaderState::new();
        header.handle(MenuEvent::Toggle);
        header.on_scroll(ScrollOffset::new(10.0));
        assert!(header.chrome.is_scrolled());
        assert!(header.menu.is_open());
    }
}
