//! edible-vibe-core - Core library for the Edible Vibe site
//!
//! Platform-independent UI logic: navigation state machine, scroll observer,
//! scroll progress, button model, theme and site configuration. The Leptos
//! front-end in `edible-vibe-web` renders on top of this.

pub mod button;
pub mod config;
pub mod error;
pub mod nav;
pub mod progress;
pub mod route;
pub mod scroll;
pub mod social;
pub mod theme;

pub use button::{ButtonTarget, ButtonVariant, CallToAction};
pub use config::{ConfigReport, HeroContent, SiteConfig};
pub use error::SiteError;
pub use nav::{HeaderChrome, HeaderState, MenuEvent, MenuState, NavItem};
pub use progress::scroll_progress;
pub use route::Route;
pub use scroll::{
    ScrollObserver, ScrollOffset, ScrollPosition, ScrollPublisher, ScrollSource,
    ScrollSubscription,
};
pub use social::{SocialLink, SocialLinks, SocialPlatform};
pub use theme::{ThemeMode, ThemePreferences};
