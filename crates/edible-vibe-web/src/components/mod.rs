//! Leptos UI components

mod button;
mod header;
mod hero;
mod icons;
mod scroll_progress;
mod theme_toggle;

pub use button::{ConfiguredButton, InteractiveButton};
pub use header::Header;
pub use hero::HeroBanner;
pub use scroll_progress::ScrollProgress;
pub use theme_toggle::ThemeToggle;
