//! edible-vibe-web - Web frontend for the Edible Vibe site using Leptos

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod pages;
pub mod scroll;
pub mod theme;

pub use app::App;
