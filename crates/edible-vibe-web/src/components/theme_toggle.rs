//! Light/dark theme toggle

use leptos::prelude::*;

use super::icons::{MoonIcon, SunIcon};
use crate::theme::use_theme;

/// Theme toggle button (shows the icon of the mode it switches to)
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label=move || theme.mode.get().toggle_label()
        >
            {move || {
                if theme.mode.get().is_dark() {
                    view! { <SunIcon /> }.into_any()
                } else {
                    view! { <MoonIcon /> }.into_any()
                }
            }}
        </button>
    }
}
