//! Section pages (episodes, team, blog, contact)
//!
//! Section content is managed outside this front-end; these pages render the
//! shell and a short intro for each destination.

use edible_vibe_core::{ButtonTarget, ButtonVariant, NavItem, Route};
use leptos::prelude::*;

use crate::components::InteractiveButton;

fn intro(item: NavItem) -> &'static str {
    match item {
        NavItem::Episodes => "Every episode, from street food runs to track days.",
        NavItem::Team => "The hosts, drivers and cooks behind the vibe.",
        NavItem::Blog => "Recipes, road trips and behind-the-scenes notes.",
        NavItem::Contact => "Bookings, collaborations and fan mail.",
    }
}

/// Placeholder page for a primary navigation destination
#[component]
pub fn SectionPage(item: NavItem) -> impl IntoView {
    view! {
        <div class="page section-page">
            <div class="container">
                <h2 class="section-title reveal-up">{item.label()}</h2>
                <p class="section-intro reveal-up delay-200">{intro(item)}</p>
                <InteractiveButton variant=ButtonVariant::Outline target=ButtonTarget::Navigate(Route::home())>
                    "Back to Home"
                </InteractiveButton>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page section-page">
            <div class="container">
                <h2 class="section-title">"Page not found"</h2>
                <InteractiveButton target=ButtonTarget::Navigate(Route::home())>
                    "Back to Home"
                </InteractiveButton>
            </div>
        </div>
    }
}
