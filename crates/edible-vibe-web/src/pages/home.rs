//! Home page

use leptos::prelude::*;

use crate::components::HeroBanner;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <HeroBanner />
        </div>
    }
}
