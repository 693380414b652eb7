//! Scroll progress bar

use edible_vibe_core::progress::progress_transform;
use leptos::prelude::*;

use crate::scroll::use_scroll_position;

/// Fixed bar along the top edge, filled by how far the page is scrolled
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let position = use_scroll_position();
    let progress = Memo::new(move |_| position.get().progress());

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            style:transform=move || progress_transform(progress.get())
        ></div>
    }
}
