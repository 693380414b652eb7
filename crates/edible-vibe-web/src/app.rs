//! Main Leptos App component with SPA router

use edible_vibe_core::{NavItem, SiteConfig};
use leptos::logging;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Header, ScrollProgress};
use crate::pages::{Home, NotFound, SectionPage};
use crate::scroll::provide_scroll_observer;
use crate::theme::provide_theme;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let report = SiteConfig::embedded_report();
    // Core `tracing` events have no subscriber in the browser
    for issue in &report.issues {
        logging::warn!("[site config] {} ({})", issue, issue.kind());
    }
    provide_context(report.config);
    provide_scroll_observer();
    provide_theme();

    view! {
        <Router>
            <div class="app">
                <ScrollProgress />
                <Header />
                <main class="content">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=Home />
                        <Route
                            path=path!("/episodes")
                            view=|| view! { <SectionPage item=NavItem::Episodes /> }
                        />
                        <Route
                            path=path!("/team")
                            view=|| view! { <SectionPage item=NavItem::Team /> }
                        />
                        <Route
                            path=path!("/blog")
                            view=|| view! { <SectionPage item=NavItem::Blog /> }
                        />
                        <Route
                            path=path!("/contact")
                            view=|| view! { <SectionPage item=NavItem::Contact /> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
