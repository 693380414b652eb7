//! Site header: brand, navigation, social links, theme toggle

use edible_vibe_core::{HeaderState, MenuEvent, NavItem, Route, SiteConfig, SocialLink};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::icons::{CloseIcon, MenuIcon, SocialIcon};
use super::ThemeToggle;
use crate::scroll::use_header_state;

/// Delay between staggered nav item reveals
const STAGGER_STEP_MS: u32 = 100;

pub(crate) fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms", index as u32 * STAGGER_STEP_MS)
}

/// Apply a menu event and return the route it selects, if any
pub(crate) fn dispatch(header: RwSignal<HeaderState>, event: MenuEvent) -> Option<Route> {
    header.try_update(|state| state.handle(event)).flatten()
}

/// Modified or non-primary clicks are left to the browser (new tab, etc.)
fn is_plain_click(ev: &MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

/// Nav anchors with staggered reveal; clicks go through `select`
fn nav_links<F>(items: &[NavItem], select: F) -> impl IntoView
where
    F: Fn(NavItem, MouseEvent) + Clone + 'static,
{
    items
        .iter()
        .copied()
        .enumerate()
        .map(|(i, item)| {
            let select = select.clone();
            view! {
                <a
                    href=item.path()
                    class="nav-link reveal-left"
                    style=stagger_style(i)
                    on:click=move |ev| select(item, ev)
                >
                    {item.label()}
                </a>
            }
        })
        .collect_view()
}

/// Header with scroll-reactive chrome and a collapsible mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let header = use_header_state();
    let chrome = Memo::new(move |_| header.with(|state| state.chrome));
    let menu_open = Memo::new(move |_| header.with(|state| state.menu.is_open()));
    let navigate = use_navigate();

    let nav_items = config.nav.clone();
    let social_links = config.social.links();

    // Selecting a destination closes the menu and navigates in one step
    let select = move |item: NavItem, ev: MouseEvent| {
        let plain = is_plain_click(&ev);
        if plain {
            ev.prevent_default();
        }
        if let Some(route) = dispatch(header, MenuEvent::Select(item)) {
            if plain {
                navigate(route.as_str(), NavigateOptions::default());
            }
        }
    };

    let desktop_links = nav_links(&nav_items, select.clone());
    let select_mobile = select.clone();

    view! {
        <header class=move || format!("site-header {}", chrome.get().class())>
            <div class="container header-bar">
                <div class="brand reveal-left">
                    <A href="/" attr:class="brand-link">{config.brand.clone()}</A>
                </div>

                <nav class="desktop-nav" aria-label="Primary">
                    {desktop_links}
                </nav>

                <div class="desktop-extras reveal-right">
                    <SocialLinks links=social_links />
                    <ThemeToggle />
                </div>

                <div class="mobile-controls">
                    <ThemeToggle />
                    <button
                        class="menu-button"
                        on:click=move |_| {
                            dispatch(header, MenuEvent::Toggle);
                        }
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <CloseIcon /> }.into_any()
                            } else {
                                view! { <MenuIcon /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-panel">
                    <nav class="container mobile-nav" aria-label="Mobile">
                        {nav_links(&nav_items, select_mobile.clone())}
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// Social icon links; platforms without a valid URL are not rendered
#[component]
fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .into_iter()
                .map(|link| {
                    let service = link.platform.service();
                    view! {
                        <a
                            href=link.url
                            class="social-link"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=service
                        >
                            <SocialIcon platform=link.platform />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
