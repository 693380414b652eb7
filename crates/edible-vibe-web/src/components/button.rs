//! Interactive call-to-action button

use edible_vibe_core::button::button_class;
use edible_vibe_core::{ButtonTarget, ButtonVariant, CallToAction};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

/// Styled pressable control
///
/// With `ButtonTarget::Navigate` it renders a router link (client-side
/// navigation, no reload). With `ButtonTarget::Action` it renders a plain
/// `<button>`; `on_click` runs and no navigation ever happens. Attributes
/// passed with `attr:` at the call site land on the rendered element.
#[component]
pub fn InteractiveButton(
    /// Visual style (primary when omitted)
    #[prop(optional)]
    variant: ButtonVariant,
    /// Navigation or action
    #[prop(optional)]
    target: ButtonTarget,
    /// Extra classes appended after the variant classes
    #[prop(optional, into)]
    class: String,
    /// Click handler for action buttons
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let content = view! {
        <span class=button_class(variant, &class)>
            <span class="cta__shine"></span>
            <span class="cta__label">{children()}</span>
        </span>
    };

    match target {
        ButtonTarget::Navigate(route) => view! {
            <A href=route.to_string() attr:class="cta-link">
                {content}
            </A>
        }
        .into_any(),
        ButtonTarget::Action => view! {
            <button
                type="button"
                class="cta-button"
                on:click=move |ev| {
                    if let Some(handler) = on_click.as_ref() {
                        handler.run(ev);
                    }
                }
            >
                {content}
            </button>
        }
        .into_any(),
    }
}

/// Render a configured call-to-action
#[component]
pub fn ConfiguredButton(action: CallToAction) -> impl IntoView {
    let CallToAction {
        label,
        variant,
        target,
    } = action;

    view! {
        <InteractiveButton variant target>
            {label}
        </InteractiveButton>
    }
}
