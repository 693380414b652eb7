//! Home page hero banner

use edible_vibe_core::progress::parallax_transform;
use edible_vibe_core::SiteConfig;
use leptos::prelude::*;

use super::ConfiguredButton;
use crate::scroll::use_scroll_position;

/// Headline words start revealing after the container fades in
const HEADLINE_DELAY_MS: usize = 200;
const WORD_STEP_MS: usize = 80;
/// Hero copy drifts down at half the scroll speed
const PARALLAX_RATE: f64 = 0.5;

fn word_delay(index: usize) -> String {
    format!("animation-delay: {}ms", HEADLINE_DELAY_MS + index * WORD_STEP_MS)
}

/// Background video with staged text and call-to-action reveal
#[component]
pub fn HeroBanner() -> impl IntoView {
    let hero = expect_context::<SiteConfig>().hero;
    let position = use_scroll_position();

    let words = hero
        .headline_words()
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            view! {
                <span class="reveal-word" style=word_delay(i)>{word.to_string()}" "</span>
            }
        })
        .collect_view();

    let actions = hero
        .actions
        .iter()
        .cloned()
        .map(|action| view! { <ConfiguredButton action /> })
        .collect_view();

    view! {
        <section class="hero">
            <video class="hero-video" autoplay muted prop:muted=true loop playsinline>
                <source src=hero.video_url.clone() type="video/mp4" />
            </video>
            <div class="hero-overlay fade-in">
                <div
                    class="container hero-content parallax"
                    style:transform=move || parallax_transform(position.get().offset, PARALLAX_RATE)
                >
                    <div class="hero-copy reveal-up">
                        <h1 class="hero-title">{words}</h1>
                        <p class="hero-subheading reveal-up delay-600">{hero.subheading.clone()}</p>
                        <div class="hero-actions reveal-up delay-800">{actions}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_delay_staggers() {
        assert_eq!(word_delay(0), "animation-delay: 200ms");
        assert_eq!(word_delay(2), "animation-delay: 360ms");
    }
}
