//! Theme context: light/dark mode, persisted in localStorage

use edible_vibe_core::theme::THEME_STORAGE_KEY;
use edible_vibe_core::{ThemeMode, ThemePreferences};
use leptos::prelude::*;
use leptos::web_sys::Storage;

const DARK_CLASS: &str = "dark";

/// Shared theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }
}

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

fn load_preferences() -> ThemePreferences {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemePreferences::from_stored(stored.as_deref())
}

fn save_preferences(prefs: ThemePreferences) {
    let Some(storage) = local_storage() else {
        return;
    };
    match prefs.to_stored() {
        Ok(raw) => {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, &raw) {
                leptos::logging::warn!("Failed to persist theme: {:?}", e);
            }
        }
        Err(e) => leptos::logging::warn!("{e:#}"),
    }
}

/// Apply the mode to `<html>` so CSS can key off `.dark`
fn apply_to_document(mode: ThemeMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if mode.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        leptos::logging::warn!("Failed to apply theme class: {:?}", e);
    }
}

/// Create the theme context, restore the stored preference and keep the
/// document and storage in sync with it
pub fn provide_theme() -> ThemeContext {
    let context = ThemeContext {
        mode: RwSignal::new(load_preferences().mode),
    };
    provide_context(context);

    Effect::new(move |_| {
        let mode = context.mode.get();
        apply_to_document(mode);
        save_preferences(ThemePreferences { mode });
    });

    context
}

/// Hook to access theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
