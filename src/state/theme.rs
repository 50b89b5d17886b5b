//! Theme Service
//!
//! Owns the dark-mode flag. Persistence and document styling hang off the
//! flag as two side-effecting listeners, so no component touches browser
//! globals directly.

use leptos::*;

/// Local storage key holding the flag in string form ("true"/"false").
const DARK_MODE_KEY: &str = "mindchit_dark_mode";

/// Class applied to the document root while dark mode is on.
const DARK_CLASS: &str = "dark";

/// Dark-mode service provided to the component tree.
#[derive(Clone, Copy)]
pub struct ThemeService {
    /// Whether dark mode is on
    pub dark: RwSignal<bool>,
}

impl ThemeService {
    /// Creates the service with an explicit starting value.
    pub fn with_initial(dark: bool) -> Self {
        Self {
            dark: create_rw_signal(dark),
        }
    }

    /// Flips dark mode. The registered listeners persist the new value and
    /// restyle the document root.
    pub fn toggle(&self) {
        self.dark.update(|dark| *dark = !*dark);
    }
}

/// Reads the persisted flag, mounts the side-effecting listeners, and
/// provides the service to the component tree.
pub fn provide_theme() {
    let theme = ThemeService::with_initial(load_dark_mode());

    // Persist every change, including the initial value on mount
    create_effect(move |_| store_dark_mode(theme.dark.get()));

    // Mirror the flag onto the document root class
    create_effect(move |_| apply_document_class(theme.dark.get()));

    provide_context(theme);
}

/// Interprets a stored value: only the literal "true" counts as dark.
fn parse_stored(value: Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// Reads the flag from local storage. Absent or unreadable means light mode.
fn load_dark_mode() -> bool {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten());
    parse_stored(stored)
}

/// Writes the flag back to local storage.
fn store_dark_mode(dark: bool) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        if storage.set_item(DARK_MODE_KEY, &dark.to_string()).is_err() {
            logging::warn!("Failed to persist the theme preference");
        }
    }
}

/// Adds or removes the dark class on `<html>`.
fn apply_document_class(dark: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        let class_list = root.class_list();
        let result = if dark {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            logging::warn!("Failed to update the document theme class");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn only_the_literal_true_reads_as_dark() {
        assert!(parse_stored(Some("true".to_string())));
        assert!(!parse_stored(Some("false".to_string())));
        assert!(!parse_stored(Some("True".to_string())));
        assert!(!parse_stored(Some("1".to_string())));
        assert!(!parse_stored(Some(String::new())));
        assert!(!parse_stored(None));
    }

    #[test]
    fn toggling_follows_odd_even_parity() {
        let runtime = create_runtime();
        let theme = ThemeService::with_initial(false);

        for count in 1..=6 {
            theme.toggle();
            let expected = count % 2 == 1;
            assert_eq!(theme.dark.get_untracked(), expected);
            // The persisted string form round-trips to the same flag
            assert_eq!(
                parse_stored(Some(theme.dark.get_untracked().to_string())),
                expected
            );
        }

        runtime.dispose();
    }

    #[test]
    fn parity_holds_from_a_dark_start_too() {
        let runtime = create_runtime();
        let theme = ThemeService::with_initial(true);

        theme.toggle();
        assert!(!theme.dark.get_untracked());
        theme.toggle();
        assert!(theme.dark.get_untracked());

        runtime.dispose();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn dark_mode_round_trips_through_storage() {
        store_dark_mode(true);
        assert!(load_dark_mode());
        store_dark_mode(false);
        assert!(!load_dark_mode());
    }
}
