//! Theme preference: a single persisted `"theme"` key applied as a
//! `data-theme` attribute on the document element.

use crate::config;
use crate::storage;

pub const DARK: &str = "dark";
pub const LIGHT: &str = "light";

/// Saved preference, defaulting to dark.
pub fn saved_theme() -> String {
    storage::get(config::THEME_KEY).unwrap_or_else(|| DARK.to_string())
}

/// Applies `theme` to the document and persists it.
pub fn set_theme(theme: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme);
        }
    }
    storage::set(config::THEME_KEY, theme);
}

pub fn opposite(theme: &str) -> &'static str {
    if theme == DARK {
        LIGHT
    } else {
        DARK
    }
}

/// Accessible label for the toggle, describing the mode it switches to.
pub fn switch_label(current: &str) -> String {
    format!("Switch to {} mode", opposite(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips_both_ways() {
        assert_eq!(opposite(DARK), LIGHT);
        assert_eq!(opposite(LIGHT), DARK);
        assert_eq!(opposite("solarized"), DARK);
    }

    #[test]
    fn switch_label_names_the_target_mode() {
        assert_eq!(switch_label(DARK), "Switch to light mode");
        assert_eq!(switch_label(LIGHT), "Switch to dark mode");
    }
}
