//! Dark mode initialization and toggle.
//!
//! The preference lives in a [`KeyValueStore`] (browser `localStorage` in
//! production) and is applied as a `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Applying the attribute is browser-only; SSR paths no-op to keep server
//! rendering deterministic, so the first paint is light until hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::ui_persistence::KeyValueStore;

pub const STORAGE_KEY: &str = "pif_dark_mode";

/// Stored preference, falling back to the system color scheme.
pub fn read_preference(store: &dyn KeyValueStore) -> bool {
    if let Some(val) = store.get(STORAGE_KEY) {
        return val == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it and persist the new preference.
pub fn toggle(store: &dyn KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    store.set(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
