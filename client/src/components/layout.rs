//! Application chrome: sidebar navigation, top bar and toast host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. Sections whose backend the host reports as disabled
//! are hidden from the sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::toast_host::ToastHost;
use crate::net::services::ServiceRegistry;
use crate::state::ui::{Section, UiState};
use crate::util::ui_persistence::BrowserStorage;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let registry = expect_context::<RwSignal<ServiceRegistry>>();
    let location = use_location();

    let active = move || Section::for_path(&location.pathname.get());
    let visible = move || {
        let registry = registry.get();
        Section::ALL
            .into_iter()
            .filter(|s| s.service().map_or(true, |id| registry.is_enabled(id)))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="app" class:app--nav-collapsed=move || !ui.get().nav_expanded>
            <nav class="sidebar">
                <button
                    class="btn sidebar__toggle"
                    title="Toggle navigation"
                    on:click=move |_| ui.update(|u| u.nav_expanded = !u.nav_expanded)
                >
                    "☰"
                </button>
                <ul class="sidebar__list">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a
                                            href=section.path()
                                            class="sidebar__link"
                                            class:sidebar__link--active=move || active() == section
                                        >
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </nav>

            <div class="app__body">
                <header class="toolbar">
                    <span class="toolbar__title">{move || active().label()}</span>
                    <span class="toolbar__spacer"></span>
                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let current = ui.get().dark_mode;
                            let next = crate::util::dark_mode::toggle(&BrowserStorage, current);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                </header>
                <main class="app__main">{children()}</main>
            </div>

            <ToastHost/>
        </div>
    }
}
