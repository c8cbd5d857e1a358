//! Loading and error line for a query handle.

use leptos::prelude::*;

#[component]
pub fn QueryStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="query-status query-status--loading">"Loading..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="query-status query-status--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
