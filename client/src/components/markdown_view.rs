//! Rendered markdown block.

use leptos::prelude::*;

use crate::util::markdown::render_markdown;

#[component]
pub fn MarkdownView(#[prop(into)] content: Signal<String>) -> impl IntoView {
    view! { <div class="markdown" inner_html=move || render_markdown(&content.get())></div> }
}
