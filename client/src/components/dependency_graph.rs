//! Inline SVG diagram of service dependencies.

use leptos::prelude::*;

use crate::net::types::catalog::ServiceInfo;
use crate::util::graph::{layout_graph, render_svg};

#[component]
pub fn DependencyGraph(#[prop(into)] services: Signal<Vec<ServiceInfo>>) -> impl IntoView {
    let svg = move || services.with(|s| render_svg(&layout_graph(s)));
    view! {
        <Show
            when=move || services.with(|s| !s.is_empty())
            fallback=|| view! { <p class="page__empty">"No services registered."</p> }
        >
            <div class="dependency-graph__frame" inner_html=svg></div>
        </Show>
    }
}
