//! Landing page: one card per section with the backing service's health.
//!
//! SYSTEM CONTEXT
//! ==============
//! Health comes from the config service's catalog (`/services/{name}/health`),
//! so the overview degrades to plain navigation cards when the catalog itself
//! is down.

use leptos::prelude::*;

use crate::net::api;
use crate::net::services::ServiceRegistry;
use crate::net::types::catalog::ServiceHealth;
use crate::query::hooks::use_query;
use crate::query::keys;
use crate::state::ui::Section;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let registry = expect_context::<RwSignal<ServiceRegistry>>();

    let sections = move || {
        let registry = registry.get();
        Section::ALL
            .into_iter()
            .filter(|s| *s != Section::Overview)
            .filter(|s| s.service().map_or(true, |id| registry.is_enabled(id)))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="page overview">
            <h1>"Overview"</h1>
            <div class="card-grid">
                {move || {
                    sections()
                        .into_iter()
                        .map(|section| view! { <SectionCard section/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

#[component]
fn SectionCard(section: Section) -> impl IntoView {
    let slug = section.service().map(|id| id.slug());
    let health = slug.map(|name| {
        use_query(
            move || keys::catalog::health(name),
            move |client| async move { api::catalog::service_health(&client, name).await },
        )
    });

    let badge = move || {
        let Some(handle) = health else {
            return view! { <span class="badge"></span> }.into_any();
        };
        let (class, text) = health_badge(handle.data.get().as_ref(), handle.error.get().is_some());
        view! { <span class=format!("badge {class}")>{text}</span> }.into_any()
    };

    view! {
        <a class="card section-card" href=section.path()>
            <h2 class="card__title">{section.label()}</h2>
            <p class="card__meta">{slug.unwrap_or_default()}</p>
            {badge}
        </a>
    }
}

/// CSS modifier and label for a health probe result.
pub(crate) fn health_badge(health: Option<&ServiceHealth>, failed: bool) -> (&'static str, String) {
    match health {
        Some(h) if h.healthy => ("badge--ok", format!("healthy · {} ms", h.latency_ms)),
        Some(h) => ("badge--error", h.message.clone().unwrap_or_else(|| "unhealthy".to_owned())),
        None if failed => ("badge--unknown", "unreachable".to_owned()),
        None => ("badge--pending", "checking...".to_owned()),
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
