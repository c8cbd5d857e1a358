//! Service catalog: sortable service table and dependency diagram.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::dependency_graph::DependencyGraph;
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::catalog::ServiceInfo;
use crate::query::hooks::use_query;
use crate::query::keys;
use crate::util::table::Column;

const COLUMNS: [Column; 5] = [
    Column::new("name", "Service"),
    Column::new("port", "Port"),
    Column::new("status", "Status"),
    Column::new("depends_on", "Depends on"),
    Column::new("description", "Description").unsortable(),
];

#[component]
pub fn CatalogPage() -> impl IntoView {
    let services = use_query(keys::catalog::services, |client| async move { api::catalog::list_services(&client).await });
    let rows = Signal::derive(move || services.data.get().unwrap_or_default());
    let selected = RwSignal::new(None::<ServiceInfo>);

    view! {
        <section class="page catalog">
            <header class="page__header">
                <h1>"Service Catalog"</h1>
                <button class="btn" on:click=move |_| services.refetch()>
                    "Refresh"
                </button>
            </header>
            <QueryStatus loading=services.loading error=services.error/>
            <DataTable
                rows
                columns=COLUMNS.to_vec()
                on_select=Callback::new(move |s: ServiceInfo| selected.set(Some(s)))
                empty_text="No services registered."
            />
            {move || selected.get().map(|service| view! { <ServiceDetail service/> })}
            <h2>"Dependencies"</h2>
            <DependencyGraph services=rows/>
        </section>
    }
}

#[component]
fn ServiceDetail(service: ServiceInfo) -> impl IntoView {
    let name = service.name.clone();
    let key_name = name.clone();
    let health = use_query(
        move || keys::catalog::health(&key_name),
        move |client| {
            let name = name.clone();
            async move { api::catalog::service_health(&client, &name).await }
        },
    );

    view! {
        <article class="card service-detail">
            <h2 class="card__title">{service.name.clone()}</h2>
            <dl class="detail-list">
                <dt>"Base URL"</dt>
                <dd>{service.base_url.clone().unwrap_or_default()}</dd>
                <dt>"Health path"</dt>
                <dd>{service.health_path.clone().unwrap_or_default()}</dd>
                <dt>"Tags"</dt>
                <dd>{service.tags.join(", ")}</dd>
                <dt>"Health"</dt>
                <dd>
                    {move || {
                        let (class, text) = super::overview::health_badge(
                            health.data.get().as_ref(),
                            health.error.get().is_some(),
                        );
                        view! { <span class=format!("badge {class}")>{text}</span> }
                    }}
                </dd>
            </dl>
        </article>
    }
}
