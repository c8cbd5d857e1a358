//! Skills catalog with a rendered detail view.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::markdown_view::MarkdownView;
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::skills::Skill;
use crate::query::hooks::use_query;
use crate::query::keys;
use crate::util::table::Column;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let skills = use_query(keys::skills::all, |client| async move { api::skills::list_skills(&client).await });
    let selected = RwSignal::new(None::<String>);

    view! {
        <section class="page skills">
            <h1>"Skills"</h1>
            <QueryStatus loading=skills.loading error=skills.error/>
            <div class="split">
                <DataTable
                    rows=Signal::derive(move || skills.data.get().unwrap_or_default())
                    columns=vec![
                        Column::new("name", "Skill"),
                        Column::new("tags", "Tags"),
                        Column::new("description", "Description").unsortable(),
                    ]
                    on_select=Callback::new(move |s: Skill| selected.set(Some(s.id)))
                    empty_text="No skills published."
                />
                {move || selected.get().map(|id| view! { <SkillDetail id/> })}
            </div>
        </section>
    }
}

#[component]
fn SkillDetail(id: String) -> impl IntoView {
    let key_id = id.clone();
    let skill = use_query(
        move || keys::skills::detail(&key_id),
        move |client| {
            let id = id.clone();
            async move { api::skills::get_skill(&client, &id).await }
        },
    );
    let content = Signal::derive(move || {
        skill
            .data
            .get()
            .map(|s| s.content_md.or(s.description).unwrap_or_default())
            .unwrap_or_default()
    });

    view! {
        <article class="preview">
            <QueryStatus loading=skill.loading error=skill.error/>
            <h2>{move || skill.data.get().map(|s| s.name).unwrap_or_default()}</h2>
            <MarkdownView content/>
        </article>
    }
}
