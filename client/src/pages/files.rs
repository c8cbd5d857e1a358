//! File gateway browser: prefix listing, upload, delete, download.
//!
//! Keys are flat object-store paths; "directories" are prefixes ending in
//! `/`, and navigation only changes the prefix being listed.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::dialog::ConfirmDialog;
use crate::components::file_picker::{FilePicker, PickedFile};
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::files::FileEntry;
use crate::query::hooks::{use_mutation, use_query, use_query_context};
use crate::query::keys;
use crate::util::table::Column;

/// Canonical prefix: no leading slash, trailing slash unless empty, no
/// empty or `.`/`..` segments.
pub(crate) fn normalize_prefix(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty() && *s != "." && *s != "..").collect();
    if segments.is_empty() { String::new() } else { format!("{}/", segments.join("/")) }
}

/// Prefix one level up; `None` at the root.
pub(crate) fn parent_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.rsplit_once('/').map_or_else(String::new, |(parent, _)| format!("{parent}/")))
}

/// `(label, prefix)` pairs from the root down to `prefix`.
pub(crate) fn breadcrumbs(prefix: &str) -> Vec<(String, String)> {
    let mut crumbs = vec![("root".to_owned(), String::new())];
    let mut acc = String::new();
    for segment in prefix.split('/').filter(|s| !s.is_empty()) {
        acc.push_str(segment);
        acc.push('/');
        crumbs.push((segment.to_owned(), acc.clone()));
    }
    crumbs
}

const COLUMNS: [Column; 4] = [
    Column::new("name", "Name"),
    Column::new("size", "Size").unfilterable(),
    Column::new("content_type", "Type"),
    Column::new("updated_at", "Updated"),
];

#[component]
pub fn FilesPage() -> impl IntoView {
    let prefix = RwSignal::new(String::new());
    let listing = use_query(
        move || keys::files::list(&prefix.get()),
        move |client| {
            let prefix = prefix.get_untracked();
            async move { api::files::list(&client, &prefix).await }
        },
    );
    let mutation = use_mutation();
    let ctx = use_query_context();
    let deleting = RwSignal::new(None::<FileEntry>);

    let on_pick = Callback::new(move |files: Vec<PickedFile>| {
        let target = prefix.get_untracked();
        for file in files {
            let target = target.clone();
            let name = file.name.clone();
            mutation.run(
                vec![keys::files::list(&target)],
                move |client| async move {
                    api::files::upload(&client, &target, &file.name, &file.content_type, file.bytes).await
                },
                move |_| mutation.notify(&format!("Uploaded {name}")),
            );
        }
    });

    let on_delete = Callback::new(move |()| {
        let Some(entry) = deleting.get_untracked() else {
            return;
        };
        mutation.run(
            vec![keys::files::all()],
            move |client| async move { api::files::delete(&client, &entry.key).await },
            move |()| deleting.set(None),
        );
    });

    let actions = Callback::new(move |entry: FileEntry| {
        if entry.is_dir {
            return view! { <span></span> }.into_any();
        }
        let href = entry.url.clone().unwrap_or_else(|| api::files::download_url(&ctx.client(), &entry.key));
        view! {
            <a class="btn btn--small" href=href download=entry.file_name().to_owned() on:click=|ev| ev.stop_propagation()>
                "Download"
            </a>
            <button
                class="btn btn--small btn--danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    deleting.set(Some(entry.clone()));
                }
            >
                "Delete"
            </button>
        }
        .into_any()
    });

    let on_select = Callback::new(move |entry: FileEntry| {
        if entry.is_dir {
            prefix.set(normalize_prefix(&entry.key));
        }
    });

    view! {
        <section class="page files">
            <header class="page__header">
                <h1>"Files"</h1>
                <FilePicker label="Upload" on_pick multiple=true/>
            </header>
            <nav class="breadcrumbs">
                {move || {
                    breadcrumbs(&prefix.get())
                        .into_iter()
                        .map(|(label, target)| {
                            view! {
                                <button class="breadcrumbs__item" on:click=move |_| prefix.set(target.clone())>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || parent_prefix(&prefix.get()).is_some()>
                    <button
                        class="btn btn--small"
                        on:click=move |_| prefix.set(parent_prefix(&prefix.get_untracked()).unwrap_or_default())
                    >
                        "Up"
                    </button>
                </Show>
            </nav>
            <QueryStatus loading=listing.loading error=listing.error/>
            <DataTable
                rows=Signal::derive(move || listing.data.get().unwrap_or_default())
                columns=COLUMNS.to_vec()
                actions=actions
                on_select=on_select
                empty_text="This folder is empty."
            />
            {move || {
                deleting
                    .get()
                    .map(|entry| {
                        view! {
                            <ConfirmDialog
                                title="Delete file"
                                message=format!("Delete {}?", entry.key)
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;
