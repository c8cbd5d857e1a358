//! Doc service pages: list, read, write.
//!
//! The editor shows a live preview with the same renderer the reader uses.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::dialog::ConfirmDialog;
use crate::components::field::{TextArea, TextField};
use crate::components::markdown_view::MarkdownView;
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::docs::{DocPage, DocPageInput};
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::table::Column;

/// Comma or whitespace separated tags, deduplicated in input order.
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split([',', ' ', '，']).map(str::trim).filter(|t| !t.is_empty()) {
        let tag = tag.trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

pub(crate) fn page_input(title: &str, tags: &str, content: &str) -> Result<DocPageInput, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_owned());
    }
    Ok(DocPageInput { title: title.to_owned(), content_md: content.to_owned(), tags: parse_tags(tags) })
}

/// What the right-hand pane shows.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Pane {
    Empty,
    Read(String),
    Edit(Option<String>),
}

#[component]
pub fn DocsPage() -> impl IntoView {
    let pages = use_query(keys::docs::pages, |client| async move { api::docs::list_pages(&client).await });
    let mutation = use_mutation();
    let pane = RwSignal::new(Pane::Empty);
    let deleting = RwSignal::new(None::<DocPage>);

    let title = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let start_edit = move |page: Option<DocPage>| {
        let id = page.as_ref().map(|p| p.id.clone());
        let page = page.unwrap_or_else(|| DocPage {
            id: String::new(),
            title: String::new(),
            content_md: String::new(),
            tags: Vec::new(),
            updated_at: None,
        });
        title.set(page.title);
        tags.set(page.tags.join(", "));
        content.set(page.content_md);
        pane.set(Pane::Edit(id));
    };

    let on_save = move |_| {
        let Pane::Edit(target) = pane.get_untracked() else {
            return;
        };
        let input = match page_input(&title.get_untracked(), &tags.get_untracked(), &content.get_untracked()) {
            Ok(input) => input,
            Err(e) => {
                mutation.notify_error(&e);
                return;
            }
        };
        mutation.run(
            vec![keys::docs::pages()],
            move |client| async move {
                match target {
                    Some(id) => api::docs::update_page(&client, &id, &input).await,
                    None => api::docs::create_page(&client, &input).await,
                }
            },
            move |page: DocPage| {
                mutation.notify("Page saved");
                pane.set(Pane::Read(page.id));
            },
        );
    };

    let on_delete = Callback::new(move |()| {
        let Some(page) = deleting.get_untracked() else {
            return;
        };
        mutation.run(
            vec![keys::docs::pages()],
            move |client| async move { api::docs::delete_page(&client, &page.id).await },
            move |()| {
                deleting.set(None);
                pane.set(Pane::Empty);
            },
        );
    });

    view! {
        <section class="page docs">
            <header class="page__header">
                <h1>"Docs"</h1>
                <button class="btn btn--primary" on:click=move |_| start_edit(None)>
                    "New page"
                </button>
            </header>
            <QueryStatus loading=pages.loading error=pages.error/>
            <div class="split">
                <DataTable
                    rows=Signal::derive(move || pages.data.get().unwrap_or_default())
                    columns=vec![
                        Column::new("title", "Title"),
                        Column::new("tags", "Tags"),
                        Column::new("updated_at", "Updated"),
                    ]
                    on_select=Callback::new(move |p: DocPage| pane.set(Pane::Read(p.id)))
                    empty_text="No pages yet."
                />
                {move || match pane.get() {
                    Pane::Empty => view! { <p class="page__empty">"Pick a page."</p> }.into_any(),
                    Pane::Read(id) => {
                        view! {
                            <PageReader
                                id
                                on_edit=Callback::new(move |p: DocPage| start_edit(Some(p)))
                                on_delete=Callback::new(move |p: DocPage| deleting.set(Some(p)))
                            />
                        }
                            .into_any()
                    }
                    Pane::Edit(_) => {
                        view! {
                            <div class="editor">
                                <div class="editor__form">
                                    <TextField label="Title" value=title required=true/>
                                    <TextField label="Tags" value=tags placeholder="home, howto"/>
                                    <TextArea label="Content" value=content rows=20/>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| pane.set(Pane::Empty)>
                                            "Cancel"
                                        </button>
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || mutation.pending.get()
                                            on:click=on_save
                                        >
                                            "Save"
                                        </button>
                                    </div>
                                </div>
                                <MarkdownView content=Signal::derive(move || content.get())/>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            {move || {
                deleting
                    .get()
                    .map(|p| {
                        view! {
                            <ConfirmDialog
                                title="Delete page"
                                message=format!("Delete \"{}\"?", p.title)
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn PageReader(id: String, on_edit: Callback<DocPage>, on_delete: Callback<DocPage>) -> impl IntoView {
    let key_id = id.clone();
    let page = use_query(
        move || keys::docs::page(&key_id),
        move |client| {
            let id = id.clone();
            async move { api::docs::get_page(&client, &id).await }
        },
    );
    let content = Signal::derive(move || page.data.get().map(|p| p.content_md).unwrap_or_default());

    view! {
        <article class="preview">
            <QueryStatus loading=page.loading error=page.error/>
            {move || {
                page.data
                    .get()
                    .map(|p| {
                        let edit_page = p.clone();
                        let delete_page = p.clone();
                        view! {
                            <header class="preview__header">
                                <h2>{p.title}</h2>
                                <span class="page__meta">{p.tags.join(", ")}</span>
                                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_page.clone())>
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| on_delete.run(delete_page.clone())
                                >
                                    "Delete"
                                </button>
                            </header>
                        }
                    })
            }}
            <MarkdownView content/>
        </article>
    }
}

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;
