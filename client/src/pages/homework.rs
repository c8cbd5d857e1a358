//! Homework generator and generated-record browser.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::dialog::ConfirmDialog;
use crate::components::field::{SelectField, TextField, optional};
use crate::components::markdown_view::MarkdownView;
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::homework::{GenerateHomeworkRequest, HomeworkRecord};
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::table::Column;

/// Upper bound the generator accepts per sheet.
pub(crate) const MAX_PROBLEMS: u32 = 50;

/// Validate the generator form.
pub(crate) fn generate_request(
    subject: &str,
    grade: &str,
    topic: &str,
    count: &str,
    difficulty: &str,
) -> Result<GenerateHomeworkRequest, String> {
    let subject = subject.trim();
    let grade = grade.trim();
    if subject.is_empty() || grade.is_empty() {
        return Err("Subject and grade are required".to_owned());
    }
    let problem_count: u32 = count.trim().parse().map_err(|_| "Problem count must be a number".to_owned())?;
    if problem_count == 0 || problem_count > MAX_PROBLEMS {
        return Err(format!("Problem count must be between 1 and {MAX_PROBLEMS}"));
    }
    Ok(GenerateHomeworkRequest {
        subject: subject.to_owned(),
        grade: grade.to_owned(),
        topic: optional(topic),
        problem_count,
        difficulty: optional(difficulty),
    })
}

#[component]
pub fn HomeworkPage() -> impl IntoView {
    let records = use_query(keys::homework::records, |client| async move { api::homework::list_records(&client).await });
    let mutation = use_mutation();

    let subject = RwSignal::new("math".to_owned());
    let grade = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let count = RwSignal::new("10".to_owned());
    let difficulty = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<String>);
    let show_answers = RwSignal::new(false);
    let deleting = RwSignal::new(None::<HomeworkRecord>);

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match generate_request(
            &subject.get_untracked(),
            &grade.get_untracked(),
            &topic.get_untracked(),
            &count.get_untracked(),
            &difficulty.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        form_error.set(None);
        mutation.run(
            vec![keys::homework::records()],
            move |client| async move { api::homework::generate(&client, &request).await },
            move |record: HomeworkRecord| {
                mutation.notify("Homework generated");
                selected.set(Some(record.id));
            },
        );
    };

    let on_delete = Callback::new(move |()| {
        let Some(record) = deleting.get_untracked() else {
            return;
        };
        let deleted_id = record.id.clone();
        mutation.run(
            vec![keys::homework::records()],
            move |client| async move { api::homework::delete_record(&client, &record.id).await },
            move |()| {
                if selected.get_untracked().as_deref() == Some(deleted_id.as_str()) {
                    selected.set(None);
                }
                deleting.set(None);
            },
        );
    });

    let actions = Callback::new(move |record: HomeworkRecord| {
        view! {
            <button
                class="btn btn--small btn--danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    deleting.set(Some(record.clone()));
                }
            >
                "Delete"
            </button>
        }
        .into_any()
    });

    view! {
        <section class="page homework">
            <header class="page__header">
                <h1>"Homework"</h1>
                <a class="btn" href="/homework/grading">
                    "Grading queue →"
                </a>
            </header>

            <form class="inline-form" on:submit=on_generate>
                <SelectField
                    label="Subject"
                    value=subject
                    options=vec![("math", "Math"), ("chinese", "Chinese"), ("english", "English"), ("science", "Science")]
                />
                <TextField label="Grade" value=grade required=true placeholder="grade 3"/>
                <TextField label="Topic" value=topic placeholder="fractions"/>
                <TextField label="Problems" value=count input_type="number"/>
                <SelectField
                    label="Difficulty"
                    value=difficulty
                    options=vec![("", "-"), ("easy", "Easy"), ("medium", "Medium"), ("hard", "Hard")]
                />
                <button type="submit" class="btn btn--primary" disabled=move || mutation.pending.get()>
                    {move || if mutation.pending.get() { "Generating..." } else { "Generate" }}
                </button>
                {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </form>

            <QueryStatus loading=records.loading error=records.error/>
            <div class="split">
                <DataTable
                    rows=Signal::derive(move || records.data.get().unwrap_or_default())
                    columns=vec![
                        Column::new("subject", "Subject"),
                        Column::new("grade", "Grade"),
                        Column::new("topic", "Topic"),
                        Column::new("problem_count", "Problems").unfilterable(),
                        Column::new("created_at", "Created"),
                    ]
                    actions=actions
                    on_select=Callback::new(move |r: HomeworkRecord| selected.set(Some(r.id)))
                    empty_text="No homework generated yet."
                />
                {move || selected.get().map(|id| view! { <RecordPreview id show_answers/> })}
            </div>

            {move || {
                deleting
                    .get()
                    .map(|r| {
                        view! {
                            <ConfirmDialog
                                title="Delete homework"
                                message=format!("Delete the {} sheet for {}?", r.subject, r.grade)
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
fn RecordPreview(id: String, show_answers: RwSignal<bool>) -> impl IntoView {
    let key_id = id.clone();
    let record = use_query(
        move || keys::homework::record(&key_id),
        move |client| {
            let id = id.clone();
            async move { api::homework::get_record(&client, &id).await }
        },
    );
    let content = Signal::derive(move || {
        record.data.get().map_or_else(String::new, |r| {
            match (show_answers.get(), r.answer_md) {
                (true, Some(answers)) => format!("{}\n\n---\n\n{answers}", r.content_md),
                _ => r.content_md,
            }
        })
    });

    view! {
        <article class="preview">
            <QueryStatus loading=record.loading error=record.error/>
            <label class="field field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || show_answers.get()
                    on:change=move |ev| show_answers.set(event_target_checked(&ev))
                />
                <span class="field__label">"Show answers"</span>
            </label>
            <MarkdownView content/>
        </article>
    }
}

#[cfg(test)]
#[path = "homework_test.rs"]
mod homework_test;
