//! Efficiency evaluation: score a finished task and browse past scores.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::field::{TextArea, TextField, optional};
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::efficiency::{EfficiencyEvaluation, EvaluationRequest};
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::table::Column;

/// Validate the evaluation form. Minutes accept `90`, `1h30m` or `1:30`.
pub(crate) fn evaluation_request(task: &str, duration: &str, outcome: &str) -> Result<EvaluationRequest, String> {
    let task = task.trim();
    if task.is_empty() {
        return Err("Describe the task".to_owned());
    }
    let minutes = parse_minutes(duration).ok_or_else(|| "Duration must look like 90, 1h30m or 1:30".to_owned())?;
    if minutes == 0 {
        return Err("Duration must be positive".to_owned());
    }
    Ok(EvaluationRequest { task: task.to_owned(), minutes, outcome: optional(outcome) })
}

pub(crate) fn parse_minutes(raw: &str) -> Option<u32> {
    let raw = raw.trim().to_lowercase();
    if let Some((h, m)) = raw.split_once(':') {
        let (h, m) = (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?);
        return (m < 60).then(|| h * 60 + m);
    }
    if let Some((h, rest)) = raw.split_once('h') {
        let hours = h.trim().parse::<u32>().ok()?;
        let rest = rest.trim().trim_end_matches('m').trim();
        let minutes = if rest.is_empty() { 0 } else { rest.parse::<u32>().ok()? };
        return Some(hours * 60 + minutes);
    }
    raw.trim_end_matches('m').trim().parse().ok()
}

#[component]
pub fn EfficiencyPage() -> impl IntoView {
    let history =
        use_query(keys::efficiency::history, |client| async move { api::efficiency::history(&client).await });
    let mutation = use_mutation();
    let task = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let outcome = RwSignal::new(String::new());
    let latest = RwSignal::new(None::<EfficiencyEvaluation>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request =
            match evaluation_request(&task.get_untracked(), &duration.get_untracked(), &outcome.get_untracked()) {
                Ok(request) => request,
                Err(e) => {
                    mutation.notify_error(&e);
                    return;
                }
            };
        mutation.run(
            vec![keys::efficiency::history()],
            move |client| async move { api::efficiency::evaluate(&client, &request).await },
            move |evaluation| {
                task.set(String::new());
                duration.set(String::new());
                outcome.set(String::new());
                latest.set(Some(evaluation));
            },
        );
    };

    view! {
        <section class="page efficiency">
            <h1>"Efficiency"</h1>
            <form class="stacked-form" on:submit=on_submit>
                <TextField label="Task" value=task required=true/>
                <TextField label="Time spent" value=duration placeholder="1h30m"/>
                <TextArea label="Outcome" value=outcome rows=3/>
                <button type="submit" class="btn btn--primary" disabled=move || mutation.pending.get()>
                    "Evaluate"
                </button>
            </form>
            {move || {
                latest
                    .get()
                    .map(|e| {
                        view! {
                            <article class="card evaluation">
                                <h2 class="card__title">{format!("Score {:.1}", e.score)}</h2>
                                <p>{e.feedback.unwrap_or_default()}</p>
                            </article>
                        }
                    })
            }}
            <h2>"History"</h2>
            <QueryStatus loading=history.loading error=history.error/>
            <DataTable
                rows=Signal::derive(move || history.data.get().unwrap_or_default())
                columns=vec![
                    Column::new("created_at", "When"),
                    Column::new("task", "Task"),
                    Column::new("minutes", "Minutes").unfilterable(),
                    Column::new("score", "Score").unfilterable(),
                    Column::new("feedback", "Feedback").unsortable(),
                ]
                empty_text="No evaluations yet."
            />
        </section>
    }
}

#[cfg(test)]
#[path = "efficiency_test.rs"]
mod efficiency_test;
