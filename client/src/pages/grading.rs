//! Homework grading: upload queue, review table and confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are photographed worksheets. Each goes through the local
//! [`GradingQueue`]: queued, uploaded to the homework service, graded there,
//! reviewed here (per-problem overrides), then confirmed back.
//!
//! DESIGN
//! ======
//! The upload/poll loop runs once per app from [`spawn_grading_worker`], not
//! per page, so navigating away does not stall the queue. The loop is a thin
//! driver over the pure steps [`claim_next`], [`record_upload`] and
//! [`record_poll`], which only touch the queue value.
//!
//! ERROR HANDLING
//! ==============
//! Upload failures fail the item (the user can retry while the bytes are
//! still in memory). Poll failures are logged and retried on the next tick.
//! Queue transition errors raised by user actions surface as toasts.

use leptos::prelude::*;

use crate::components::file_picker::{FilePicker, PickedFile};
use crate::net::api;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::homework::Submission;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::homework::UploadReceipt;
use crate::query::hooks::{QueryContext, use_mutation};
use crate::query::keys;
use crate::state::grading::{GradingQueue, MergedResult, QueueError, QueueItem, QueueStatus, Upload};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastLevel;
use crate::state::toast::ToastState;
use crate::util::time::now_ms;

/// Delay between worker ticks when there is nothing to upload.
pub const POLL_INTERVAL_MS: u64 = 3_000;

/// Claim the oldest queued item for upload.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn claim_next(queue: &mut GradingQueue) -> Option<(String, Upload)> {
    let id = queue.next_queued()?.id.clone();
    match queue.start_upload(&id) {
        Ok(upload) => Some((id, upload)),
        Err(e) => {
            log::warn!("grading: cannot upload {id}: {e}");
            None
        }
    }
}

/// Fold an upload outcome into the queue.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn record_upload(queue: &mut GradingQueue, id: &str, outcome: Result<UploadReceipt, ApiError>) {
    let applied = match outcome {
        Ok(receipt) => queue.upload_succeeded(id, &receipt.submission_id),
        Err(e) => queue.upload_failed(id, &e.to_string()),
    };
    // The item may have been removed while its upload was in flight.
    if let Err(e) = applied {
        log::debug!("grading: dropping upload result for {id}: {e}");
    }
}

/// Fold a polled submission into the queue. Returns a message worth showing
/// when the submission left processing.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn record_poll(queue: &mut GradingQueue, submission: &Submission) -> Option<String> {
    let file_name = queue.by_submission(&submission.id)?.file_name.clone();
    match queue.apply_server_result(submission) {
        Ok(QueueStatus::PendingReview) => Some(format!("{file_name} is graded and ready for review")),
        Ok(QueueStatus::Failed) => Some(format!("Grading {file_name} failed")),
        Ok(_) => None,
        Err(e) => {
            log::debug!("grading: ignoring poll result for {}: {e}", submission.id);
            None
        }
    }
}

/// Start the app-wide upload/poll loop. Browser only.
pub fn spawn_grading_worker(queue: RwSignal<GradingQueue>, ctx: QueryContext, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        log::debug!("grading worker started");
        loop {
            let client = ctx.client();

            let Some(claimed) = queue.try_update(claim_next) else {
                break;
            };
            if let Some((id, upload)) = claimed {
                let outcome =
                    api::homework::upload_submission(&client, &upload.file_name, &upload.content_type, upload.bytes)
                        .await;
                queue.update(|q| record_upload(q, &id, outcome));
                continue;
            }

            let pending = queue.with_untracked(GradingQueue::processing_submissions);
            for sid in pending {
                match api::homework::get_submission(&client, &sid).await {
                    Ok(submission) => {
                        ctx.cache().set_data(&keys::homework::submission(&sid), submission.clone());
                        if let Some(message) = queue.try_update(|q| record_poll(q, &submission)).flatten() {
                            toasts.update(|t| {
                                t.push(ToastLevel::Info, message, now_ms());
                            });
                        }
                    }
                    Err(e) => log::warn!("grading: polling {sid} failed: {e}"),
                }
            }

            gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (queue, ctx, toasts);
    }
}

/// Short queue summary for the page header.
pub(crate) fn queue_summary(queue: &GradingQueue) -> String {
    let waiting = queue.count(QueueStatus::Queued) + queue.count(QueueStatus::Uploading);
    let grading = queue.count(QueueStatus::Processing);
    let review = queue.count(QueueStatus::PendingReview);
    let failed = queue.count(QueueStatus::Failed);
    let mut parts = Vec::new();
    if waiting > 0 {
        parts.push(format!("{waiting} uploading"));
    }
    if grading > 0 {
        parts.push(format!("{grading} grading"));
    }
    if review > 0 {
        parts.push(format!("{review} to review"));
    }
    if failed > 0 {
        parts.push(format!("{failed} failed"));
    }
    if parts.is_empty() { "Queue is empty".to_owned() } else { parts.join(" · ") }
}

fn status_class(status: QueueStatus) -> &'static str {
    match status {
        QueueStatus::Queued | QueueStatus::Uploading | QueueStatus::Processing => "badge--pending",
        QueueStatus::PendingReview => "badge--warn",
        QueueStatus::Confirmed => "badge--ok",
        QueueStatus::Failed => "badge--error",
    }
}

#[component]
pub fn GradingPage() -> impl IntoView {
    let queue = expect_context::<RwSignal<GradingQueue>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reviewing = RwSignal::new(None::<String>);

    let report = move |result: Result<(), QueueError>| {
        if let Err(e) = result {
            toasts.update(|t| {
                t.error(e.to_string(), now_ms());
            });
        }
    };

    let on_pick = Callback::new(move |files: Vec<PickedFile>| {
        let now = now_ms();
        queue.update(|q| {
            for file in files {
                q.enqueue(Upload { file_name: file.name, content_type: file.content_type, bytes: file.bytes }, now);
            }
        });
    });

    view! {
        <section class="page grading">
            <header class="page__header">
                <h1>"Grading"</h1>
                <span class="page__meta">{move || queue.with(queue_summary)}</span>
                <FilePicker label="Add pages" on_pick multiple=true accept="image/*"/>
                <button
                    class="btn"
                    on:click=move |_| {
                        queue.update(|q| {
                            q.prune_confirmed();
                        });
                    }
                >
                    "Clear confirmed"
                </button>
            </header>

            <ul class="queue">
                {move || {
                    queue
                        .with(|q| q.items().to_vec())
                        .into_iter()
                        .map(|item| view! { <QueueRow item reviewing report/> })
                        .collect::<Vec<_>>()
                }}
            </ul>

            {move || reviewing.get().map(|sid| view! { <ReviewPanel submission_id=sid reviewing/> })}
        </section>
    }
}

#[component]
fn QueueRow<F>(item: QueueItem, reviewing: RwSignal<Option<String>>, report: F) -> impl IntoView
where
    F: Fn(Result<(), QueueError>) + Copy + Send + Sync + 'static,
{
    let queue = expect_context::<RwSignal<GradingQueue>>();
    let id = item.id.clone();
    let retry_id = id.clone();
    let status = item.status;
    let submission_id = item.submission_id.clone();
    let uploading = status == QueueStatus::Uploading;
    let reviewable = matches!(status, QueueStatus::PendingReview | QueueStatus::Confirmed);

    view! {
        <li class="queue__item">
            <span class="queue__name">{item.file_name.clone()}</span>
            <span class=format!("badge {}", status_class(status))>{status.label()}</span>
            {item.error.clone().map(|e| view! { <span class="queue__error">{e}</span> })}
            <span class="queue__actions">
                {reviewable
                    .then(|| {
                        view! {
                            <button class="btn btn--small" on:click=move |_| reviewing.set(submission_id.clone())>
                                {if status == QueueStatus::Confirmed { "View" } else { "Review" }}
                            </button>
                        }
                    })}
                {(status == QueueStatus::Failed)
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--small"
                                on:click=move |_| {
                                    let mut result = Ok(());
                                    queue.update(|q| result = q.retry(&retry_id));
                                    report(result);
                                }
                            >
                                "Retry"
                            </button>
                        }
                    })}
                <button
                    class="btn btn--small btn--danger"
                    disabled=uploading
                    on:click=move |_| {
                        let sid = queue.with_untracked(|q| q.item(&id).and_then(|i| i.submission_id.clone()));
                        queue.update(|q| {
                            q.remove(&id);
                        });
                        if sid.is_some() && reviewing.get_untracked() == sid {
                            reviewing.set(None);
                        }
                    }
                >
                    "Remove"
                </button>
            </span>
        </li>
    }
}

#[component]
fn ReviewPanel(submission_id: String, reviewing: RwSignal<Option<String>>) -> impl IntoView {
    let queue = expect_context::<RwSignal<GradingQueue>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mutation = use_mutation();
    let sid = StoredValue::new(submission_id);

    let status = move || sid.with_value(|s| queue.with(|q| q.by_submission(s).map(|i| i.status)));
    let results = move || sid.with_value(|s| queue.with(|q| q.merged_results(s)));
    let score = move || sid.with_value(|s| queue.with(|q| q.score(s)));
    let editable = move || status() == Some(QueueStatus::PendingReview);

    let toggle = move |index: i64| {
        let outcome = sid.with_value(|s| {
            let mut outcome = Ok(());
            queue.update(|q| outcome = q.toggle(s, index, now_ms()));
            outcome
        });
        if let Err(e) = outcome {
            toasts.update(|t| {
                t.error(e.to_string(), now_ms());
            });
        }
    };

    let on_confirm = move |_| {
        let id = sid.get_value();
        let payload = match queue.with_untracked(|q| q.confirm_payload(&id)) {
            Ok(payload) => payload,
            Err(e) => {
                toasts.update(|t| {
                    t.error(e.to_string(), now_ms());
                });
                return;
            }
        };
        let key_id = id.clone();
        mutation.run(
            vec![keys::homework::submission(&key_id)],
            move |client| async move { api::homework::confirm_submission(&client, &id, &payload).await },
            move |_: Submission| {
                let confirmed = sid.with_value(|s| {
                    let mut confirmed = Ok(());
                    queue.update(|q| confirmed = q.mark_confirmed(s));
                    confirmed
                });
                match confirmed {
                    Ok(()) => mutation.notify("Grading confirmed"),
                    Err(e) => log::warn!("grading: confirmed on server but not locally: {e}"),
                }
            },
        );
    };

    view! {
        <article class="review">
            <header class="review__header">
                <h2>
                    {move || {
                        let (correct, total) = score();
                        format!("Score {correct}/{total}")
                    }}
                </h2>
                <span class="page__meta">{move || status().map(QueueStatus::label).unwrap_or_default()}</span>
                <button class="btn" on:click=move |_| reviewing.set(None)>
                    "Close"
                </button>
            </header>
            <table class="review__table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Question"</th>
                        <th>"Answer"</th>
                        <th>"Expected"</th>
                        <th>"Verdict"</th>
                        <th>"Comment"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        results()
                            .into_iter()
                            .map(|r: MergedResult| {
                                let index = r.index;
                                let grader = if r.server_correct { "Grader: correct" } else { "Grader: wrong" };
                                view! {
                                    <tr class:review__row--overridden=r.overridden>
                                        <td>{r.index}</td>
                                        <td>{r.question.unwrap_or_default()}</td>
                                        <td>{r.student_answer.unwrap_or_default()}</td>
                                        <td>{r.expected_answer.unwrap_or_default()}</td>
                                        <td>
                                            <button
                                                class="btn btn--small verdict"
                                                class:verdict--correct=r.correct
                                                disabled=move || !editable()
                                                title=grader
                                                on:click=move |_| toggle(index)
                                            >
                                                {if r.correct { "✓" } else { "✗" }}
                                            </button>
                                        </td>
                                        <td>{r.comment.unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=editable>
                <button class="btn btn--primary" disabled=move || mutation.pending.get() on:click=on_confirm>
                    "Confirm results"
                </button>
            </Show>
        </article>
    }
}

#[cfg(test)]
#[path = "grading_test.rs"]
mod grading_test;
