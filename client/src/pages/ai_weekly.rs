//! AI weekly digests: report list, rendered report, on-demand generation.

use leptos::prelude::*;

use crate::components::field::{TextField, optional};
use crate::components::markdown_view::MarkdownView;
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::ai_weekly::AiReport;
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::markdown::excerpt;

/// `YYYY-Www` (ISO week), e.g. `2024-W07`.
pub(crate) fn is_iso_week(value: &str) -> bool {
    let Some((year, week)) = value.split_once("-W") else {
        return false;
    };
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && week.len() == 2
        && week.parse::<u32>().is_ok_and(|w| (1..=53).contains(&w))
}

/// Newest week first; ties by creation time.
pub(crate) fn sort_reports(reports: &mut [AiReport]) {
    reports.sort_by(|a, b| b.week.cmp(&a.week).then_with(|| b.created_at.cmp(&a.created_at)));
}

#[component]
pub fn AiWeeklyPage() -> impl IntoView {
    let reports = use_query(keys::ai_weekly::reports, |client| async move {
        api::ai_weekly::list_reports(&client).await.map(|mut reports| {
            sort_reports(&mut reports);
            reports
        })
    });
    let mutation = use_mutation();
    let selected = RwSignal::new(None::<String>);
    let week = RwSignal::new(String::new());

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let week = optional(&week.get_untracked());
        if week.as_deref().is_some_and(|w| !is_iso_week(w)) {
            mutation.notify_error("Week must look like 2024-W07");
            return;
        }
        mutation.run(
            vec![keys::ai_weekly::reports()],
            move |client| async move { api::ai_weekly::generate_report(&client, week).await },
            move |report: AiReport| {
                mutation.notify(&format!("Generated {}", report.title));
                selected.set(Some(report.id));
            },
        );
    };

    view! {
        <section class="page ai-weekly">
            <header class="page__header">
                <h1>"AI Weekly"</h1>
                <form class="inline-form" on:submit=on_generate>
                    <TextField label="Week" value=week placeholder="latest"/>
                    <button type="submit" class="btn btn--primary" disabled=move || mutation.pending.get()>
                        {move || if mutation.pending.get() { "Generating..." } else { "Generate" }}
                    </button>
                </form>
            </header>
            <QueryStatus loading=reports.loading error=reports.error/>
            <div class="split">
                <ul class="report-list">
                    {move || {
                        reports
                            .data
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|r| {
                                let id = r.id.clone();
                                let active_id = r.id.clone();
                                let blurb = r.summary.clone().unwrap_or_else(|| excerpt(&r.content_md, 140));
                                view! {
                                    <li
                                        class="report-list__item"
                                        class:report-list__item--active=move || {
                                            selected.get().as_deref() == Some(active_id.as_str())
                                        }
                                        on:click=move |_| selected.set(Some(id.clone()))
                                    >
                                        <span class="report-list__week">{r.week}</span>
                                        <h3>{r.title}</h3>
                                        <p>{blurb}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                {move || selected.get().map(|id| view! { <ReportDetail id/> })}
            </div>
        </section>
    }
}

#[component]
fn ReportDetail(id: String) -> impl IntoView {
    let key_id = id.clone();
    let report = use_query(
        move || keys::ai_weekly::report(&key_id),
        move |client| {
            let id = id.clone();
            async move { api::ai_weekly::get_report(&client, &id).await }
        },
    );
    let content = Signal::derive(move || report.data.get().map(|r| r.content_md).unwrap_or_default());

    view! {
        <article class="preview">
            <QueryStatus loading=report.loading error=report.error/>
            <h2>{move || report.data.get().map(|r| r.title).unwrap_or_default()}</h2>
            <MarkdownView content/>
            <ul class="report-items">
                {move || {
                    report
                        .data
                        .get()
                        .map(|r| r.items)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|item| {
                            let title = item.title.clone();
                            view! {
                                <li>
                                    {match item.url {
                                        Some(url) => {
                                            view! {
                                                <a href=url target="_blank" rel="noopener">
                                                    {title}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => view! { <span>{title}</span> }.into_any(),
                                    }}
                                    {item.source.map(|s| view! { <span class="report-items__source">{s}</span> })}
                                    {item.summary.map(|s| view! { <p>{s}</p> })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </article>
    }
}

#[cfg(test)]
#[path = "ai_weekly_test.rs"]
mod ai_weekly_test;
