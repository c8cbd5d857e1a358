//! Vocabulary review against the wordbook chat bot.
//!
//! Each button sends one [`Command`]; the classified reply is folded into the
//! shared [`WordbookSession`] so the card survives navigating away and back.

use leptos::prelude::*;

use crate::components::field::TextField;
use crate::net::api;
use crate::net::types::wordbook::{WordCard, WordbookStats};
use crate::query::hooks::{MutationHandle, use_mutation};
use crate::query::keys;
use crate::state::wordbook::WordbookSession;
use crate::util::wordbook_parse::{Command, Reply};

/// Short transcript label for a reply.
pub(crate) fn reply_summary(reply: &Reply) -> String {
    match reply {
        Reply::Card(card) => format!("card: {}", card.word),
        Reply::Stats(stats) => format!("stats: {} due of {}", stats.due_today, stats.total),
        Reply::NothingDue => "nothing due".to_owned(),
        Reply::Added { word } => format!("added {word}"),
        Reply::Message(text) => crate::util::format::truncate(text, 80),
    }
}

/// Send `command`, fold the reply into the session, then send `then`.
fn send_command(mutation: MutationHandle, session: RwSignal<WordbookSession>, command: Command, then: Option<Command>) {
    let invalidates = match command {
        Command::Review => vec![keys::wordbook::due()],
        Command::Stats => Vec::new(),
        _ => vec![keys::wordbook::all()],
    };
    let sent = command.clone();
    mutation.run(
        invalidates,
        move |client| async move { api::wordbook::send(&client, &sent).await },
        move |reply: Reply| {
            session.update(|s| s.apply(&command, reply));
            if let Some(next) = then {
                send_command(mutation, session, next, None);
            }
        },
    );
}

#[component]
pub fn WordbookPage() -> impl IntoView {
    let session = expect_context::<RwSignal<WordbookSession>>();
    let mutation = use_mutation();
    let new_word = RwSignal::new(String::new());
    let typed = RwSignal::new(String::new());

    let send = move |command: Command| send_command(mutation, session, command, None);

    // First visit: fetch a card and the stats.
    Effect::new(move |started: Option<()>| {
        if started.is_none() && session.with_untracked(|s| s.history.is_empty()) {
            send(Command::Review);
            send(Command::Stats);
        }
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let word = new_word.get_untracked().trim().to_owned();
        if word.is_empty() {
            return;
        }
        new_word.set(String::new());
        send(Command::Add(word));
    };

    let on_typed = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Command::parse(&typed.get_untracked()) {
            Some(command) => {
                typed.set(String::new());
                send(command);
            }
            None => mutation.notify_error("Try: review, stats, add <word>, remember <word>, forget <word>"),
        }
    };

    let grade = move |remembered: bool| {
        let Some(word) = session.with_untracked(|s| s.current_word().map(str::to_owned)) else {
            return;
        };
        let verdict = if remembered { Command::Remember(word) } else { Command::Forget(word) };
        send_command(mutation, session, verdict, Some(Command::Review));
    };

    view! {
        <section class="page wordbook">
            <header class="page__header">
                <h1>"Wordbook"</h1>
                <button class="btn" disabled=move || mutation.pending.get() on:click=move |_| send(Command::Stats)>
                    "Refresh stats"
                </button>
            </header>

            {move || session.with(|s| s.stats.clone()).map(|stats| view! { <StatsBar stats/> })}
            <p class="page__meta">
                {move || session.with(|s| format!("This session: {} remembered, {} forgotten", s.remembered, s.forgotten))}
            </p>

            <div class="wordbook__card">
                {move || {
                    let (card, nothing_due) = session.with(|s| (s.current.clone(), s.nothing_due));
                    match card {
                        Some(card) => view! { <Card card/> }.into_any(),
                        None if nothing_due => view! { <p class="page__empty">"Nothing due. Well done!"</p> }.into_any(),
                        None => {
                            view! {
                                <button class="btn btn--primary" on:click=move |_| send(Command::Review)>
                                    "Start review"
                                </button>
                            }
                                .into_any()
                        }
                    }
                }}
                <Show when=move || session.with(|s| s.current.is_some())>
                    <div class="wordbook__grade">
                        <button class="btn btn--danger" disabled=move || mutation.pending.get() on:click=move |_| grade(false)>
                            "Forgot"
                        </button>
                        <button class="btn btn--primary" disabled=move || mutation.pending.get() on:click=move |_| grade(true)>
                            "Remembered"
                        </button>
                    </div>
                </Show>
            </div>
            {move || session.with(|s| s.notice.clone()).map(|n| view! { <p class="wordbook__notice">{n}</p> })}

            <form class="inline-form" on:submit=on_add>
                <TextField label="New word" value=new_word/>
                <button type="submit" class="btn">
                    "Add"
                </button>
            </form>
            <form class="inline-form" on:submit=on_typed>
                <TextField label="Command" value=typed placeholder="review | stats | add <word>"/>
                <button type="submit" class="btn">
                    "Send"
                </button>
            </form>

            <details class="wordbook__history">
                <summary>"Transcript"</summary>
                <ul>
                    {move || {
                        session
                            .with(|s| s.history.clone())
                            .into_iter()
                            .rev()
                            .map(|e| {
                                view! {
                                    <li>
                                        <code>{e.command}</code>
                                        " → "
                                        {reply_summary(&e.reply)}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </details>
        </section>
    }
}

#[component]
fn Card(card: WordCard) -> impl IntoView {
    view! {
        <article class="word-card">
            <h2 class="word-card__word">{card.word}</h2>
            {card.phonetic.map(|p| view! { <p class="word-card__phonetic">{p}</p> })}
            <p class="word-card__meaning">{card.meaning}</p>
            {card.example.map(|e| view! { <p class="word-card__example">{e}</p> })}
            <p class="word-card__meta">
                {card.review_count.map(|n| format!("Reviewed {n}x"))}
                {card.next_review.map(|d| format!(" · next {d}"))}
            </p>
        </article>
    }
}

#[component]
fn StatsBar(stats: WordbookStats) -> impl IntoView {
    view! {
        <dl class="stats-bar">
            <dt>"Total"</dt>
            <dd>{stats.total}</dd>
            <dt>"Due today"</dt>
            <dd>{stats.due_today}</dd>
            <dt>"Learned"</dt>
            <dd>{stats.learned}</dd>
            {stats
                .streak_days
                .map(|days| {
                    view! {
                        <dt>"Streak"</dt>
                        <dd>{format!("{days} days")}</dd>
                    }
                })}
        </dl>
    }
}

#[cfg(test)]
#[path = "wordbook_test.rs"]
mod wordbook_test;
