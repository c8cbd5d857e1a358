//! Monthly finance: transactions, category summary, add/delete.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::dialog::{ConfirmDialog, Dialog};
use crate::components::field::{SelectField, TextField, optional};
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::finance::{MonthlySummary, Transaction, TransactionInput, TransactionKind};
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::format::{current_month, money};
use crate::util::table::Column;
use crate::util::time::now_ms;

/// Move a `YYYY-MM` month by `delta` months. Malformed input is returned as is.
pub(crate) fn shift_month(month: &str, delta: i32) -> String {
    let Some((y, m)) = month.split_once('-') else {
        return month.to_owned();
    };
    let (Ok(year), Ok(mon)) = (y.parse::<i32>(), m.parse::<i32>()) else {
        return month.to_owned();
    };
    if !(1..=12).contains(&mon) {
        return month.to_owned();
    }
    let index = year * 12 + (mon - 1) + delta;
    format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
}

/// Validate the add-transaction form.
pub(crate) fn transaction_input(
    date: &str,
    amount: &str,
    kind: &str,
    category: &str,
    account: &str,
    note: &str,
) -> Result<TransactionInput, String> {
    let date = date.trim();
    if date.len() != 10 || !super::persons::is_iso_date(date) {
        return Err("Date must be YYYY-MM-DD".to_owned());
    }
    let amount: f64 = amount
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| "Amount must be a number".to_owned())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be positive".to_owned());
    }
    let category = category.trim();
    if category.is_empty() {
        return Err("Category is required".to_owned());
    }
    let kind = if kind == "income" { TransactionKind::Income } else { TransactionKind::Expense };
    Ok(TransactionInput {
        date: date.to_owned(),
        amount,
        category: category.to_owned(),
        account: optional(account),
        note: optional(note),
        kind,
    })
}

/// Share of `total` as a CSS width percentage.
pub(crate) fn bar_width(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0%".to_owned();
    }
    format!("{:.1}%", (value / total * 100.0).clamp(0.0, 100.0))
}

const COLUMNS: [Column; 5] = [
    Column::new("date", "Date"),
    Column::new("category", "Category"),
    Column::new("amount", "Amount").unfilterable(),
    Column::new("account", "Account"),
    Column::new("note", "Note"),
];

#[component]
pub fn FinancePage() -> impl IntoView {
    let month = RwSignal::new(current_month(now_ms()));
    let transactions = use_query(
        move || keys::finance::transactions(&month.get()),
        move |client| {
            let month = month.get_untracked();
            async move { api::finance::list_transactions(&client, &month).await }
        },
    );
    let summary = use_query(
        move || keys::finance::summary(&month.get()),
        move |client| {
            let month = month.get_untracked();
            async move { api::finance::monthly_summary(&client, &month).await }
        },
    );
    let mutation = use_mutation();

    let adding = RwSignal::new(false);
    let date = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let kind = RwSignal::new("expense".to_owned());
    let category = RwSignal::new(String::new());
    let account = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(None::<Transaction>);

    let open_add = move |_| {
        date.set(format!("{}-01", month.get_untracked()));
        amount.set(String::new());
        category.set(String::new());
        account.set(String::new());
        note.set(String::new());
        form_error.set(None);
        adding.set(true);
    };

    let on_submit = Callback::new(move |()| {
        let input = match transaction_input(
            &date.get_untracked(),
            &amount.get_untracked(),
            &kind.get_untracked(),
            &category.get_untracked(),
            &account.get_untracked(),
            &note.get_untracked(),
        ) {
            Ok(input) => input,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        // The summary key sits next to the transactions key under the month.
        let target_month = input.date[..7].to_owned();
        mutation.run(
            vec![keys::finance::all().with(target_month)],
            move |client| async move { api::finance::create_transaction(&client, &input).await },
            move |_| {
                mutation.notify("Transaction added");
                adding.set(false);
            },
        );
    });

    let on_delete = Callback::new(move |()| {
        let Some(tx) = deleting.get_untracked() else {
            return;
        };
        let target_month = tx.date.chars().take(7).collect::<String>();
        mutation.run(
            vec![keys::finance::all().with(target_month)],
            move |client| async move { api::finance::delete_transaction(&client, &tx.id).await },
            move |()| deleting.set(None),
        );
    });

    let actions = Callback::new(move |tx: Transaction| {
        view! {
            <button
                class="btn btn--small btn--danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    deleting.set(Some(tx.clone()));
                }
            >
                "Delete"
            </button>
        }
        .into_any()
    });

    view! {
        <section class="page finance">
            <header class="page__header">
                <h1>"Finance"</h1>
                <button class="btn" on:click=move |_| month.update(|m| *m = shift_month(m, -1))>
                    "←"
                </button>
                <input
                    class="field__input"
                    type="month"
                    prop:value=move || month.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if !value.is_empty() {
                            month.set(value);
                        }
                    }
                />
                <button class="btn" on:click=move |_| month.update(|m| *m = shift_month(m, 1))>
                    "→"
                </button>
                <button class="btn btn--primary" on:click=open_add>
                    "Add transaction"
                </button>
            </header>

            <QueryStatus loading=summary.loading error=summary.error/>
            {move || summary.data.get().map(|s| view! { <SummaryPanel summary=s/> })}

            <QueryStatus loading=transactions.loading error=transactions.error/>
            <DataTable
                rows=Signal::derive(move || transactions.data.get().unwrap_or_default())
                columns=COLUMNS.to_vec()
                actions=actions
                empty_text="No transactions this month."
            />

            <Show when=move || adding.get()>
                <Dialog
                    title="Transaction"
                    on_submit
                    on_cancel=Callback::new(move |()| adding.set(false))
                    pending=mutation.pending
                >
                    <TextField label="Date" value=date input_type="date" required=true/>
                    <SelectField label="Kind" value=kind options=vec![("expense", "Expense"), ("income", "Income")]/>
                    <TextField label="Amount" value=amount required=true input_type="number"/>
                    <TextField label="Category" value=category required=true placeholder="food, rent..."/>
                    <TextField label="Account" value=account/>
                    <TextField label="Note" value=note/>
                    {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                </Dialog>
            </Show>
            {move || {
                deleting
                    .get()
                    .map(|tx| {
                        view! {
                            <ConfirmDialog
                                title="Delete transaction"
                                message=format!("Delete {} {} on {}?", tx.category, money(tx.amount), tx.date)
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
fn SummaryPanel(summary: MonthlySummary) -> impl IntoView {
    let net = summary.income - summary.expense;
    let negative = net < 0.0;
    let expense = summary.expense;
    view! {
        <div class="summary">
            <dl class="stats-bar">
                <dt>"Income"</dt>
                <dd class="amount amount--income">{money(summary.income)}</dd>
                <dt>"Expense"</dt>
                <dd class="amount amount--expense">{money(summary.expense)}</dd>
                <dt>"Net"</dt>
                <dd class="amount" class:amount--expense=negative>
                    {money(net)}
                </dd>
            </dl>
            <ul class="category-bars">
                {summary
                    .by_category
                    .into_iter()
                    .map(|c| {
                        view! {
                            <li class="category-bars__row">
                                <span class="category-bars__label">{c.category}</span>
                                <span class="category-bars__bar" style:width=bar_width(c.total, expense)></span>
                                <span class="category-bars__value">{money(c.total)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;
