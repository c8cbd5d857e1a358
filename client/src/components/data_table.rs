//! Sortable, filterable table over any [`TableRow`].
//!
//! DESIGN
//! ======
//! Sorting and filtering are pure functions in `util::table`; this component
//! only owns the [`TableQuery`] signal and renders the resulting view. An
//! optional `actions` callback renders a trailing cell per row (edit/delete
//! buttons and the like).

use leptos::prelude::*;

use crate::util::table::{Column, SortDirection, TableQuery, TableRow};

#[component]
pub fn DataTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<Column>,
    #[prop(optional)] actions: Option<Callback<R, AnyView>>,
    #[prop(optional)] on_select: Option<Callback<R>>,
    #[prop(into, default = "Nothing here yet.".to_owned())] empty_text: String,
) -> impl IntoView
where
    R: TableRow + Clone + Send + Sync + 'static,
{
    let query = RwSignal::new(TableQuery::default());
    let columns = StoredValue::new(columns);

    let visible = move || {
        let q = query.get();
        rows.with(|rows| columns.with_value(|cols| q.apply(rows, cols).into_iter().cloned().collect::<Vec<R>>()))
    };

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .copied()
                .map(|col| {
                    let indicator = move || match query.get().direction_for(col.key) {
                        Some(SortDirection::Ascending) => " ▲",
                        Some(SortDirection::Descending) => " ▼",
                        None => "",
                    };
                    view! {
                        <th
                            class="data-table__head"
                            class:data-table__head--sortable=col.sortable
                            on:click=move |_| {
                                if col.sortable {
                                    query.update(|q| q.toggle_sort(col.key));
                                }
                            }
                        >
                            {col.label}
                            {indicator}
                        </th>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let column_count = columns.with_value(Vec::len) + usize::from(actions.is_some());

    view! {
        <div class="data-table">
            <input
                class="data-table__filter"
                type="search"
                placeholder="Filter..."
                prop:value=move || query.get().filter
                on:input=move |ev| query.update(|q| q.filter = event_target_value(&ev))
            />
            <table>
                <thead>
                    <tr>
                        {header}
                        {actions.is_some().then(|| view! { <th></th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let view_rows = visible();
                        if view_rows.is_empty() {
                            let text = empty_text.clone();
                            return view! {
                                <tr>
                                    <td class="data-table__empty" colspan=column_count>
                                        {text}
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }
                        view_rows
                            .into_iter()
                            .map(|row| {
                                let cells = columns
                                    .with_value(|cols| {
                                        cols.iter()
                                            .map(|c| view! { <td>{row.cell(c.key).display()}</td> })
                                            .collect::<Vec<_>>()
                                    });
                                let action_cell = actions.map(|a| view! { <td class="data-table__actions">{a.run(row.clone())}</td> });
                                let selected = row.clone();
                                view! {
                                    <tr
                                        class:data-table__row--clickable=on_select.is_some()
                                        on:click=move |_| {
                                            if let Some(cb) = on_select {
                                                cb.run(selected.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                        {action_cell}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
