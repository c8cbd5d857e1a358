//! Person list with create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persons service owns identity; this page only validates the form and
//! forwards it. Every write invalidates `persons`, which also drops the
//! per-person detail caches below it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::DataTable;
use crate::components::dialog::{ConfirmDialog, Dialog};
use crate::components::field::{SelectField, TextArea, TextField, optional};
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::persons::{Person, PersonInput};
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::table::Column;

/// Editable copy of a person form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PersonForm {
    pub name: String,
    pub gender: String,
    pub birth_date: String,
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub relation: String,
    pub notes: String,
}

impl PersonForm {
    pub fn from_person(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            gender: p.gender.clone().unwrap_or_default(),
            birth_date: p.birth_date.clone().unwrap_or_default(),
            id_number: p.id_number.clone().unwrap_or_default(),
            phone: p.phone.clone().unwrap_or_default(),
            email: p.email.clone().unwrap_or_default(),
            relation: p.relation.clone().unwrap_or_default(),
            notes: p.notes.clone().unwrap_or_default(),
        }
    }

    /// Validate into the request body.
    pub fn to_input(&self) -> Result<PersonInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_owned());
        }
        let email = optional(&self.email);
        if email.as_deref().is_some_and(|e| !e.contains('@')) {
            return Err("Email address looks invalid".to_owned());
        }
        let birth_date = optional(&self.birth_date);
        if birth_date.as_deref().is_some_and(|d| !is_iso_date(d)) {
            return Err("Birth date must be YYYY-MM-DD".to_owned());
        }
        Ok(PersonInput {
            name: name.to_owned(),
            gender: optional(&self.gender),
            birth_date,
            id_number: optional(&self.id_number),
            phone: optional(&self.phone),
            email,
            relation: optional(&self.relation),
            notes: optional(&self.notes),
        })
    }
}

/// One input signal per form field.
#[derive(Clone, Copy)]
struct PersonFields {
    name: RwSignal<String>,
    gender: RwSignal<String>,
    birth_date: RwSignal<String>,
    id_number: RwSignal<String>,
    phone: RwSignal<String>,
    email: RwSignal<String>,
    relation: RwSignal<String>,
    notes: RwSignal<String>,
}

impl PersonFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
            birth_date: RwSignal::new(String::new()),
            id_number: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            relation: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
        }
    }

    fn load(&self, form: PersonForm) {
        self.name.set(form.name);
        self.gender.set(form.gender);
        self.birth_date.set(form.birth_date);
        self.id_number.set(form.id_number);
        self.phone.set(form.phone);
        self.email.set(form.email);
        self.relation.set(form.relation);
        self.notes.set(form.notes);
    }

    fn snapshot(&self) -> PersonForm {
        PersonForm {
            name: self.name.get_untracked(),
            gender: self.gender.get_untracked(),
            birth_date: self.birth_date.get_untracked(),
            id_number: self.id_number.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            relation: self.relation.get_untracked(),
            notes: self.notes.get_untracked(),
        }
    }
}

/// `YYYY-MM-DD` with plausible month and day.
pub(crate) fn is_iso_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str, n: usize| s.len() == n && s.chars().all(|c| c.is_ascii_digit());
    if !(digits(y, 4) && digits(m, 2) && digits(d, 2)) {
        return false;
    }
    let month: u32 = m.parse().unwrap_or(0);
    let day: u32 = d.parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Replace the cached row with the same id, or append a new one.
pub(crate) fn upsert_person(list: &mut Vec<Person>, person: Person) {
    match list.iter_mut().find(|p| p.id == person.id) {
        Some(existing) => *existing = person,
        None => list.push(person),
    }
}

const COLUMNS: [Column; 4] = [
    Column::new("name", "Name"),
    Column::new("relation", "Relation"),
    Column::new("phone", "Phone"),
    Column::new("email", "Email"),
];

#[component]
pub fn PersonsPage() -> impl IntoView {
    let persons = use_query(keys::persons::all, |client| async move { api::persons::list_persons(&client).await });
    let mutation = use_mutation();
    let navigate = StoredValue::new_local(use_navigate());

    // `Some(None)` creates, `Some(Some(id))` edits.
    let editing = RwSignal::new(None::<Option<String>>);
    let fields = PersonFields::new();
    let form_error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(None::<Person>);

    let open_create = move |_| {
        fields.load(PersonForm::default());
        form_error.set(None);
        editing.set(Some(None));
    };

    let on_submit = Callback::new(move |()| {
        let input = match fields.snapshot().to_input() {
            Ok(input) => input,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        let target = editing.get_untracked().flatten();
        mutation.run(
            vec![keys::persons::all()],
            move |client| async move {
                match target {
                    Some(id) => api::persons::update_person(&client, &id, &input).await,
                    None => api::persons::create_person(&client, &input).await,
                }
            },
            move |person: Person| {
                mutation.notify(&format!("Saved {}", person.name));
                mutation.cache().update_data::<Vec<Person>>(&keys::persons::all(), |list| upsert_person(list, person));
                editing.set(None);
            },
        );
    });

    let on_delete = Callback::new(move |()| {
        let Some(person) = deleting.get_untracked() else {
            return;
        };
        let deleted_id = person.id.clone();
        mutation.run(
            vec![keys::persons::all()],
            move |client| async move { api::persons::delete_person(&client, &person.id).await },
            move |()| {
                // Drops the detail entry and every tab cached under it.
                mutation.cache().remove(&keys::persons::detail(&deleted_id));
                mutation.notify("Person deleted");
                deleting.set(None);
            },
        );
    });

    let actions = Callback::new(move |person: Person| {
        let edit_target = person.clone();
        view! {
            <button
                class="btn btn--small"
                on:click=move |ev| {
                    ev.stop_propagation();
                    fields.load(PersonForm::from_person(&edit_target));
                    form_error.set(None);
                    editing.set(Some(Some(edit_target.id.clone())));
                }
            >
                "Edit"
            </button>
            <button
                class="btn btn--small btn--danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    deleting.set(Some(person.clone()));
                }
            >
                "Delete"
            </button>
        }
        .into_any()
    });

    let on_select = Callback::new(move |person: Person| {
        navigate.with_value(|nav| nav(&format!("/persons/{}", person.id), NavigateOptions::default()));
    });

    view! {
        <section class="page persons">
            <header class="page__header">
                <h1>"Persons"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "New person"
                </button>
            </header>
            <QueryStatus loading=persons.loading error=persons.error/>
            <DataTable
                rows=Signal::derive(move || persons.data.get().unwrap_or_default())
                columns=COLUMNS.to_vec()
                actions=actions
                on_select=on_select
                empty_text="No persons yet."
            />

            <Show when=move || editing.get().is_some()>
                <PersonDialog
                    fields
                    error=form_error
                    on_submit
                    on_cancel=Callback::new(move |()| editing.set(None))
                    pending=mutation.pending
                />
            </Show>
            {move || {
                deleting
                    .get()
                    .map(|person| {
                        view! {
                            <ConfirmDialog
                                title="Delete person"
                                message=format!("Delete {} and all of their records?", person.name)
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
fn PersonDialog(
    fields: PersonFields,
    error: RwSignal<Option<String>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    pending: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <Dialog title="Person" on_submit on_cancel pending=pending>
            <TextField label="Name" value=fields.name required=true/>
            <SelectField
                label="Gender"
                value=fields.gender
                options=vec![("", "-"), ("male", "Male"), ("female", "Female"), ("other", "Other")]
            />
            <TextField label="Birth date" value=fields.birth_date input_type="date"/>
            <TextField label="ID number" value=fields.id_number/>
            <TextField label="Phone" value=fields.phone input_type="tel"/>
            <TextField label="Email" value=fields.email input_type="email"/>
            <TextField label="Relation" value=fields.relation placeholder="self, spouse, child..."/>
            <TextArea label="Notes" value=fields.notes rows=3/>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </Dialog>
    }
}

#[cfg(test)]
#[path = "persons_test.rs"]
mod persons_test;
