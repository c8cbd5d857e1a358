//! One person with their documents, addresses, bank accounts and contacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each tab talks to its own backend service, keyed under
//! `persons/{id}/...`, so a write in one tab only refetches that tab.
//!
//! DESIGN
//! ======
//! The four tabs share one shape: a table, an edit dialog opened for create
//! (`Some(None)`) or edit (`Some(Some(id))`), and a delete confirmation. The
//! per-record form structs below hold the raw input text and validate it into
//! the service's input type.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::data_table::DataTable;
use crate::components::dialog::{ConfirmDialog, Dialog};
use crate::components::field::{CheckboxField, SelectField, TextArea, TextField, optional};
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::persons::{
    Address, AddressInput, BankAccount, BankAccountInput, Contact, ContactInput, ContactKind, Document,
    DocumentInput,
};
use crate::query::hooks::{MutationHandle, use_mutation, use_query};
use crate::query::keys;
use crate::util::table::Column;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Tab {
    #[default]
    Documents,
    Addresses,
    BankAccounts,
    Contacts,
}

impl Tab {
    const ALL: [Tab; 4] = [Self::Documents, Self::Addresses, Self::BankAccounts, Self::Contacts];

    fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Addresses => "Addresses",
            Self::BankAccounts => "Bank accounts",
            Self::Contacts => "Contacts",
        }
    }
}

fn required(value: &str, label: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() { Err(format!("{label} is required")) } else { Ok(value.to_owned()) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DocumentForm {
    pub doc_type: String,
    pub number: String,
    pub issuer: String,
    pub issued_at: String,
    pub expires_at: String,
    pub notes: String,
}

impl DocumentForm {
    fn from_record(d: &Document) -> Self {
        Self {
            doc_type: d.doc_type.clone(),
            number: d.number.clone(),
            issuer: d.issuer.clone().unwrap_or_default(),
            issued_at: d.issued_at.clone().unwrap_or_default(),
            expires_at: d.expires_at.clone().unwrap_or_default(),
            notes: d.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_input(&self, person_id: &str) -> Result<DocumentInput, String> {
        let issued_at = optional(&self.issued_at);
        let expires_at = optional(&self.expires_at);
        if let (Some(from), Some(to)) = (&issued_at, &expires_at) {
            if to < from {
                return Err("Expiry date is before the issue date".to_owned());
            }
        }
        Ok(DocumentInput {
            person_id: person_id.to_owned(),
            doc_type: required(&self.doc_type, "Document type")?,
            number: required(&self.number, "Number")?,
            issued_at,
            expires_at,
            issuer: optional(&self.issuer),
            notes: optional(&self.notes),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AddressForm {
    pub label: String,
    pub country: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub postal_code: String,
    pub is_primary: bool,
}

impl AddressForm {
    fn from_record(a: &Address) -> Self {
        Self {
            label: a.label.clone().unwrap_or_default(),
            country: a.country.clone().unwrap_or_default(),
            province: a.province.clone().unwrap_or_default(),
            city: a.city.clone().unwrap_or_default(),
            district: a.district.clone().unwrap_or_default(),
            street: a.street.clone(),
            postal_code: a.postal_code.clone().unwrap_or_default(),
            is_primary: a.is_primary,
        }
    }

    pub fn to_input(&self, person_id: &str) -> Result<AddressInput, String> {
        Ok(AddressInput {
            person_id: person_id.to_owned(),
            label: optional(&self.label),
            country: optional(&self.country),
            province: optional(&self.province),
            city: optional(&self.city),
            district: optional(&self.district),
            street: required(&self.street, "Street")?,
            postal_code: optional(&self.postal_code),
            is_primary: self.is_primary,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BankAccountForm {
    pub bank_name: String,
    pub account_number: String,
    pub account_type: String,
    pub branch: String,
    pub currency: String,
    pub notes: String,
}

impl BankAccountForm {
    fn from_record(b: &BankAccount) -> Self {
        Self {
            bank_name: b.bank_name.clone(),
            account_number: b.account_number.clone(),
            account_type: b.account_type.clone().unwrap_or_default(),
            branch: b.branch.clone().unwrap_or_default(),
            currency: b.currency.clone().unwrap_or_default(),
            notes: b.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_input(&self, person_id: &str) -> Result<BankAccountInput, String> {
        let account_number: String = self.account_number.chars().filter(|c| !c.is_whitespace()).collect();
        if account_number.is_empty() {
            return Err("Account number is required".to_owned());
        }
        if !account_number.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Account number may only contain letters and digits".to_owned());
        }
        Ok(BankAccountInput {
            person_id: person_id.to_owned(),
            bank_name: required(&self.bank_name, "Bank")?,
            account_number,
            account_type: optional(&self.account_type),
            branch: optional(&self.branch),
            currency: optional(&self.currency).map(|c| c.to_uppercase()),
            notes: optional(&self.notes),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ContactForm {
    pub kind: String,
    pub value: String,
    pub label: String,
    pub is_primary: bool,
}

impl ContactForm {
    fn from_record(c: &Contact) -> Self {
        Self {
            kind: c.kind.as_str().to_owned(),
            value: c.value.clone(),
            label: c.label.clone().unwrap_or_default(),
            is_primary: c.is_primary,
        }
    }

    pub fn to_input(&self, person_id: &str) -> Result<ContactInput, String> {
        let kind = ContactKind::parse(&self.kind);
        let value = required(&self.value, "Value")?;
        if kind == ContactKind::Email && !value.contains('@') {
            return Err("Email address looks invalid".to_owned());
        }
        Ok(ContactInput {
            person_id: person_id.to_owned(),
            kind,
            value,
            label: optional(&self.label),
            is_primary: self.is_primary,
        })
    }
}

#[component]
pub fn PersonDetailPage() -> impl IntoView {
    let params = use_params_map();
    let person_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let person = use_query(
        move || keys::persons::detail(&person_id.get()),
        move |client| {
            let id = person_id.get_untracked();
            async move { api::persons::get_person(&client, &id).await }
        },
    );
    let tab = RwSignal::new(Tab::default());

    view! {
        <section class="page person-detail">
            <header class="page__header">
                <a class="btn" href="/persons">
                    "← Persons"
                </a>
                <h1>{move || person.data.get().map(|p| p.name).unwrap_or_default()}</h1>
            </header>
            <QueryStatus loading=person.loading error=person.error/>
            {move || {
                person
                    .data
                    .get()
                    .map(|p| {
                        view! {
                            <dl class="detail-list">
                                <dt>"Relation"</dt>
                                <dd>{p.relation.unwrap_or_default()}</dd>
                                <dt>"Birth date"</dt>
                                <dd>{p.birth_date.unwrap_or_default()}</dd>
                                <dt>"Phone"</dt>
                                <dd>{p.phone.unwrap_or_default()}</dd>
                                <dt>"Email"</dt>
                                <dd>{p.email.unwrap_or_default()}</dd>
                                <dt>"Notes"</dt>
                                <dd>{p.notes.unwrap_or_default()}</dd>
                            </dl>
                        }
                    })
            }}
            <nav class="tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button class="tabs__tab" class:tabs__tab--active=move || tab.get() == t on:click=move |_| tab.set(t)>
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            {move || match tab.get() {
                Tab::Documents => view! { <DocumentsTab person_id/> }.into_any(),
                Tab::Addresses => view! { <AddressesTab person_id/> }.into_any(),
                Tab::BankAccounts => view! { <BankAccountsTab person_id/> }.into_any(),
                Tab::Contacts => view! { <ContactsTab person_id/> }.into_any(),
            }}
        </section>
    }
}

/// Dialog and delete state shared by every tab.
struct TabState<R: Send + Sync + 'static> {
    editing: RwSignal<Option<Option<String>>>,
    error: RwSignal<Option<String>>,
    deleting: RwSignal<Option<R>>,
    mutation: MutationHandle,
}

impl<R: Send + Sync + 'static> Clone for TabState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for TabState<R> {}

impl<R: Send + Sync + 'static> TabState<R> {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            deleting: RwSignal::new(None),
            mutation: use_mutation(),
        }
    }

    fn open(&self, id: Option<String>) {
        self.error.set(None);
        self.editing.set(Some(id));
    }

    fn close(&self) {
        self.editing.set(None);
    }
}

fn row_actions<R, F>(state: TabState<R>, on_edit: F) -> Callback<R, AnyView>
where
    R: Clone + Send + Sync + 'static,
    F: Fn(&R) + Copy + Send + Sync + 'static,
{
    Callback::new(move |row: R| {
        let edit_row = row.clone();
        view! {
            <button
                class="btn btn--small"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit(&edit_row);
                }
            >
                "Edit"
            </button>
            <button
                class="btn btn--small btn--danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.deleting.set(Some(row.clone()));
                }
            >
                "Delete"
            </button>
        }
        .into_any()
    })
}

#[component]
fn DocumentsTab(person_id: Memo<String>) -> impl IntoView {
    let list = use_query(
        move || keys::persons::documents(&person_id.get()),
        move |client| {
            let id = person_id.get_untracked();
            async move { api::persons::list_documents(&client, &id).await }
        },
    );
    let state = TabState::<Document>::new();
    let doc_type = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let issuer = RwSignal::new(String::new());
    let issued_at = RwSignal::new(String::new());
    let expires_at = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let load = move |form: DocumentForm| {
        doc_type.set(form.doc_type);
        number.set(form.number);
        issuer.set(form.issuer);
        issued_at.set(form.issued_at);
        expires_at.set(form.expires_at);
        notes.set(form.notes);
    };
    let on_edit = move |d: &Document| {
        load(DocumentForm::from_record(d));
        state.open(Some(d.id.clone()));
    };

    let on_submit = Callback::new(move |()| {
        let form = DocumentForm {
            doc_type: doc_type.get_untracked(),
            number: number.get_untracked(),
            issuer: issuer.get_untracked(),
            issued_at: issued_at.get_untracked(),
            expires_at: expires_at.get_untracked(),
            notes: notes.get_untracked(),
        };
        let pid = person_id.get_untracked();
        let input = match form.to_input(&pid) {
            Ok(input) => input,
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        };
        let target = state.editing.get_untracked().flatten();
        state.mutation.run(
            vec![keys::persons::documents(&pid)],
            move |client| async move {
                match target {
                    Some(id) => api::persons::update_document(&client, &id, &input).await,
                    None => api::persons::create_document(&client, &input).await,
                }
            },
            move |_| state.close(),
        );
    });
    let on_delete = Callback::new(move |()| {
        let Some(doc) = state.deleting.get_untracked() else {
            return;
        };
        state.mutation.run(
            vec![keys::persons::documents(&doc.person_id)],
            move |client| async move { api::persons::delete_document(&client, &doc.id).await },
            move |()| state.deleting.set(None),
        );
    });

    view! {
        <div class="tab-panel">
            <button
                class="btn btn--primary"
                on:click=move |_| {
                    load(DocumentForm::default());
                    state.open(None);
                }
            >
                "Add document"
            </button>
            <QueryStatus loading=list.loading error=list.error/>
            <DataTable
                rows=Signal::derive(move || list.data.get().unwrap_or_default())
                columns=vec![
                    Column::new("doc_type", "Type"),
                    Column::new("number", "Number"),
                    Column::new("issuer", "Issuer"),
                    Column::new("issued_at", "Issued"),
                    Column::new("expires_at", "Expires"),
                ]
                actions=row_actions(state, on_edit)
                empty_text="No documents."
            />
            <Show when=move || state.editing.get().is_some()>
                <Dialog
                    title="Document"
                    on_submit
                    on_cancel=Callback::new(move |()| state.close())
                    pending=state.mutation.pending
                >
                    <TextField label="Type" value=doc_type required=true placeholder="passport, id card..."/>
                    <TextField label="Number" value=number required=true/>
                    <TextField label="Issuer" value=issuer/>
                    <TextField label="Issued" value=issued_at input_type="date"/>
                    <TextField label="Expires" value=expires_at input_type="date"/>
                    <TextArea label="Notes" value=notes rows=3/>
                    {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                </Dialog>
            </Show>
            {move || {
                state
                    .deleting
                    .get()
                    .map(|d| {
                        view! {
                            <ConfirmDialog
                                title="Delete document"
                                message=format!("Delete {} {}?", d.doc_type, d.number)
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| state.deleting.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn AddressesTab(person_id: Memo<String>) -> impl IntoView {
    let list = use_query(
        move || keys::persons::addresses(&person_id.get()),
        move |client| {
            let id = person_id.get_untracked();
            async move { api::persons::list_addresses(&client, &id).await }
        },
    );
    let state = TabState::<Address>::new();
    let label = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let province = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let is_primary = RwSignal::new(false);

    let load = move |form: AddressForm| {
        label.set(form.label);
        country.set(form.country);
        province.set(form.province);
        city.set(form.city);
        district.set(form.district);
        street.set(form.street);
        postal_code.set(form.postal_code);
        is_primary.set(form.is_primary);
    };
    let on_edit = move |a: &Address| {
        load(AddressForm::from_record(a));
        state.open(Some(a.id.clone()));
    };

    let on_submit = Callback::new(move |()| {
        let form = AddressForm {
            label: label.get_untracked(),
            country: country.get_untracked(),
            province: province.get_untracked(),
            city: city.get_untracked(),
            district: district.get_untracked(),
            street: street.get_untracked(),
            postal_code: postal_code.get_untracked(),
            is_primary: is_primary.get_untracked(),
        };
        let pid = person_id.get_untracked();
        let input = match form.to_input(&pid) {
            Ok(input) => input,
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        };
        let target = state.editing.get_untracked().flatten();
        state.mutation.run(
            vec![keys::persons::addresses(&pid)],
            move |client| async move {
                match target {
                    Some(id) => api::persons::update_address(&client, &id, &input).await,
                    None => api::persons::create_address(&client, &input).await,
                }
            },
            move |_| state.close(),
        );
    });
    let on_delete = Callback::new(move |()| {
        let Some(address) = state.deleting.get_untracked() else {
            return;
        };
        state.mutation.run(
            vec![keys::persons::addresses(&address.person_id)],
            move |client| async move { api::persons::delete_address(&client, &address.id).await },
            move |()| state.deleting.set(None),
        );
    });

    view! {
        <div class="tab-panel">
            <button
                class="btn btn--primary"
                on:click=move |_| {
                    load(AddressForm::default());
                    state.open(None);
                }
            >
                "Add address"
            </button>
            <QueryStatus loading=list.loading error=list.error/>
            <DataTable
                rows=Signal::derive(move || list.data.get().unwrap_or_default())
                columns=vec![
                    Column::new("label", "Label"),
                    Column::new("address", "Address"),
                    Column::new("postal_code", "Postal code"),
                    Column::new("is_primary", "Primary").unfilterable(),
                ]
                actions=row_actions(state, on_edit)
                empty_text="No addresses."
            />
            <Show when=move || state.editing.get().is_some()>
                <Dialog
                    title="Address"
                    on_submit
                    on_cancel=Callback::new(move |()| state.close())
                    pending=state.mutation.pending
                >
                    <TextField label="Label" value=label placeholder="home, work..."/>
                    <TextField label="Street" value=street required=true/>
                    <TextField label="District" value=district/>
                    <TextField label="City" value=city/>
                    <TextField label="Province" value=province/>
                    <TextField label="Country" value=country/>
                    <TextField label="Postal code" value=postal_code/>
                    <CheckboxField label="Primary address" value=is_primary/>
                    {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                </Dialog>
            </Show>
            {move || {
                state
                    .deleting
                    .get()
                    .map(|a| {
                        view! {
                            <ConfirmDialog
                                title="Delete address"
                                message=format!("Delete {}?", a.one_line())
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| state.deleting.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn BankAccountsTab(person_id: Memo<String>) -> impl IntoView {
    let list = use_query(
        move || keys::persons::bank_accounts(&person_id.get()),
        move |client| {
            let id = person_id.get_untracked();
            async move { api::persons::list_bank_accounts(&client, &id).await }
        },
    );
    let state = TabState::<BankAccount>::new();
    let bank_name = RwSignal::new(String::new());
    let account_number = RwSignal::new(String::new());
    let account_type = RwSignal::new(String::new());
    let branch = RwSignal::new(String::new());
    let currency = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let load = move |form: BankAccountForm| {
        bank_name.set(form.bank_name);
        account_number.set(form.account_number);
        account_type.set(form.account_type);
        branch.set(form.branch);
        currency.set(form.currency);
        notes.set(form.notes);
    };
    let on_edit = move |b: &BankAccount| {
        load(BankAccountForm::from_record(b));
        state.open(Some(b.id.clone()));
    };

    let on_submit = Callback::new(move |()| {
        let form = BankAccountForm {
            bank_name: bank_name.get_untracked(),
            account_number: account_number.get_untracked(),
            account_type: account_type.get_untracked(),
            branch: branch.get_untracked(),
            currency: currency.get_untracked(),
            notes: notes.get_untracked(),
        };
        let pid = person_id.get_untracked();
        let input = match form.to_input(&pid) {
            Ok(input) => input,
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        };
        let target = state.editing.get_untracked().flatten();
        state.mutation.run(
            vec![keys::persons::bank_accounts(&pid)],
            move |client| async move {
                match target {
                    Some(id) => api::persons::update_bank_account(&client, &id, &input).await,
                    None => api::persons::create_bank_account(&client, &input).await,
                }
            },
            move |_| state.close(),
        );
    });
    let on_delete = Callback::new(move |()| {
        let Some(account) = state.deleting.get_untracked() else {
            return;
        };
        state.mutation.run(
            vec![keys::persons::bank_accounts(&account.person_id)],
            move |client| async move { api::persons::delete_bank_account(&client, &account.id).await },
            move |()| state.deleting.set(None),
        );
    });

    view! {
        <div class="tab-panel">
            <button
                class="btn btn--primary"
                on:click=move |_| {
                    load(BankAccountForm::default());
                    state.open(None);
                }
            >
                "Add bank account"
            </button>
            <QueryStatus loading=list.loading error=list.error/>
            <DataTable
                rows=Signal::derive(move || list.data.get().unwrap_or_default())
                columns=vec![
                    Column::new("bank_name", "Bank"),
                    Column::new("account_number", "Account").unsortable(),
                    Column::new("account_type", "Type"),
                    Column::new("currency", "Currency"),
                    Column::new("branch", "Branch"),
                ]
                actions=row_actions(state, on_edit)
                empty_text="No bank accounts."
            />
            <Show when=move || state.editing.get().is_some()>
                <Dialog
                    title="Bank account"
                    on_submit
                    on_cancel=Callback::new(move |()| state.close())
                    pending=state.mutation.pending
                >
                    <TextField label="Bank" value=bank_name required=true/>
                    <TextField label="Account number" value=account_number required=true/>
                    <TextField label="Type" value=account_type placeholder="debit, credit..."/>
                    <TextField label="Branch" value=branch/>
                    <TextField label="Currency" value=currency placeholder="CNY"/>
                    <TextArea label="Notes" value=notes rows=3/>
                    {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                </Dialog>
            </Show>
            {move || {
                state
                    .deleting
                    .get()
                    .map(|b| {
                        view! {
                            <ConfirmDialog
                                title="Delete bank account"
                                message=format!("Delete {} {}?", b.bank_name, b.masked_number())
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| state.deleting.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ContactsTab(person_id: Memo<String>) -> impl IntoView {
    let list = use_query(
        move || keys::persons::contacts(&person_id.get()),
        move |client| {
            let id = person_id.get_untracked();
            async move { api::persons::list_contacts(&client, &id).await }
        },
    );
    let state = TabState::<Contact>::new();
    let kind = RwSignal::new(ContactKind::default().as_str().to_owned());
    let value = RwSignal::new(String::new());
    let label = RwSignal::new(String::new());
    let is_primary = RwSignal::new(false);

    let load = move |form: ContactForm| {
        kind.set(form.kind);
        value.set(form.value);
        label.set(form.label);
        is_primary.set(form.is_primary);
    };
    let on_edit = move |c: &Contact| {
        load(ContactForm::from_record(c));
        state.open(Some(c.id.clone()));
    };

    let on_submit = Callback::new(move |()| {
        let form = ContactForm {
            kind: kind.get_untracked(),
            value: value.get_untracked(),
            label: label.get_untracked(),
            is_primary: is_primary.get_untracked(),
        };
        let pid = person_id.get_untracked();
        let input = match form.to_input(&pid) {
            Ok(input) => input,
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        };
        let target = state.editing.get_untracked().flatten();
        state.mutation.run(
            vec![keys::persons::contacts(&pid)],
            move |client| async move {
                match target {
                    Some(id) => api::persons::update_contact(&client, &id, &input).await,
                    None => api::persons::create_contact(&client, &input).await,
                }
            },
            move |_| state.close(),
        );
    });
    let on_delete = Callback::new(move |()| {
        let Some(contact) = state.deleting.get_untracked() else {
            return;
        };
        state.mutation.run(
            vec![keys::persons::contacts(&contact.person_id)],
            move |client| async move { api::persons::delete_contact(&client, &contact.id).await },
            move |()| state.deleting.set(None),
        );
    });

    let kind_options = StoredValue::new(ContactKind::ALL.iter().map(|k| (k.as_str(), k.as_str())).collect::<Vec<_>>());

    view! {
        <div class="tab-panel">
            <button
                class="btn btn--primary"
                on:click=move |_| {
                    load(ContactForm { kind: ContactKind::default().as_str().to_owned(), ..ContactForm::default() });
                    state.open(None);
                }
            >
                "Add contact"
            </button>
            <QueryStatus loading=list.loading error=list.error/>
            <DataTable
                rows=Signal::derive(move || list.data.get().unwrap_or_default())
                columns=vec![
                    Column::new("kind", "Kind"),
                    Column::new("value", "Value"),
                    Column::new("label", "Label"),
                    Column::new("is_primary", "Primary").unfilterable(),
                ]
                actions=row_actions(state, on_edit)
                empty_text="No contacts."
            />
            <Show when=move || state.editing.get().is_some()>
                <Dialog
                    title="Contact"
                    on_submit
                    on_cancel=Callback::new(move |()| state.close())
                    pending=state.mutation.pending
                >
                    <SelectField label="Kind" value=kind options=kind_options.get_value()/>
                    <TextField label="Value" value=value required=true/>
                    <TextField label="Label" value=label/>
                    <CheckboxField label="Primary contact" value=is_primary/>
                    {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                </Dialog>
            </Show>
            {move || {
                state
                    .deleting
                    .get()
                    .map(|c| {
                        view! {
                            <ConfirmDialog
                                title="Delete contact"
                                message=format!("Delete {} {}?", c.kind.as_str(), c.value)
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| state.deleting.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
#[path = "person_detail_test.rs"]
mod person_detail_test;
