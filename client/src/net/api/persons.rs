//! Persons plus the per-person record services (documents, addresses, bank
//! accounts, contacts). The record services filter by `person_id`.

use crate::net::client::{ApiClient, segment, with_query};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::persons::{
    Address, AddressInput, BankAccount, BankAccountInput, Contact, ContactInput, Document, DocumentInput, Person,
    PersonInput,
};

pub async fn list_persons(client: &ApiClient) -> Result<Vec<Person>, ApiError> {
    client.get_list(ServiceId::Persons, "/persons").await
}

pub async fn get_person(client: &ApiClient, id: &str) -> Result<Person, ApiError> {
    client.get(ServiceId::Persons, &format!("/persons/{}", segment(id))).await
}

pub async fn create_person(client: &ApiClient, input: &PersonInput) -> Result<Person, ApiError> {
    client.post(ServiceId::Persons, "/persons", input).await
}

pub async fn update_person(client: &ApiClient, id: &str, input: &PersonInput) -> Result<Person, ApiError> {
    client.put(ServiceId::Persons, &format!("/persons/{}", segment(id)), input).await
}

pub async fn delete_person(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(ServiceId::Persons, &format!("/persons/{}", segment(id))).await
}

/// One per-person record collection: service plus resource path.
struct Records {
    service: ServiceId,
    path: &'static str,
}

const DOCUMENTS: Records = Records { service: ServiceId::Documents, path: "/documents" };
const ADDRESSES: Records = Records { service: ServiceId::Addresses, path: "/addresses" };
const BANK_ACCOUNTS: Records = Records { service: ServiceId::BankAccounts, path: "/bank-accounts" };
const CONTACTS: Records = Records { service: ServiceId::Contacts, path: "/contacts" };

impl Records {
    fn list_path(&self, person_id: &str) -> String {
        with_query(self.path, &[("person_id", person_id)])
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, segment(id))
    }
}

pub async fn list_documents(client: &ApiClient, person_id: &str) -> Result<Vec<Document>, ApiError> {
    client.get_list(DOCUMENTS.service, &DOCUMENTS.list_path(person_id)).await
}

pub async fn create_document(client: &ApiClient, input: &DocumentInput) -> Result<Document, ApiError> {
    client.post(DOCUMENTS.service, DOCUMENTS.path, input).await
}

pub async fn update_document(client: &ApiClient, id: &str, input: &DocumentInput) -> Result<Document, ApiError> {
    client.put(DOCUMENTS.service, &DOCUMENTS.item_path(id), input).await
}

pub async fn delete_document(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(DOCUMENTS.service, &DOCUMENTS.item_path(id)).await
}

pub async fn list_addresses(client: &ApiClient, person_id: &str) -> Result<Vec<Address>, ApiError> {
    client.get_list(ADDRESSES.service, &ADDRESSES.list_path(person_id)).await
}

pub async fn create_address(client: &ApiClient, input: &AddressInput) -> Result<Address, ApiError> {
    client.post(ADDRESSES.service, ADDRESSES.path, input).await
}

pub async fn update_address(client: &ApiClient, id: &str, input: &AddressInput) -> Result<Address, ApiError> {
    client.put(ADDRESSES.service, &ADDRESSES.item_path(id), input).await
}

pub async fn delete_address(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(ADDRESSES.service, &ADDRESSES.item_path(id)).await
}

pub async fn list_bank_accounts(client: &ApiClient, person_id: &str) -> Result<Vec<BankAccount>, ApiError> {
    client.get_list(BANK_ACCOUNTS.service, &BANK_ACCOUNTS.list_path(person_id)).await
}

pub async fn create_bank_account(client: &ApiClient, input: &BankAccountInput) -> Result<BankAccount, ApiError> {
    client.post(BANK_ACCOUNTS.service, BANK_ACCOUNTS.path, input).await
}

pub async fn update_bank_account(
    client: &ApiClient,
    id: &str,
    input: &BankAccountInput,
) -> Result<BankAccount, ApiError> {
    client.put(BANK_ACCOUNTS.service, &BANK_ACCOUNTS.item_path(id), input).await
}

pub async fn delete_bank_account(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(BANK_ACCOUNTS.service, &BANK_ACCOUNTS.item_path(id)).await
}

pub async fn list_contacts(client: &ApiClient, person_id: &str) -> Result<Vec<Contact>, ApiError> {
    client.get_list(CONTACTS.service, &CONTACTS.list_path(person_id)).await
}

pub async fn create_contact(client: &ApiClient, input: &ContactInput) -> Result<Contact, ApiError> {
    client.post(CONTACTS.service, CONTACTS.path, input).await
}

pub async fn update_contact(client: &ApiClient, id: &str, input: &ContactInput) -> Result<Contact, ApiError> {
    client.put(CONTACTS.service, &CONTACTS.item_path(id), input).await
}

pub async fn delete_contact(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(CONTACTS.service, &CONTACTS.item_path(id)).await
}
