use futures::executor::block_on;
use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{Body, FormValue, Method};
use crate::net::testing::scripted_client;
use crate::net::types::finance::TransactionKind;
use crate::net::types::homework::{ConfirmRequest, ConfirmedVerdict, SubmissionStatus};
use crate::net::types::persons::DocumentInput;
use crate::util::wordbook_parse::{Command, Reply};

#[test]
fn person_detail_path_is_encoded() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!({ "id": 7, "name": "Ann" }));
    let person = block_on(super::persons::get_person(&client, "a/b")).unwrap();
    assert_eq!(person.id, "7");
    assert_eq!(transport.last_request().url, "/svc/persons/persons/a%2Fb");
}

#[test]
fn record_lists_filter_by_person() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!({ "success": true, "data": [] }));
    transport.respond(200, json!([]));
    transport.respond(200, json!([]));
    transport.respond(200, json!([]));

    block_on(super::persons::list_documents(&client, "42")).unwrap();
    assert_eq!(transport.last_request().url, "/svc/documents/documents?person_id=42");
    block_on(super::persons::list_addresses(&client, "42")).unwrap();
    assert_eq!(transport.last_request().url, "/svc/addresses/addresses?person_id=42");
    block_on(super::persons::list_bank_accounts(&client, "42")).unwrap();
    assert_eq!(transport.last_request().url, "/svc/bank-accounts/bank-accounts?person_id=42");
    block_on(super::persons::list_contacts(&client, "42")).unwrap();
    assert_eq!(transport.last_request().url, "/svc/contacts/contacts?person_id=42");
}

#[test]
fn create_document_posts_json() {
    let (client, transport) = scripted_client();
    transport.respond(201, json!({
        "id": 1, "person_id": 42, "doc_type": "passport", "number": "E123"
    }));
    let input = DocumentInput {
        person_id: "42".into(),
        doc_type: "passport".into(),
        number: "E123".into(),
        ..DocumentInput::default()
    };
    let doc = block_on(super::persons::create_document(&client, &input)).unwrap();
    assert_eq!(doc.number, "E123");
    let req = transport.last_request();
    assert_eq!(req.method, Method::Post);
    let Body::Json(body) = req.body else {
        panic!("expected json body");
    };
    assert_eq!(body["doc_type"], "passport");
    assert!(body.get("issuer").is_none());
}

#[test]
fn delete_uses_item_path() {
    let (client, transport) = scripted_client();
    transport.respond_raw(204, "");
    block_on(super::persons::delete_contact(&client, "9")).unwrap();
    let req = transport.last_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.url, "/svc/contacts/contacts/9");
}

#[test]
fn grading_upload_poll_and_confirm() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!({ "success": true, "data": { "id": "s1" } }));
    transport.respond(200, json!({
        "id": "s1", "status": "graded", "graded_at": 1000.0,
        "results": [{ "index": 1, "correct": true }]
    }));
    transport.respond(200, json!({ "id": "s1", "status": "confirmed", "results": [] }));

    let receipt = block_on(super::homework::upload_submission(&client, "p.jpg", "image/jpeg", vec![1])).unwrap();
    assert_eq!(receipt.submission_id, "s1");
    let Body::Multipart(parts) = transport.last_request().body else {
        panic!("expected multipart");
    };
    assert!(matches!(&parts[0].value, FormValue::File { content_type, .. } if content_type == "image/jpeg"));

    let sub = block_on(super::homework::get_submission(&client, "s1")).unwrap();
    assert_eq!(sub.status, SubmissionStatus::Graded);
    assert_eq!(sub.graded_at, 1000);
    assert_eq!(transport.last_request().url, "/svc/homework/grading/submissions/s1");

    let body = ConfirmRequest { results: vec![ConfirmedVerdict { index: 1, correct: false }] };
    let confirmed = block_on(super::homework::confirm_submission(&client, "s1", &body)).unwrap();
    assert_eq!(confirmed.status, SubmissionStatus::Confirmed);
    assert_eq!(transport.last_request().url, "/svc/homework/grading/submissions/s1/confirm");
}

#[test]
fn wordbook_send_classifies_reply() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!({ "reply": "Word: zeal\nMeaning: great energy" }));
    let reply = block_on(super::wordbook::send(&client, &Command::Review)).unwrap();
    assert!(matches!(reply, Reply::Card(ref c) if c.word == "zeal"));
    let Body::Json(body) = transport.last_request().body else {
        panic!("expected json body");
    };
    assert_eq!(body, json!({ "message": "review" }));
}

#[test]
fn finance_summary_falls_back_to_local_totals() {
    let (client, transport) = scripted_client();
    transport.respond(404, json!({ "message": "not found" }));
    transport.respond(200, json!([
        { "id": 1, "date": "2024-05-01", "amount": 100, "category": "food", "kind": "expense" },
        { "id": 2, "date": "2024-05-02", "amount": 900, "category": "salary", "kind": "income" }
    ]));
    let summary = block_on(super::finance::monthly_summary(&client, "2024-05")).unwrap();
    assert_eq!(summary.income, 900.0);
    assert_eq!(summary.expense, 100.0);
    assert_eq!(transport.last_request().url, "/svc/finance/transactions?month=2024-05");
}

#[test]
fn finance_summary_other_errors_propagate() {
    let (client, transport) = scripted_client();
    transport.respond(500, json!({ "error": "db down" }));
    let err = block_on(super::finance::monthly_summary(&client, "2024-05")).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: "db down".into() });
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn finance_transactions_decode_kind() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!({ "items": [
        { "id": "t1", "date": "2024-05-01", "amount": "12.5", "category": "food" }
    ]}));
    let txs = block_on(super::finance::list_transactions(&client, "2024-05")).unwrap();
    assert_eq!(txs[0].kind, TransactionKind::Expense);
    assert_eq!(txs[0].signed_amount(), -12.5);
}

#[test]
fn files_listing_and_download_url() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!([{ "name": "docs/a.pdf", "size": 10 }]));
    let files = block_on(super::files::list(&client, "docs/")).unwrap();
    assert_eq!(files[0].file_name(), "a.pdf");
    assert_eq!(transport.last_request().url, "/svc/file-gateway/files?prefix=docs%2F");
    assert_eq!(
        super::files::download_url(&client, "docs/a.pdf"),
        "/svc/file-gateway/files/docs%2Fa.pdf/download"
    );
}

#[test]
fn wake_posts_to_device() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!({ "sent": true }));
    let result = block_on(super::wake::wake(&client, "nas")).unwrap();
    assert!(result.sent);
    assert_eq!(transport.last_request().url, "/svc/remote-wake/devices/nas/wake");
}

#[test]
fn catalog_and_skills_use_their_services() {
    let (client, transport) = scripted_client();
    transport.respond(200, json!([{ "name": "persons", "dependencies": ["config"] }]));
    transport.respond(200, json!({ "name": "persons", "healthy": true, "latency_ms": 12 }));
    transport.respond(200, json!([{ "id": 1, "name": "rust" }]));

    let services = block_on(super::catalog::list_services(&client)).unwrap();
    assert_eq!(services[0].depends_on, vec!["config".to_owned()]);
    let health = block_on(super::catalog::service_health(&client, "persons")).unwrap();
    assert!(health.healthy);
    assert_eq!(transport.last_request().url, "/svc/config/services/persons/health");
    let skills = block_on(super::skills::list_skills(&client)).unwrap();
    assert_eq!(skills[0].id, "1");
}
