use super::ai_weekly::AiReport;
use super::catalog::ServiceInfo;
use super::files::FileEntry;
use super::finance::{Transaction, TransactionKind, summarize};
use super::homework::{Submission, SubmissionStatus, UploadReceipt};
use super::persons::{Address, BankAccount, Contact, ContactKind, Person};
use serde_json::json;

// =============================================================
// Lenient decoding
// =============================================================

#[test]
fn person_accepts_numeric_id() {
    let person: Person = serde_json::from_value(json!({ "id": 42, "name": "Lin" })).unwrap();
    assert_eq!(person.id, "42");
    assert_eq!(person.email, None);
}

#[test]
fn person_accepts_integral_float_id() {
    let person: Person = serde_json::from_value(json!({ "id": 7.0, "name": "Lin" })).unwrap();
    assert_eq!(person.id, "7");
}

#[test]
fn person_rejects_fractional_id() {
    let err = serde_json::from_value::<Person>(json!({ "id": 7.5, "name": "Lin" }));
    assert!(err.is_err());
}

#[test]
fn contact_flags_accept_numbers_and_unknown_kinds() {
    let contact: Contact = serde_json::from_value(json!({
        "id": "c1", "person_id": 3, "kind": "telegram", "value": "@lin", "is_primary": 1
    }))
    .unwrap();
    assert_eq!(contact.kind, ContactKind::Other);
    assert!(contact.is_primary);
    assert_eq!(contact.person_id, "3");
}

#[test]
fn submission_reads_string_graded_at_and_flags() {
    let sub: Submission = serde_json::from_value(json!({
        "id": "s1",
        "status": "graded",
        "graded_at": "1700000000000",
        "results": [{ "index": 0, "correct": "true" }, { "index": 1.0, "correct": 0 }]
    }))
    .unwrap();
    assert_eq!(sub.status, SubmissionStatus::Graded);
    assert_eq!(sub.graded_at, 1_700_000_000_000);
    assert!(sub.results[0].correct);
    assert!(!sub.results[1].correct);
    assert_eq!(sub.results[1].index, 1);
}

#[test]
fn upload_receipt_accepts_id_alias() {
    let receipt: UploadReceipt = serde_json::from_value(json!({ "id": 99 })).unwrap();
    assert_eq!(receipt.submission_id, "99");
}

#[test]
fn transaction_amount_accepts_strings() {
    let tx: Transaction = serde_json::from_value(json!({
        "id": 1, "date": "2026-10-01", "amount": "12.50", "category": "food"
    }))
    .unwrap();
    assert!((tx.amount - 12.5).abs() < f64::EPSILON);
    assert_eq!(tx.kind, TransactionKind::Expense);
    assert!((tx.signed_amount() + 12.5).abs() < f64::EPSILON);
}

#[test]
fn service_info_accepts_dependencies_alias_and_numeric_port() {
    let info: ServiceInfo = serde_json::from_value(json!({
        "name": "homework", "port": 8081, "dependencies": ["file-gateway"]
    }))
    .unwrap();
    assert_eq!(info.port.as_deref(), Some("8081"));
    assert_eq!(info.depends_on, vec!["file-gateway".to_owned()]);
}

#[test]
fn ai_report_accepts_content_alias() {
    let report: AiReport = serde_json::from_value(json!({
        "id": 3, "title": "Week 41", "content": "# Hello"
    }))
    .unwrap();
    assert_eq!(report.content_md, "# Hello");
    assert!(report.items.is_empty());
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn address_one_line_skips_blank_parts() {
    let address = Address {
        id: "a".to_owned(),
        person_id: "p".to_owned(),
        label: None,
        country: Some("CN".to_owned()),
        province: Some(String::new()),
        city: Some("Hangzhou".to_owned()),
        district: None,
        street: "1 West Lake Rd".to_owned(),
        postal_code: None,
        is_primary: false,
    };
    assert_eq!(address.one_line(), "1 West Lake Rd, Hangzhou, CN");
}

#[test]
fn bank_account_masks_all_but_last_four() {
    let mut account = BankAccount {
        id: "b".to_owned(),
        person_id: "p".to_owned(),
        bank_name: "Bank".to_owned(),
        account_number: "6222 0000 1234 5678".to_owned(),
        account_type: None,
        branch: None,
        currency: None,
        notes: None,
    };
    assert_eq!(account.masked_number(), "**** 5678");
    account.account_number = "123".to_owned();
    assert_eq!(account.masked_number(), "123");
}

#[test]
fn file_entry_name_is_last_segment() {
    let entry: FileEntry = serde_json::from_value(json!({ "path": "scans/2026/a.pdf", "size": 10 })).unwrap();
    assert_eq!(entry.file_name(), "a.pdf");
    let dir: FileEntry = serde_json::from_value(json!({ "key": "scans/", "is_dir": true })).unwrap();
    assert_eq!(dir.file_name(), "scans");
}

#[test]
fn summarize_groups_expenses_by_category() {
    let txs: Vec<Transaction> = serde_json::from_value(json!([
        { "id": 1, "date": "2026-10-01", "amount": 30, "category": "food" },
        { "id": 2, "date": "2026-10-02", "amount": 1000, "category": "salary", "kind": "income" },
        { "id": 3, "date": "2026-10-03", "amount": 20, "category": "food" },
        { "id": 4, "date": "2026-10-04", "amount": 80, "category": "rent" }
    ]))
    .unwrap();
    let summary = summarize("2026-10", &txs);
    assert!((summary.income - 1000.0).abs() < f64::EPSILON);
    assert!((summary.expense - 130.0).abs() < f64::EPSILON);
    assert_eq!(summary.by_category[0].category, "rent");
    assert_eq!(summary.by_category[1].category, "food");
    assert!((summary.by_category[1].total - 50.0).abs() < f64::EPSILON);
}
