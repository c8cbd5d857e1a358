use super::*;

#[test]
fn document_requires_type_and_number() {
    let form = DocumentForm { doc_type: "passport".into(), ..DocumentForm::default() };
    assert_eq!(form.to_input("p1"), Err("Number is required".to_owned()));
    let form = DocumentForm { number: "E123".into(), ..DocumentForm::default() };
    assert_eq!(form.to_input("p1"), Err("Document type is required".to_owned()));
}

#[test]
fn document_expiry_must_not_precede_issue() {
    let form = DocumentForm {
        doc_type: "passport".into(),
        number: "E123".into(),
        issued_at: "2020-05-01".into(),
        expires_at: "2019-05-01".into(),
        ..DocumentForm::default()
    };
    assert!(form.to_input("p1").is_err());
    let ok = DocumentForm { expires_at: "2030-05-01".into(), ..form };
    let input = ok.to_input("p1").unwrap();
    assert_eq!(input.person_id, "p1");
    assert_eq!(input.expires_at.as_deref(), Some("2030-05-01"));
}

#[test]
fn address_needs_street_and_keeps_primary_flag() {
    assert!(AddressForm::default().to_input("p1").is_err());
    let input = AddressForm { street: " 1 Main St ".into(), city: "Springfield".into(), is_primary: true, ..AddressForm::default() }
        .to_input("p1")
        .unwrap();
    assert_eq!(input.street, "1 Main St");
    assert_eq!(input.country, None);
    assert!(input.is_primary);
}

#[test]
fn bank_account_number_is_compacted_and_checked() {
    let form = BankAccountForm {
        bank_name: "ICBC".into(),
        account_number: "6222 0000 1234".into(),
        currency: "cny".into(),
        ..BankAccountForm::default()
    };
    let input = form.to_input("p1").unwrap();
    assert_eq!(input.account_number, "622200001234");
    assert_eq!(input.currency.as_deref(), Some("CNY"));

    let bad = BankAccountForm { account_number: "6222-0000".into(), ..form };
    assert!(bad.to_input("p1").is_err());
}

#[test]
fn contact_kind_parses_and_email_is_checked() {
    let form = ContactForm { kind: "email".into(), value: "not-an-email".into(), ..ContactForm::default() };
    assert!(form.to_input("p1").is_err());

    let form = ContactForm { kind: "telegram".into(), value: "@ada".into(), ..ContactForm::default() };
    assert_eq!(form.to_input("p1").unwrap().kind, ContactKind::Other);
}

#[test]
fn contact_form_round_trips_record() {
    let contact = Contact {
        id: "c1".into(),
        person_id: "p1".into(),
        kind: ContactKind::Wechat,
        value: "ada_l".into(),
        label: Some("personal".into()),
        is_primary: true,
    };
    let input = ContactForm::from_record(&contact).to_input("p1").unwrap();
    assert_eq!(input.kind, ContactKind::Wechat);
    assert_eq!(input.label.as_deref(), Some("personal"));
    assert!(input.is_primary);
}
