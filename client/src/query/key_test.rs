use super::*;

#[test]
fn display_joins_segments() {
    let key = QueryKey::root("persons").with("42").with("documents");
    assert_eq!(key.to_string(), "persons/42/documents");
    assert_eq!(QueryKey::root("files").with(7_i64).to_string(), "files/7");
}

#[test]
fn starts_with_is_segment_wise() {
    let detail = QueryKey::root("persons").with("42");
    let docs = detail.clone().with("documents");
    assert!(docs.starts_with(&detail));
    assert!(docs.starts_with(&QueryKey::root("persons")));
    assert!(docs.starts_with(&QueryKey::default()));
    assert!(!detail.starts_with(&docs));
    // "persons/4" is not a prefix of "persons/42" even though the strings are.
    assert!(!detail.starts_with(&QueryKey::root("persons").with("4")));
}

#[test]
fn str_and_int_segments_differ() {
    assert_ne!(QueryKey::root("x").with("1"), QueryKey::root("x").with(1_i64));
}

#[test]
fn parent_drops_last_segment() {
    let key: QueryKey = ["a", "b"].into_iter().collect();
    assert_eq!(key.parent(), Some(QueryKey::root("a")));
    assert_eq!(QueryKey::default().parent(), None);
    assert_eq!(key.len(), 2);
    assert!(!key.is_empty());
}
