use super::*;

#[test]
fn prefixes_are_normalized() {
    assert_eq!(normalize_prefix(""), "");
    assert_eq!(normalize_prefix("/"), "");
    assert_eq!(normalize_prefix("/docs//2024"), "docs/2024/");
    assert_eq!(normalize_prefix("docs/../secret/./x/"), "docs/secret/x/");
}

#[test]
fn parent_prefix_walks_up_to_root() {
    assert_eq!(parent_prefix("docs/2024/").as_deref(), Some("docs/"));
    assert_eq!(parent_prefix("docs/").as_deref(), Some(""));
    assert_eq!(parent_prefix(""), None);
}

#[test]
fn breadcrumbs_accumulate_segments() {
    assert_eq!(
        breadcrumbs("docs/2024/"),
        vec![
            ("root".to_owned(), String::new()),
            ("docs".to_owned(), "docs/".to_owned()),
            ("2024".to_owned(), "docs/2024/".to_owned()),
        ]
    );
}
