use super::*;

#[test]
fn reply_summary_names_the_reply_kind() {
    let card = WordCard { word: "serendipity".into(), meaning: "luck".into(), ..WordCard::default() };
    assert_eq!(reply_summary(&Reply::Card(card)), "card: serendipity");
    assert_eq!(reply_summary(&Reply::NothingDue), "nothing due");
    assert_eq!(reply_summary(&Reply::Added { word: "apple".into() }), "added apple");
    let stats = WordbookStats { total: 120, due_today: 8, learned: 40, streak_days: None };
    assert_eq!(reply_summary(&Reply::Stats(stats)), "stats: 8 due of 120");
}

#[test]
fn long_messages_are_truncated() {
    let text = "x".repeat(200);
    let summary = reply_summary(&Reply::Message(text));
    assert!(summary.chars().count() <= 81);
    assert!(summary.ends_with('…'));
}
