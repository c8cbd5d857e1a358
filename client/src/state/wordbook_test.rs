use super::*;

fn card(word: &str) -> WordCard {
    WordCard { word: word.to_owned(), meaning: "m".to_owned(), ..WordCard::default() }
}

#[test]
fn card_reply_becomes_current() {
    let mut session = WordbookSession::default();
    session.apply(&Command::Review, Reply::Card(card("ephemeral")));
    assert_eq!(session.current_word(), Some("ephemeral"));
    assert!(!session.nothing_due);
    assert_eq!(session.history[0].command, "review");
}

#[test]
fn answering_clears_card_and_counts() {
    let mut session = WordbookSession::default();
    session.apply(&Command::Review, Reply::Card(card("ephemeral")));
    session.apply(&Command::Remember("ephemeral".into()), Reply::Message("Nice!".into()));
    assert_eq!(session.current_word(), None);
    assert_eq!(session.remembered, 1);
    assert_eq!(session.notice.as_deref(), Some("Nice!"));

    session.apply(&Command::Forget("x".into()), Reply::Card(card("next")));
    assert_eq!(session.forgotten, 1);
    assert_eq!(session.current_word(), Some("next"));
    assert!(session.notice.is_none());
}

#[test]
fn nothing_due_clears_card() {
    let mut session = WordbookSession::default();
    session.apply(&Command::Review, Reply::Card(card("a")));
    session.apply(&Command::Review, Reply::NothingDue);
    assert!(session.current.is_none());
    assert!(session.nothing_due);
}

#[test]
fn stats_and_added_update_side_panels() {
    let mut session = WordbookSession::default();
    let stats = WordbookStats { total: 3, due_today: 1, learned: 2, streak_days: None };
    session.apply(&Command::Stats, Reply::Stats(stats.clone()));
    session.apply(&Command::Add("zeal".into()), Reply::Added { word: "zeal".into() });
    assert_eq!(session.stats, Some(stats));
    assert_eq!(session.notice.as_deref(), Some("Added \"zeal\""));
}

#[test]
fn history_is_capped() {
    let mut session = WordbookSession::default();
    for i in 0..HISTORY_LIMIT + 5 {
        session.apply(&Command::Add(format!("w{i}")), Reply::Message(String::new()));
    }
    assert_eq!(session.history.len(), HISTORY_LIMIT);
    assert_eq!(session.history[0].command, "add w5");
}
