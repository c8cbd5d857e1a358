use super::*;

#[test]
fn split_label_strips_decoration() {
    assert_eq!(
        split_label("📖 **Word**: serendipity"),
        Some(("word".to_owned(), "serendipity".to_owned()))
    );
    assert_eq!(split_label("- 释义：意外发现珍宝的运气"), Some(("释义".to_owned(), "意外发现珍宝的运气".to_owned())));
    assert_eq!(split_label("2. Example: It was pure serendipity."), Some((
        "example".to_owned(),
        "It was pure serendipity.".to_owned()
    )));
    assert_eq!(split_label("Word:"), None);
    assert_eq!(split_label("just text"), None);
}

#[test]
fn english_card() {
    let reply = "Time to review!\n\
                 📖 **Word**: serendipity\n\
                 🔊 Phonetic: /ˌserənˈdɪpəti/\n\
                 💡 Meaning: finding good things by chance\n\
                 ✏️ Example: Meeting her was pure serendipity.\n\
                 Reviews: 3 times\n\
                 Next review: 2024-06-01";
    let Reply::Card(card) = classify_reply(reply) else {
        panic!("expected card");
    };
    assert_eq!(card.word, "serendipity");
    assert_eq!(card.phonetic.as_deref(), Some("/ˌserənˈdɪpəti/"));
    assert_eq!(card.meaning, "finding good things by chance");
    assert_eq!(card.example.as_deref(), Some("Meeting her was pure serendipity."));
    assert_eq!(card.review_count, Some(3));
    assert_eq!(card.next_review.as_deref(), Some("2024-06-01"));
}

#[test]
fn chinese_card() {
    let reply = "单词：ephemeral\n音标：/ɪˈfemərəl/\n释义：短暂的\n例句：Fame is ephemeral.\n复习次数：0";
    let card = parse_card(reply).unwrap();
    assert_eq!(card.word, "ephemeral");
    assert_eq!(card.meaning, "短暂的");
    assert_eq!(card.review_count, Some(0));
}

#[test]
fn card_needs_word_and_meaning() {
    assert!(parse_card("Word: lonely").is_none());
    assert!(parse_card("Meaning: alone").is_none());
}

#[test]
fn english_stats() {
    let reply = "📊 Stats\n- Total: 120 words\n- Due today: 8\n- Learned: 45\n- Streak: 6 days";
    assert_eq!(
        classify_reply(reply),
        Reply::Stats(WordbookStats { total: 120, due_today: 8, learned: 45, streak_days: Some(6) })
    );
}

#[test]
fn chinese_stats_without_streak() {
    let reply = "词汇量：58\n今日待复习：3\n已掌握：20";
    assert_eq!(
        parse_stats(reply),
        Some(WordbookStats { total: 58, due_today: 3, learned: 20, streak_days: None })
    );
}

#[test]
fn nothing_due_in_both_languages() {
    assert_eq!(classify_reply("🎉 No words due for review right now!"), Reply::NothingDue);
    assert_eq!(classify_reply("今天没有需要复习的单词"), Reply::NothingDue);
}

#[test]
fn added_with_quoted_word() {
    assert_eq!(
        classify_reply("✅ Added \"ubiquitous\" to your wordbook."),
        Reply::Added { word: "ubiquitous".to_owned() }
    );
    assert_eq!(classify_reply("已添加「ubiquitous」"), Reply::Added { word: "ubiquitous".to_owned() });
}

#[test]
fn added_with_bare_word() {
    assert_eq!(
        classify_reply("Added word: ubiquitous."),
        Reply::Added { word: "ubiquitous".to_owned() }
    );
}

#[test]
fn added_with_card_takes_card_word() {
    let reply = "已添加新单词！\n单词：ubiquitous\n释义：无处不在的";
    assert_eq!(classify_reply(reply), Reply::Added { word: "ubiquitous".to_owned() });
}

#[test]
fn added_inside_example_does_not_count() {
    let reply = "Word: add\nMeaning: to put together\nExample: She added sugar.";
    assert!(matches!(classify_reply(reply), Reply::Card(_)));
}

#[test]
fn card_for_word_containing_added_is_card() {
    let reply = "Word: padded\nMeaning: 有衬垫的";
    match classify_reply(reply) {
        Reply::Card(card) => assert_eq!(card.word, "padded"),
        other => panic!("expected card, got {other:?}"),
    }
}

#[test]
fn card_for_the_word_added_is_card() {
    assert!(matches!(classify_reply("**Word**: added\nMeaning: 添加的"), Reply::Card(_)));
}

#[test]
fn added_must_be_a_whole_word() {
    assert!(matches!(classify_reply("Your padded list is ready."), Reply::Message(_)));
}

#[test]
fn unrecognised_reply_is_message() {
    assert_eq!(classify_reply("  Sorry, I did not understand.  "), Reply::Message(
        "Sorry, I did not understand.".to_owned()
    ));
}

#[test]
fn commands_round_trip_through_text() {
    assert_eq!(Command::parse("review"), Some(Command::Review));
    assert_eq!(Command::parse(" STATS "), Some(Command::Stats));
    assert_eq!(Command::parse("add  serendipity"), Some(Command::Add("serendipity".to_owned())));
    assert_eq!(Command::parse("forget"), None);
    assert_eq!(Command::parse("review now"), None);
    assert_eq!(Command::Remember("ephemeral".to_owned()).message(), "remember ephemeral");
}
